//! Recursive anchor-based word alignment.
//!
//! One pass over a pair of sub-ranges works as follows:
//!
//! 1. **Frequency indexing** (`frequency.rs`)
//!    - Count each token and bucket tokens by frequency; record positions
//!
//! 2. **Candidate generation** (`candidates.rs`)
//!    - Pair tokens sharing a frequency, then filter by exact match, common
//!      prefix and/or spelling similarity according to the `FilterPlan`
//!
//! 3. **Anchor chain** (`anchor_chain.rs`)
//!    - Expand candidates into position pairs and keep the longest chain
//!      strictly increasing in both texts (LIS)
//!
//! 4. **Assembly** (`assembly.rs`)
//!    - Emit anchors in order and push the gaps between them back onto the
//!      work stack one level deeper. A range with no position pairs becomes a
//!      `?` segment; a range past the recursion bound becomes a `!` segment.

pub mod anchor_chain;
pub mod assembly;
pub mod candidates;
pub mod frequency;

pub use assembly::{Aligner, align, align_to_sink};
