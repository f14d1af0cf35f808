mod common;

use common::random_text;
use unl_align::{
    FilterPlan, SimilarityCache, TokenPool, build_frequency_index, build_position_index,
    expand_position_pairs, filter_candidates, generate_candidates,
    longest_increasing_subsequence, select_anchors,
};

#[test]
fn classic_lis_example() {
    let seq = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];
    let lis = longest_increasing_subsequence(&seq);
    assert_eq!(lis.len(), 6);
    assert!(lis.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(lis, vec![0, 2, 6, 9, 11, 15]);
}

#[test]
fn lis_length_matches_quadratic_reference() {
    for seed in 0u64..32 {
        let vocab: Vec<String> = (0..20).map(|v| format!("{v:02}")).collect();
        let vocab_refs: Vec<&str> = vocab.iter().map(String::as_str).collect();
        let seq = random_text(seed, 25, &vocab_refs);

        let lis = longest_increasing_subsequence(&seq);
        assert!(lis.windows(2).all(|w| w[0] < w[1]), "seed={seed}");
        assert_eq!(lis.len(), quadratic_lis_len(&seq), "seed={seed}");
    }
}

#[test]
fn anchors_are_strictly_increasing_and_maximal() {
    let vocab = ["a", "b", "c", "d", "e", "f"];
    for seed in 0u64..32 {
        let mut pool = TokenPool::new();
        let x = pool.intern_all(random_text(seed, 20, &vocab));
        let y = pool.intern_all(random_text(seed + 77, 20, &vocab));

        let fx = build_frequency_index(&x);
        let fy = build_frequency_index(&y);
        let mut cache = SimilarityCache::new();
        let candidates = filter_candidates(
            generate_candidates(&fx, &fy),
            FilterPlan::Unfiltered,
            &pool,
            &mut cache,
        );
        let px = build_position_index(&x, 0);
        let py = build_position_index(&y, 0);

        let Some(anchors) = select_anchors(&candidates, &px, &py) else {
            assert!(candidates.is_empty(), "seed={seed}");
            continue;
        };
        assert!(!anchors.is_empty());
        assert!(
            anchors.windows(2).all(|w| w[0].x < w[1].x && w[0].y < w[1].y),
            "seed={seed}: {anchors:?}"
        );

        let points = expand_position_pairs(&candidates, &px, &py);
        let pairs: Vec<(usize, usize)> = points.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(anchors.len(), quadratic_chain_len(&pairs), "seed={seed}");
    }
}

fn quadratic_lis_len<T: Ord>(seq: &[T]) -> usize {
    let mut best = vec![1usize; seq.len()];
    for i in 0..seq.len() {
        for j in 0..i {
            if seq[j] < seq[i] {
                best[i] = best[i].max(best[j] + 1);
            }
        }
    }
    best.into_iter().max().unwrap_or(0)
}

fn quadratic_chain_len(points: &[(usize, usize)]) -> usize {
    let mut sorted = points.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    let mut best = vec![1usize; sorted.len()];
    for i in 0..sorted.len() {
        for j in 0..i {
            if sorted[j].0 < sorted[i].0 && sorted[j].1 < sorted[i].1 {
                best[i] = best[i].max(best[j] + 1);
            }
        }
    }
    best.into_iter().max().unwrap_or(0)
}
