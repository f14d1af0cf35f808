use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Interned handle for one distinct token string.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId(pub u32);

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Interning table shared by both texts of one alignment run.
///
/// Equal strings always map to the same `TokenId`, so token equality across
/// the two texts reduces to id equality.
#[derive(Debug, Default)]
pub struct TokenPool {
    tokens: Vec<String>,
    ids: FxHashMap<String, TokenId>,
}

impl TokenPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, token: &str) -> TokenId {
        if let Some(&id) = self.ids.get(token) {
            return id;
        }
        let id = TokenId(self.tokens.len() as u32);
        self.tokens.push(token.to_owned());
        self.ids.insert(token.to_owned(), id);
        id
    }

    pub fn intern_all<I, S>(&mut self, tokens: I) -> Vec<TokenId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .map(|token| self.intern(token.as_ref()))
            .collect()
    }

    pub fn resolve(&self, id: TokenId) -> &str {
        &self.tokens[id.0 as usize]
    }

    pub fn resolve_all(&self, ids: &[TokenId]) -> Vec<String> {
        ids.iter().map(|&id| self.resolve(id).to_owned()).collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
