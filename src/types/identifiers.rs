use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Opaque, caller-supplied document identifier.
///
/// The engine never interprets the value; it only compares ids to enforce
/// the no-self-link and one-suggestion-per-target invariants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        DocumentId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        DocumentId::new(id)
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        DocumentId::new(id)
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content-derived link suggestion identifier.
///
/// Derived from the (source, target, anchor) triple, so a given suggestion
/// carries the same id on every call. Within one result set the triple is
/// unique — at most one suggestion exists per target — which makes the id
/// unique there too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionId(String);

impl SuggestionId {
    pub fn from_parts(source: &DocumentId, target: &DocumentId, anchor: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(source.as_str().as_bytes());
        hasher.update(b"\n");
        hasher.update(target.as_str().as_bytes());
        hasher.update(b"\n");
        hasher.update(anchor.as_bytes());

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        SuggestionId(format!("lnk-{}", &hex[..16]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
