pub mod document;

pub use document::{CandidateDocument, ContentDocument};
