pub mod markup;
pub mod structure;

pub use markup::{extract_plain_text, tokenize_sentences, tokenize_words};
pub use structure::MarkupStructure;
