//! Deterministic SEO analysis and internal-link recommendation engine.
//!
//! `editorial-core` scores long-form written content for search-engine
//! readiness (title and meta-description bounds, heading structure, alt
//! text, internal link density, readability) and proposes anchor-text/target
//! links into a caller-supplied corpus. All operations are deterministic,
//! synchronous pure functions — identical inputs always produce identical
//! outputs, byte-for-byte — and total: any input of the declared types
//! yields a result, never an error.
//!
//! Routing, persistence, rendering, and authentication belong to the
//! surrounding platform; this crate only consumes raw content strings and
//! candidate corpora, and produces structured scores, issues, and
//! suggestions.

pub mod api;
pub mod document;
pub mod extract;
pub mod linking;
pub mod readability;
pub mod seo;
pub mod types;
