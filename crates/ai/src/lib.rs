//! `buteco-ai`
//!
//! **Responsibility:** Optional text-generation boundary.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on the inventory store or its aggregates.
//! - It must not mutate domain state; it only returns text for the caller
//!   to place into a field.
//! - Missing configuration or call failure degrades to fixed fallback text,
//!   never to an error.

pub mod gemini;
pub mod generator;

pub use generator::{
    DescriptionGenerator, GenerationError, API_KEY_ENV, GENERATION_FAILED_FALLBACK,
    MISSING_KEY_FALLBACK,
};
