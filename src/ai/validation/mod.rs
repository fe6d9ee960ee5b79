//! Response Validation
//!
//! Lenient JSON extraction applied between the raw model response and the
//! typed domain shapes. Shape violations that survive repair surface as
//! `ResponseShapeInvalid`; capabilities with a defined fallback degrade
//! instead of propagating.

mod json_extract;

pub use json_extract::parse_lenient;
