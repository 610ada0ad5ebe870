//! Stitch Core Types
//!
//! This crate provides the foundational types used throughout the stitch
//! workspace:
//! - Type tags (the declared graph result type of a captured value)
//! - The SharedResult trait (implemented by referenceable mutation results)
//! - CapturedResult (a type-tagged, opaque captured value)

mod captured;
mod tag;

pub use captured::*;
pub use tag::*;
