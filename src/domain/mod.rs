//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `traits` - The six-dimensional trait vector and sparse deltas
//! - `survey` - Questions, answers and trait scoring
//! - `matching` - Dam corpus and similarity ranking
//! - `tags` - Threshold-based type tags
//!
//! # Design Philosophy
//!
//! Everything here is pure and synchronous. No ports or adapters are needed
//! since there's no I/O; loading the corpus happens in the application layer.

pub mod foundation;
pub mod matching;
pub mod survey;
pub mod tags;
pub mod traits;
