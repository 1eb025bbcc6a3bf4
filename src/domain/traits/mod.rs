//! Trait Model - the six-dimensional personality vector.
//!
//! - `TraitDimension` - the named axes (storage, release, input, purpose, scale, stability)
//! - `TraitVector` - a validated vector, every dimension within [0, 100]
//! - `RawTraits` - unclamped accumulator; `clamp()` is the only way back to a `TraitVector`
//! - `TraitDelta` - sparse per-choice effect, merged by "add present, ignore absent"

mod delta;
mod dimension;
mod vector;

pub use delta::TraitDelta;
pub use dimension::TraitDimension;
pub use vector::{RawTraits, TraitVector, TRAIT_DEFAULT, TRAIT_MAX, TRAIT_MIN};
