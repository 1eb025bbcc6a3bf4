//! Tags module - descriptive type tags derived from a trait vector.

mod classifier;

pub use classifier::{
    TagClassifier, TagFamily, TagLevel, TypeTag, HIGH_THRESHOLD, LOW_THRESHOLD, MAX_TAGS,
    TAG_FAMILIES,
};
