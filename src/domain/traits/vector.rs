//! Trait vector and its unclamped accumulator.

use serde::{Deserialize, Serialize};

use super::{TraitDelta, TraitDimension};
use crate::domain::foundation::ValidationError;

/// Lower bound of every dimension.
pub const TRAIT_MIN: f64 = 0.0;

/// Upper bound of every dimension.
pub const TRAIT_MAX: f64 = 100.0;

/// Neutral starting value of every dimension.
pub const TRAIT_DEFAULT: f64 = 50.0;

/// A complete trait vector with every dimension in `[0, 100]`.
///
/// Construction and deserialization both reject missing, non-finite or
/// out-of-range values, so any `TraitVector` in hand is safe to match against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTraits")]
pub struct TraitVector {
    storage: f64,
    release: f64,
    input: f64,
    purpose: f64,
    scale: f64,
    stability: f64,
}

impl TraitVector {
    /// The neutral vector (all dimensions 50).
    pub const NEUTRAL: Self = Self {
        storage: TRAIT_DEFAULT,
        release: TRAIT_DEFAULT,
        input: TRAIT_DEFAULT,
        purpose: TRAIT_DEFAULT,
        scale: TRAIT_DEFAULT,
        stability: TRAIT_DEFAULT,
    };

    /// Creates a vector, validating every dimension.
    pub fn new(
        storage: f64,
        release: f64,
        input: f64,
        purpose: f64,
        scale: f64,
        stability: f64,
    ) -> Result<Self, ValidationError> {
        Self::from_array([storage, release, input, purpose, scale, stability])
    }

    /// Creates a vector from values in canonical dimension order.
    pub fn from_array(values: [f64; 6]) -> Result<Self, ValidationError> {
        for (dim, value) in TraitDimension::ALL.iter().zip(values.iter()) {
            if !value.is_finite() || *value < TRAIT_MIN || *value > TRAIT_MAX {
                return Err(ValidationError::out_of_range(
                    dim.name(),
                    TRAIT_MIN,
                    TRAIT_MAX,
                    *value,
                ));
            }
        }
        let [storage, release, input, purpose, scale, stability] = values;
        Ok(Self {
            storage,
            release,
            input,
            purpose,
            scale,
            stability,
        })
    }

    /// Returns the value of one dimension.
    pub fn get(&self, dimension: TraitDimension) -> f64 {
        match dimension {
            TraitDimension::Storage => self.storage,
            TraitDimension::Release => self.release,
            TraitDimension::Input => self.input,
            TraitDimension::Purpose => self.purpose,
            TraitDimension::Scale => self.scale,
            TraitDimension::Stability => self.stability,
        }
    }

    /// Returns the values in canonical dimension order.
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.storage,
            self.release,
            self.input,
            self.purpose,
            self.scale,
            self.stability,
        ]
    }

    /// Adds `delta` to this vector without clamping.
    pub fn apply_delta(&self, delta: &TraitDelta) -> RawTraits {
        let mut raw = RawTraits::from(*self);
        raw.add(delta);
        raw
    }
}

impl Default for TraitVector {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<RawTraits> for TraitVector {
    type Error = ValidationError;

    fn try_from(raw: RawTraits) -> Result<Self, Self::Error> {
        Self::from_array(raw.as_array())
    }
}

/// Unclamped running sum of trait values.
///
/// Values may leave `[0, 100]` while deltas are being folded in; call
/// [`RawTraits::clamp`] once at the end to obtain a valid [`TraitVector`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawTraits {
    pub storage: f64,
    pub release: f64,
    pub input: f64,
    pub purpose: f64,
    pub scale: f64,
    pub stability: f64,
}

impl RawTraits {
    /// Merges a sparse delta: present dimensions are added, absent ones ignored.
    pub fn add(&mut self, delta: &TraitDelta) {
        for (dim, value) in delta.iter() {
            *self.slot_mut(dim) += f64::from(value);
        }
    }

    /// Returns the value of one dimension.
    pub fn get(&self, dimension: TraitDimension) -> f64 {
        self.as_array()[dimension.index()]
    }

    /// Returns the values in canonical dimension order.
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.storage,
            self.release,
            self.input,
            self.purpose,
            self.scale,
            self.stability,
        ]
    }

    /// Clamps each dimension independently into `[0, 100]`.
    ///
    /// Non-finite values clamp to the nearest bound (NaN to the lower one).
    pub fn clamp(&self) -> TraitVector {
        let clamp_one = |v: f64| {
            if v.is_nan() {
                TRAIT_MIN
            } else {
                v.clamp(TRAIT_MIN, TRAIT_MAX)
            }
        };
        TraitVector {
            storage: clamp_one(self.storage),
            release: clamp_one(self.release),
            input: clamp_one(self.input),
            purpose: clamp_one(self.purpose),
            scale: clamp_one(self.scale),
            stability: clamp_one(self.stability),
        }
    }

    fn slot_mut(&mut self, dimension: TraitDimension) -> &mut f64 {
        match dimension {
            TraitDimension::Storage => &mut self.storage,
            TraitDimension::Release => &mut self.release,
            TraitDimension::Input => &mut self.input,
            TraitDimension::Purpose => &mut self.purpose,
            TraitDimension::Scale => &mut self.scale,
            TraitDimension::Stability => &mut self.stability,
        }
    }
}

impl Default for RawTraits {
    fn default() -> Self {
        TraitVector::NEUTRAL.into()
    }
}

impl From<TraitVector> for RawTraits {
    fn from(v: TraitVector) -> Self {
        Self {
            storage: v.storage,
            release: v.release,
            input: v.input,
            purpose: v.purpose,
            scale: v.scale,
            stability: v.stability,
        }
    }
}
