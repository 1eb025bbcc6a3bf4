//! Cosine similarity between trait vectors.

use crate::domain::traits::TraitVector;

/// Cosine similarity of two trait vectors treated as points in R^6.
///
/// Returns 0 when either vector has zero magnitude, never NaN.
pub fn cosine_similarity(a: &TraitVector, b: &TraitVector) -> f64 {
    cosine(&a.as_array(), &b.as_array())
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let mag_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    dot / (mag_a * mag_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn v(values: [f64; 6]) -> TraitVector {
        TraitVector::from_array(values).unwrap()
    }

    #[test]
    fn identical_vectors_have_similarity_one() {
        let a = v([70.0, 50.0, 50.0, 30.0, 70.0, 70.0]);
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn parallel_vectors_have_similarity_one() {
        let a = v([10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
        let b = v([5.0, 10.0, 15.0, 20.0, 25.0, 30.0]);
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn orthogonal_vectors_have_similarity_zero() {
        let a = v([100.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let b = v([0.0, 100.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn zero_vector_yields_zero_not_nan() {
        let zero = v([0.0; 6]);
        let other = TraitVector::default();
        assert_eq!(cosine_similarity(&zero, &other), 0.0);
        assert_eq!(cosine_similarity(&other, &zero), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn similarity_is_symmetric() {
        let a = v([90.0, 10.0, 40.0, 60.0, 20.0, 80.0]);
        let b = v([30.0, 70.0, 50.0, 50.0, 90.0, 10.0]);
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    fn trait_vector() -> impl Strategy<Value = TraitVector> {
        proptest::array::uniform6(0.0f64..=100.0).prop_map(v)
    }

    fn non_zero_trait_vector() -> impl Strategy<Value = TraitVector> {
        trait_vector().prop_filter("needs non-zero magnitude", |t| {
            t.as_array().iter().any(|x| *x >= 0.001)
        })
    }

    proptest! {
        #[test]
        fn any_non_zero_vector_is_fully_similar_to_itself(a in non_zero_trait_vector()) {
            prop_assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-9);
        }

        #[test]
        fn similarity_is_symmetric_for_any_pair(a in trait_vector(), b in trait_vector()) {
            prop_assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
        }

        #[test]
        fn similarity_of_valid_vectors_is_never_negative(a in trait_vector(), b in trait_vector()) {
            let s = cosine_similarity(&a, &b);
            prop_assert!((0.0..=1.0 + 1e-9).contains(&s));
        }
    }
}
