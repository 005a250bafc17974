//! The classical Gram-Schmidt process over 2 or 3 input vectors.
//!
//! Every call recomputes the full result from the input list: the orthogonal
//! basis `u`, the orthonormal basis `e`, and the trace of each projection
//! that was subtracted along the way. Linearly dependent input is not an
//! error; it yields zero vectors in both bases.

use log::debug;
use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};
use crate::num_vec::{self, Vector3};




/**
 * One projection computed while orthogonalizing vector `target` against the
 * previously derived orthogonal vector `on`.
 */
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRecord {
    pub target: usize,
    pub on: usize,
    pub vector: Vector3,
}




/**
 * The full output of the Gram-Schmidt process for one input list. The
 * projections are stored in the order they were computed: all projections
 * of a given target come before those of the next target, and within a
 * target they are ordered by the index of the basis vector projected onto.
 */
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub orthogonal: Vec<Vector3>,
    pub orthonormal: Vec<Vector3>,
    pub projections: Vec<ProjectionRecord>,
}




// ============================================================================
impl CalculationResult {

    pub fn len(&self) -> usize {
        self.orthogonal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orthogonal.is_empty()
    }

    /// Iterate over the projections subtracted from the input vector with
    /// the given index, in the order they were computed.
    pub fn projections_onto(&self, target: usize) -> impl Iterator<Item = &ProjectionRecord> + '_ {
        self.projections.iter().filter(move |p| p.target == target)
    }

    /// Return true if every pair of orthogonal vectors has a dot product
    /// within `tolerance` of zero.
    pub fn is_orthogonal(&self, tolerance: f64) -> bool {
        for i in 0..self.orthogonal.len() {
            for j in 0..i {
                if self.orthogonal[i].dot(&self.orthogonal[j]).abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }

    /// Return true if the orthonormal vectors are pairwise orthogonal, and
    /// each is either of unit length or the zero sentinel matching a zero
    /// orthogonal vector.
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        let unit = self.orthogonal.iter().zip(&self.orthonormal).all(|(u, e)| {
            if u.is_zero() {
                e.is_zero()
            } else {
                (e.magnitude() - 1.0).abs() <= tolerance
            }
        });
        let pairwise = (0..self.orthonormal.len())
            .all(|i| (0..i).all(|j| self.orthonormal[i].dot(&self.orthonormal[j]).abs() <= tolerance));
        unit && pairwise
    }
}




// ============================================================================
/// Check that `vectors` is a valid input to [`compute`]: there must be 2 or
/// 3 of them, and a pair of vectors must lie in the xy-plane.
pub fn validate(vectors: &[Vector3]) -> Result<()> {
    match vectors.len() {
        2 => {
            if let Some(index) = vectors.iter().position(|v| v.z() != 0.0) {
                return Err(Error::InconsistentDimension { index });
            }
            Ok(())
        }
        3 => Ok(()),
        n => Err(Error::VectorCount(n)),
    }
}

/// Run the Gram-Schmidt process, returning an error instead of panicking if
/// the input list is not valid.
pub fn try_compute(vectors: &[Vector3]) -> Result<CalculationResult> {
    validate(vectors)?;
    Ok(gram_schmidt(vectors))
}

/// Run the Gram-Schmidt process on 2 or 3 vectors.
///
/// # Panics
///
/// Panics if the input list fails [`validate`]. Callers are expected to only
/// ever pass a well-formed list; use [`try_compute`] to check instead.
pub fn compute(vectors: &[Vector3]) -> CalculationResult {
    if let Err(e) = validate(vectors) {
        panic!("orthogonalize::compute called with invalid input: {}", e)
    }
    gram_schmidt(vectors)
}

fn gram_schmidt(vectors: &[Vector3]) -> CalculationResult {
    let mut orthogonal: Vec<Vector3> = Vec::with_capacity(vectors.len());
    let mut projections = Vec::new();

    for (target, v) in vectors.iter().enumerate() {
        // Every projection uses the original input vector v (classical
        // Gram-Schmidt), not the partially reduced one.
        //
        let mut u = *v;

        for (on, basis) in orthogonal.iter().enumerate() {
            let p = num_vec::project(v, basis);
            projections.push(ProjectionRecord { target, on, vector: p });
            u = u - p;
        }

        if u.is_zero() {
            debug!("u{} is the zero vector; v{} depends on the preceding inputs", target + 1, target + 1);
        }
        orthogonal.push(u);
    }

    let orthonormal = orthogonal.iter().map(num_vec::normalize).collect();

    CalculationResult {
        orthogonal,
        orthonormal,
        projections,
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::*;
    use crate::num_vec::Vector3;

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(a: Vector3, b: Vector3, tolerance: f64) {
        assert!((a - b).magnitude() <= tolerance, "{:?} != {:?}", a, b);
    }

    #[test]
    fn planar_scenario_matches_hand_computation() {
        let result = compute(&[Vector3::planar(3.0, 1.0), Vector3::planar(2.0, 4.0)]);

        assert_eq!(result.orthogonal[0], Vector3::planar(3.0, 1.0));
        assert_eq!(result.projections[0].vector, Vector3::planar(3.0, 1.0));
        assert_eq!(result.orthogonal[1], Vector3::planar(-1.0, 3.0));
        assert_close(result.orthonormal[0], Vector3::planar(0.9487, 0.3162), 1e-4);
        assert_close(result.orthonormal[1], Vector3::planar(-0.3162, 0.9487), 1e-4);
        assert_eq!(result.orthogonal[0].dot(&result.orthogonal[1]), 0.0);
    }

    #[test]
    fn spatial_scenario_yields_standard_basis() {
        let result = compute(&[
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(2.0, 2.0, 0.0),
            Vector3::new(2.0, 2.0, 2.0),
        ]);

        assert_eq!(result.orthogonal, vec![
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(0.0, 2.0, 0.0),
            Vector3::new(0.0, 0.0, 2.0),
        ]);
        assert_eq!(result.orthonormal, vec![
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        ]);
    }

    #[test]
    fn projections_are_recorded_in_computation_order() {
        let result = compute(&[
            Vector3::new(1.0, 2.0, 0.5),
            Vector3::new(-1.0, 0.0, 3.0),
            Vector3::new(4.0, 1.0, 1.0),
        ]);
        let order: Vec<_> = result.projections.iter().map(|p| (p.target, p.on)).collect();
        assert_eq!(order, vec![(1, 0), (2, 0), (2, 1)]);
        assert_eq!(result.projections_onto(2).count(), 2);
        assert_eq!(result.projections_onto(0).count(), 0);
    }

    #[test]
    fn collinear_input_yields_zero_sentinel() {
        let result = compute(&[Vector3::planar(1.0, 0.0), Vector3::planar(2.0, 0.0)]);
        assert!(result.orthogonal[1].is_zero());
        assert!(result.orthonormal[1].is_zero());
        assert!(result.is_orthonormal(TOLERANCE));
    }

    #[test]
    fn dependent_third_vector_yields_zero_sentinel() {
        let result = compute(&[
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(3.0, -2.0, 0.0),
        ]);
        assert!(result.orthogonal[2].is_zero());
        assert!(result.orthonormal[2].is_zero());
    }

    #[test]
    fn zero_first_vector_contributes_no_projection() {
        let result = compute(&[Vector3::zeros(), Vector3::planar(2.0, 4.0)]);
        assert!(result.projections[0].vector.is_zero());
        assert_eq!(result.orthogonal[1], Vector3::planar(2.0, 4.0));
    }

    #[test]
    fn result_is_orthonormal_for_general_input() {
        let inputs = [
            vec![Vector3::planar(0.3, -7.0), Vector3::planar(5.5, 2.25)],
            vec![
                Vector3::new(1.0, 1.0, 0.0),
                Vector3::new(1.0, 0.0, 1.0),
                Vector3::new(0.0, 1.0, 1.0),
            ],
            vec![
                Vector3::new(-3.0, 0.5, 2.0),
                Vector3::new(1.0, 4.0, -1.0),
                Vector3::new(2.0, 2.0, 9.0),
            ],
        ];
        for vectors in &inputs {
            let result = compute(vectors);
            assert_eq!(result.len(), vectors.len());
            assert!(result.is_orthogonal(TOLERANCE));
            assert!(result.is_orthonormal(TOLERANCE));
        }
    }

    #[test]
    fn compute_is_deterministic() {
        let vectors = [Vector3::new(1.5, -2.0, 0.1), Vector3::new(0.0, 3.0, 4.0), Vector3::new(7.0, 1.0, 1.0)];
        assert_eq!(compute(&vectors), compute(&vectors));
    }

    #[test]
    fn tiny_input_still_normalizes() {
        let result = compute(&[Vector3::new(1e-170, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0)]);
        assert_eq!(result.orthonormal[0], Vector3::new(1.0, 0.0, 0.0));
        assert!(result.is_orthonormal(TOLERANCE));

        let result = compute(&[Vector3::new(1e-170, 0.0, 0.0), Vector3::new(1.0, 1.0, 0.0)]);
        assert_close(result.orthogonal[1], Vector3::new(0.0, 1.0, 0.0), TOLERANCE);
        assert!(result.is_orthogonal(TOLERANCE));
    }

    #[test]
    fn try_compute_rejects_bad_vector_counts() {
        assert!(matches!(try_compute(&[]), Err(Error::VectorCount(0))));
        assert!(matches!(try_compute(&[Vector3::planar(1.0, 0.0)]), Err(Error::VectorCount(1))));
        assert!(matches!(try_compute(&[Vector3::zeros(); 4]), Err(Error::VectorCount(4))));
    }

    #[test]
    fn try_compute_rejects_out_of_plane_pair() {
        let vectors = [Vector3::planar(1.0, 0.0), Vector3::new(0.0, 1.0, 1.0)];
        assert!(matches!(try_compute(&vectors), Err(Error::InconsistentDimension { index: 1 })));
    }

    #[test]
    #[should_panic]
    fn compute_panics_on_single_vector() {
        compute(&[Vector3::planar(1.0, 1.0)]);
    }
}
