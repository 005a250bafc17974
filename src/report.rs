//! Plain-text rendering of the part of a Gram-Schmidt calculation that has
//! been revealed so far. Format with a precision (`{:.2}`) to control the
//! number of decimals; the default is 1.

use std::fmt;
use crate::num_vec::Vector3;
use crate::session::Session;
use crate::step::{Dimension, StepState};
use crate::orthogonalize::CalculationResult;

const DEFAULT_PRECISION: usize = 1;




/**
 * A vector shown with only the coordinates that are active in the given
 * dimension.
 */
pub struct Components<'a>(pub &'a Vector3, pub Dimension);

impl<'a> fmt::Display for Components<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Components(v, dimension) = *self;
        let p = f.precision().unwrap_or(DEFAULT_PRECISION);
        let coords: Vec<_> = (0..dimension.num_vectors())
            .map(|axis| format!("{:.*}", p, v[axis]))
            .collect();
        write!(f, "[{}]", coords.join(", "))
    }
}




/**
 * The math panel for one walkthrough state.
 */
pub struct Report<'a> {
    vectors: &'a [Vector3],
    result: &'a CalculationResult,
    steps: StepState,
}




// ============================================================================
impl<'a> Report<'a> {

    pub fn new(vectors: &'a [Vector3], result: &'a CalculationResult, steps: StepState) -> Self {
        Self { vectors, result, steps }
    }

    pub fn of(session: &'a Session) -> Self {
        Self::new(session.vectors(), session.result(), session.steps())
    }
}

impl<'a> fmt::Display for Report<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(DEFAULT_PRECISION);
        let dimension = self.steps.dimension();
        let disclosure = self.steps.disclosure();
        let revealed = disclosure.reveal(self.result);
        let show = |v: &Vector3| format!("{:.*}", p, Components(v, dimension));

        writeln!(f, "{} ({} mode): {}", self.steps, dimension, disclosure.stage.description())?;
        writeln!(f)?;
        writeln!(f, "Input")?;

        for (i, v) in self.vectors.iter().enumerate() {
            writeln!(f, "  v{} = {}", i + 1, show(v))?;
        }

        for (i, u) in revealed.orthogonal.iter().enumerate() {
            let n = i + 1;
            writeln!(f)?;
            writeln!(f, "Step {}: orthogonal vector u{}", n, n)?;

            let projections: Vec<_> = revealed.projections.iter().filter(|r| r.target == i).collect();

            for r in &projections {
                writeln!(
                    f,
                    "  proj_u{on}(v{t}) = (v{t}.u{on} / u{on}.u{on}) u{on} = {}",
                    show(&r.vector),
                    on = r.on + 1,
                    t = n,
                )?;
            }

            let subtracted: String = projections
                .iter()
                .map(|r| format!(" - proj_u{}(v{})", r.on + 1, n))
                .collect();
            writeln!(f, "  u{} = v{}{}", n, n, subtracted)?;
            writeln!(f, "  u{} = {}", n, show(u))?;
        }

        // Projections of the next target revealed ahead of its orthogonal
        // vector.
        let pending: Vec<_> = revealed
            .projections
            .iter()
            .filter(|r| r.target >= revealed.orthogonal.len())
            .collect();

        if let Some(first) = pending.first() {
            let n = first.target + 1;
            writeln!(f)?;
            writeln!(f, "Step {}: orthogonal vector u{}", n, n)?;

            for r in &pending {
                writeln!(
                    f,
                    "  proj_u{on}(v{t}) = (v{t}.u{on} / u{on}.u{on}) u{on} = {}",
                    show(&r.vector),
                    on = r.on + 1,
                    t = n,
                )?;
            }
        }

        if !revealed.orthonormal.is_empty() {
            writeln!(f)?;
            writeln!(f, "Final step: normalization")?;
            writeln!(f, "  e_i = u_i / |u_i|")?;

            for (i, e) in revealed.orthonormal.iter().enumerate() {
                if e.is_zero() {
                    writeln!(f, "  e{} = {} (undefined direction)", i + 1, show(e))?;
                } else {
                    writeln!(f, "  e{} = {}", i + 1, show(e))?;
                }
            }
        }
        Ok(())
    }
}
