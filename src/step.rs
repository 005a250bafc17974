//! The step disclosure model: a saturating counter over `[0, max_step]` that
//! decides how much of a [`CalculationResult`] has been revealed.

use std::convert::TryFrom;
use std::fmt;
use serde::{Deserialize, Serialize};
use crate::error::Error;
use crate::num_vec::Vector3;
use crate::orthogonalize::{CalculationResult, ProjectionRecord};




/**
 * The number of input vectors, which is also the dimension of the space they
 * are drawn in.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Two,
    Three,
}




// ============================================================================
impl Dimension {

    pub fn num_vectors(self) -> usize {
        match self {
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }

    /// The index of the final step, where the orthonormal basis is revealed.
    pub fn max_step(self) -> u8 {
        match self {
            Dimension::Two => 4,
            Dimension::Three => 6,
        }
    }

    /// The number of projections the Gram-Schmidt process computes.
    pub fn num_projections(self) -> usize {
        let n = self.num_vectors();
        n * (n - 1) / 2
    }

    /// Whether coordinate `axis` (0, 1, or 2) is shown and editable.
    pub fn is_active_axis(self, axis: usize) -> bool {
        axis < self.num_vectors()
    }

    /// Pick the dimension for a list of `num_inputs` user-supplied vectors,
    /// with an optional explicitly requested dimension. With no vectors the
    /// request (default 2) decides; otherwise the vector count decides and a
    /// request that disagrees with it is an error.
    pub fn resolve(requested: Option<u8>, num_inputs: usize) -> Result<Self, Error> {
        let requested = requested.map(Dimension::try_from).transpose()?;

        if num_inputs == 0 {
            return Ok(requested.unwrap_or(Dimension::Two));
        }
        let counted = match num_inputs {
            2 => Dimension::Two,
            3 => Dimension::Three,
            n => return Err(Error::VectorCount(n)),
        };
        match requested {
            Some(d) if d != counted => Err(Error::VectorCount(num_inputs)),
            _ => Ok(counted),
        }
    }

    /// The scenario loaded when this dimension is selected.
    pub fn default_vectors(self) -> Vec<Vector3> {
        match self {
            Dimension::Two => vec![
                Vector3::planar(3.0, 1.0),
                Vector3::planar(2.0, 4.0),
            ],
            Dimension::Three => vec![
                Vector3::new(2.0, 0.0, 0.0),
                Vector3::new(2.0, 2.0, 0.0),
                Vector3::new(2.0, 2.0, 2.0),
            ],
        }
    }
}

impl TryFrom<u8> for Dimension {
    type Error = Error;

    fn try_from(d: u8) -> Result<Self, Self::Error> {
        match d {
            2 => Ok(Dimension::Two),
            3 => Ok(Dimension::Three),
            d => Err(Error::UnsupportedDimension(d)),
        }
    }
}

impl From<Dimension> for u8 {
    fn from(d: Dimension) -> u8 {
        d.num_vectors() as u8
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.num_vectors())
    }
}




/**
 * The position of a walkthrough. Transitions consume the state and return a
 * new one; `step` never leaves `[0, max_step]`. Decoded states are clamped
 * into range.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawStepState")]
pub struct StepState {
    step: u8,
    dimension: Dimension,
}

#[derive(Serialize, Deserialize)]
struct RawStepState {
    step: u8,
    dimension: Dimension,
}

impl From<RawStepState> for StepState {
    fn from(raw: RawStepState) -> Self {
        StepState::at(raw.dimension, raw.step)
    }
}




// ============================================================================
impl StepState {

    pub fn new(dimension: Dimension) -> Self {
        Self { step: 0, dimension }
    }

    /// Create a state at the given step, clamped to the valid range.
    pub fn at(dimension: Dimension, step: u8) -> Self {
        Self { step: step.min(dimension.max_step()), dimension }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn max_step(&self) -> u8 {
        self.dimension.max_step()
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn is_final(&self) -> bool {
        self.step == self.max_step()
    }

    pub fn next(self) -> Self {
        Self { step: self.step.saturating_add(1).min(self.max_step()), ..self }
    }

    pub fn prev(self) -> Self {
        Self { step: self.step.saturating_sub(1), ..self }
    }

    pub fn reset(self) -> Self {
        Self { step: 0, ..self }
    }

    /// Switch to another dimension. The walkthrough restarts, and the caller
    /// receives the input vectors it must now use.
    pub fn set_dimension(self, dimension: Dimension) -> (Self, Vec<Vector3>) {
        (Self::new(dimension), dimension.default_vectors())
    }

    pub fn stage(&self) -> Stage {
        Stage::at(self.step, self.dimension)
    }

    pub fn disclosure(&self) -> Disclosure {
        Disclosure::new(self.step, self.dimension)
    }
}

impl fmt::Display for StepState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}/{}", self.step, self.max_step())
    }
}




/**
 * The most recent thing revealed at a given step. Disclosure is cumulative:
 * each stage also shows everything revealed by the stages before it.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    Inputs,
    FirstOrthogonal,
    FirstProjection,
    SecondOrthogonal,
    ThirdProjections,
    ThirdOrthogonal,
    Normalized,
}




// ============================================================================
impl Stage {

    /// Map a step to its stage. Steps past the final one map to
    /// `Normalized`.
    pub fn at(step: u8, dimension: Dimension) -> Self {
        use Stage::*;

        if step >= dimension.max_step() {
            return Normalized;
        }
        match step {
            0 => Inputs,
            1 => FirstOrthogonal,
            2 => FirstProjection,
            3 => SecondOrthogonal,
            4 => ThirdProjections,
            _ => ThirdOrthogonal,
        }
    }

    pub fn description(self) -> &'static str {
        use Stage::*;

        match self {
            Inputs => "input vectors",
            FirstOrthogonal => "first orthogonal vector",
            FirstProjection => "projection of v2 onto u1",
            SecondOrthogonal => "second orthogonal vector",
            ThirdProjections => "projections of v3 onto u1 and u2",
            ThirdOrthogonal => "third orthogonal vector",
            Normalized => "orthonormal basis",
        }
    }
}




/**
 * How much of a calculation result is revealed: the number of leading
 * orthogonal vectors and projection records, and whether the orthonormal
 * basis is shown.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Disclosure {
    pub stage: Stage,
    pub orthogonal: usize,
    pub projections: usize,
    pub orthonormal: bool,
}




/**
 * The parts of a calculation result revealed by a [`Disclosure`].
 */
#[derive(Clone, Copy, Debug)]
pub struct Revealed<'a> {
    pub orthogonal: &'a [Vector3],
    pub projections: &'a [ProjectionRecord],
    pub orthonormal: &'a [Vector3],
}




// ============================================================================
impl Disclosure {

    pub fn new(step: u8, dimension: Dimension) -> Self {
        use Stage::*;

        let stage = Stage::at(step, dimension);
        let (orthogonal, projections, orthonormal) = match stage {
            Inputs => (0, 0, false),
            FirstOrthogonal => (1, 0, false),
            FirstProjection => (1, 1, false),
            SecondOrthogonal => (2, 1, false),
            ThirdProjections => (2, 3, false),
            ThirdOrthogonal => (3, 3, false),
            Normalized => (dimension.num_vectors(), dimension.num_projections(), true),
        };
        Self { stage, orthogonal, projections, orthonormal }
    }

    /// Select the revealed parts of `result`. Counts are capped at the
    /// length of the result, so a result computed for a smaller input list
    /// is never over-indexed.
    pub fn reveal<'a>(&self, result: &'a CalculationResult) -> Revealed<'a> {
        let orthonormal = if self.orthonormal {
            &result.orthonormal[..]
        } else {
            &result.orthonormal[..0]
        };
        Revealed {
            orthogonal: &result.orthogonal[..self.orthogonal.min(result.orthogonal.len())],
            projections: &result.projections[..self.projections.min(result.projections.len())],
            orthonormal,
        }
    }
}
