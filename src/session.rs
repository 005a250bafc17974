use log::{debug, info};
use crate::codec::Snapshot;
use crate::error::{Error, Result};
use crate::input::CoordinateEntry;
use crate::num_vec::Vector3;
use crate::orthogonalize::{self, CalculationResult};
use crate::step::{Dimension, Disclosure, StepState};




/**
 * The state of one interactive walkthrough: the selected dimension, the input
 * vectors with the raw text the user typed for each coordinate, the position
 * in the walkthrough, and the calculation result for the current inputs.
 *
 * The step position and the calculation result are independent. Editing a
 * coordinate recomputes the result but leaves the step where it is; step
 * navigation never touches the result.
 */
#[derive(Clone, Debug)]
pub struct Session {
    dimension: Dimension,
    vectors: Vec<Vector3>,
    entries: Vec<[CoordinateEntry; 3]>,
    steps: StepState,
    result: CalculationResult,
}




// ============================================================================
impl Session {

    pub fn new(dimension: Dimension) -> Self {
        let vectors = dimension.default_vectors();
        let result = orthogonalize::compute(&vectors);
        Self {
            dimension,
            entries: Self::entries_for(&vectors),
            vectors,
            steps: StepState::new(dimension),
            result,
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn vectors(&self) -> &[Vector3] {
        &self.vectors
    }

    pub fn steps(&self) -> StepState {
        self.steps
    }

    pub fn result(&self) -> &CalculationResult {
        &self.result
    }

    pub fn disclosure(&self) -> Disclosure {
        self.steps.disclosure()
    }

    /// The text last typed for a coordinate, which may not have parsed.
    pub fn raw_text(&self, index: usize, axis: usize) -> Option<&str> {
        self.entries.get(index).and_then(|e| e.get(axis)).map(|e| e.text())
    }

    /// Apply text typed into one coordinate field. The raw text is always
    /// kept. If it parses, vector `index` is replaced and the result is
    /// recomputed; returns whether that happened.
    pub fn edit(&mut self, index: usize, axis: usize, text: &str) -> Result<bool> {
        if index >= self.vectors.len() || !self.dimension.is_active_axis(axis) {
            return Err(Error::CoordinateOutOfRange { index, axis });
        }
        if !self.entries[index][axis].update(text) {
            debug!("v{}[{}]: {:?} did not parse, keeping {}", index + 1, axis, text, self.vectors[index][axis]);
            return Ok(false);
        }

        let mut vectors = self.vectors.clone();
        vectors[index] = vectors[index].with_component(axis, self.entries[index][axis].value());
        self.replace_vectors(vectors);
        Ok(true)
    }

    /// Replace all input vectors at once. The count must match the current
    /// dimension, and in 2D every vector must lie in the xy-plane.
    pub fn set_vectors(&mut self, vectors: Vec<Vector3>) -> Result<()> {
        if vectors.len() != self.dimension.num_vectors() {
            return Err(Error::VectorCount(vectors.len()));
        }
        orthogonalize::validate(&vectors)?;
        self.entries = Self::entries_for(&vectors);
        self.replace_vectors(vectors);
        Ok(())
    }

    pub fn next(&mut self) -> StepState {
        self.steps = self.steps.next();
        self.steps
    }

    pub fn prev(&mut self) -> StepState {
        self.steps = self.steps.prev();
        self.steps
    }

    /// Return to step 0, keeping the current input vectors.
    pub fn reset(&mut self) -> StepState {
        self.steps = self.steps.reset();
        self.steps
    }

    /// Switch dimension: load that dimension's default vectors and restart
    /// the walkthrough.
    pub fn set_dimension(&mut self, dimension: Dimension) -> StepState {
        let (steps, vectors) = self.steps.set_dimension(dimension);
        info!("switching to {} mode", dimension);
        self.dimension = dimension;
        self.steps = steps;
        self.entries = Self::entries_for(&vectors);
        self.replace_vectors(vectors);
        self.steps
    }

    /// Reload the default vectors for the current dimension and restart the
    /// walkthrough.
    pub fn restore_defaults(&mut self) -> StepState {
        self.set_dimension(self.dimension)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            dimension: self.dimension,
            step: self.steps.step(),
            vectors: self.vectors.clone(),
            result: self.result.clone(),
        }
    }

    fn replace_vectors(&mut self, vectors: Vec<Vector3>) {
        if vectors == self.vectors {
            return;
        }
        self.result = orthogonalize::compute(&vectors);
        self.vectors = vectors;
        debug!("recomputed basis for {:?}", self.vectors);
    }

    fn entries_for(vectors: &[Vector3]) -> Vec<[CoordinateEntry; 3]> {
        vectors
            .iter()
            .map(|v| [
                CoordinateEntry::new(v.x()),
                CoordinateEntry::new(v.y()),
                CoordinateEntry::new(v.z()),
            ])
            .collect()
    }
}




// ============================================================================
impl Default for Session {
    fn default() -> Self {
        Self::new(Dimension::Two)
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn new_session_starts_on_default_scenario() {
        let session = Session::default();
        assert_eq!(session.dimension(), Dimension::Two);
        assert_eq!(session.steps().step(), 0);
        assert_eq!(session.result().orthogonal[1], Vector3::planar(-1.0, 3.0));
        assert_eq!(session.raw_text(1, 1), Some("4"));
    }

    #[test]
    fn editing_recomputes_without_resetting_step() {
        let mut session = Session::new(Dimension::Two);
        session.next();
        session.next();

        assert!(session.edit(1, 0, "0").unwrap());
        assert_eq!(session.vectors()[1], Vector3::planar(0.0, 4.0));
        assert_eq!(session.steps().step(), 2);
        assert!(session.result().is_orthogonal(1e-9));
    }

    #[test]
    fn unparsable_edit_keeps_previous_value() {
        let mut session = Session::new(Dimension::Two);
        let before = session.result().clone();

        assert!(!session.edit(0, 1, "y=").unwrap());
        assert_eq!(session.raw_text(0, 1), Some("y="));
        assert_eq!(session.vectors()[0], Vector3::planar(3.0, 1.0));
        assert_eq!(session.result(), &before);
    }

    #[test]
    fn fraction_edit_is_applied() {
        let mut session = Session::new(Dimension::Three);
        assert!(session.edit(2, 2, "1/2").unwrap());
        assert_eq!(session.vectors()[2], Vector3::new(2.0, 2.0, 0.5));
        assert_eq!(session.result().orthogonal[2], Vector3::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn inactive_coordinates_cannot_be_edited() {
        let mut session = Session::new(Dimension::Two);
        assert!(session.edit(0, 2, "1").is_err());
        assert!(session.edit(2, 0, "1").is_err());
    }

    #[test]
    fn dimension_change_resets_step_and_vectors() {
        let mut session = Session::new(Dimension::Two);
        session.next();
        session.edit(0, 0, "5").unwrap();

        let steps = session.set_dimension(Dimension::Three);
        assert_eq!(steps.step(), 0);
        assert_eq!(steps.max_step(), 6);
        assert_eq!(session.vectors(), &Dimension::Three.default_vectors()[..]);
        assert_eq!(session.result().len(), 3);
        assert_eq!(session.raw_text(2, 2), Some("2"));
    }

    #[test]
    fn reset_keeps_edited_vectors() {
        let mut session = Session::new(Dimension::Two);
        session.edit(0, 0, "1").unwrap();
        session.next();

        assert_eq!(session.reset().step(), 0);
        assert_eq!(session.vectors()[0], Vector3::planar(1.0, 1.0));
    }

    #[test]
    fn restore_defaults_reloads_scenario() {
        let mut session = Session::new(Dimension::Three);
        session.edit(0, 0, "9").unwrap();
        session.next();

        assert_eq!(session.restore_defaults().step(), 0);
        assert_eq!(session.vectors(), &Dimension::Three.default_vectors()[..]);
        assert_eq!(session.raw_text(0, 0), Some("2"));
    }

    #[test]
    fn set_vectors_validates_count_and_plane() {
        let mut session = Session::new(Dimension::Two);
        assert!(session.set_vectors(vec![Vector3::planar(1.0, 0.0)]).is_err());
        assert!(session.set_vectors(vec![Vector3::planar(1.0, 0.0), Vector3::new(0.0, 1.0, 1.0)]).is_err());

        session.set_vectors(vec![Vector3::planar(1.0, 0.0), Vector3::planar(2.0, 0.0)]).unwrap();
        assert!(session.result().orthonormal[1].is_zero());
    }

    #[test]
    fn snapshot_captures_current_state() {
        let mut session = Session::new(Dimension::Three);
        session.next();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.dimension, Dimension::Three);
        assert_eq!(snapshot.step, 1);
        assert_eq!(&snapshot.result, session.result());
    }
}
