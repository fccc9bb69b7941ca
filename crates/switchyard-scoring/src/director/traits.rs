// Score director trait definition.

use switchyard_core::domain::{PlanningSolution, SolutionDescriptor};

// The score director manages solution state and score calculation.
//
// It is responsible for:
// - Owning the working solution for the duration of a solve
// - Calculating scores (incrementally when possible)
// - Receiving notifications around every variable change
// - Providing access to solution metadata via descriptors
pub trait ScoreDirector<S: PlanningSolution>: Send {
    // Returns a reference to the working solution.
    fn working_solution(&self) -> &S;

    // Returns a mutable reference to the working solution.
    //
    // A variable mutation performed through this reference must be
    // bracketed by `before_variable_changed` / `after_variable_changed`;
    // mutating outside a bracket is a protocol violation that can silently
    // corrupt the score cache. Implementations assert the bracket invariant
    // in debug builds.
    fn working_solution_mut(&mut self) -> &mut S;

    // Calculates and returns the current score, reflecting all writes
    // since the last call.
    fn calculate_score(&mut self) -> S::Score;

    // Returns the solution descriptor for this solution type.
    fn solution_descriptor(&self) -> &SolutionDescriptor<S>;

    // Clones the working solution.
    fn clone_working_solution(&self) -> S;

    // Called before a planning variable is changed.
    //
    // Between this call and the matching `after_variable_changed` the
    // variable's old value is still readable for delta bookkeeping.
    fn before_variable_changed(
        &mut self,
        descriptor_index: usize,
        entity_index: usize,
        variable_name: &str,
    );

    // Called after a planning variable is changed.
    fn after_variable_changed(
        &mut self,
        descriptor_index: usize,
        entity_index: usize,
        variable_name: &str,
    );

    // Returns the number of entities for a given descriptor index.
    fn entity_count(&self, descriptor_index: usize) -> Option<usize>;

    // Returns true if this score director scores incrementally.
    fn is_incremental(&self) -> bool {
        false
    }

    // Resets the score director state, discarding cached scores.
    fn reset(&mut self) {}
}
