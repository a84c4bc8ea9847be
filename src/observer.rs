//! Step observer trait for monitoring simulation progress.

/// Trait for observing simulation phases.
///
/// Implement this to monitor solver progress (debugging, visualization,
/// profiling). All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after a body's points have been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each relaxation pass over the constraint graph.
    fn on_relax_pass(&mut self, _pass: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation
/// is needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
