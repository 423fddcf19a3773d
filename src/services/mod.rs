//! Service layer: the convergence engine shared by all mutation commands.

mod convergence;

pub use convergence::ConvergenceMonitor;
