mod controller;
mod scheduler;
mod simulation;

pub use controller::{AnimationController, RunState};
pub use scheduler::{DEFAULT_STEP_DELAY, StepHandle, StepScheduler};
pub use simulation::{EditMode, Simulation};
