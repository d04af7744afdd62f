// Domain layer - simulation core
pub mod domain;

// Application layer - coordination and commands
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, GridState};
pub use application::{AnimationController, EditMode, RunState, Simulation};
pub use ui::Button;
