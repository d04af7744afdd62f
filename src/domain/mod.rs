mod cell;
mod engine;
mod grid;
mod neighbors;
mod seeder;

pub use cell::Cell;
pub use engine::advance_generation;
pub use grid::GridState;
pub use neighbors::count_live_neighbors;
pub use seeder::seed_random;
