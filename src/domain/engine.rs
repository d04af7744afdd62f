use super::{GridState, count_live_neighbors};

/// Advance the grid by one generation.
///
/// Every cell's next state is computed from the pre-step snapshot: neighbor
/// counts read `current` only, results go to the scratch buffer, and nothing
/// written this pass is visible until the final commit. The step is a pure
/// function of the prior generation regardless of cell-processing order.
///
/// Total over any valid grid; there is no error path.
pub fn advance_generation(grid: &mut GridState) {
    let (rows, cols) = grid.dimensions();
    for row in 0..rows {
        for col in 0..cols {
            let neighbors = count_live_neighbors(grid, row, col);
            let evolved = grid.get(row, col).evolve(neighbors);
            grid.set_next(row, col, evolved);
        }
    }
    grid.commit_next();
}
