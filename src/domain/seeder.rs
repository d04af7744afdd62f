use super::{Cell, GridState};
use rand::Rng;

/// Reset the grid, then populate it with a random scattering of live cells.
///
/// A target count is drawn uniformly from `[0, rows * cols)`, followed by
/// that many independent uniform cell draws, each set alive. Draws may
/// collide, so the resulting live count is generally below the target; the
/// distribution is deliberately kept bit-for-bit compatible with the
/// original seeding behavior rather than sampling without replacement.
///
/// Gating against a running animation is the caller's concern (see
/// `Simulation::randomize`).
pub fn seed_random<R: Rng + ?Sized>(grid: &mut GridState, rng: &mut R) {
    grid.reset_all();
    let (rows, cols) = grid.dimensions();
    let size = rows * cols;
    let target = rng.random_range(0..size);
    for _ in 0..target {
        let idx = rng.random_range(0..size);
        grid.set(idx / cols, idx % cols, Cell::Alive);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn same_seed_yields_same_grid() {
        let mut a = GridState::new(10, 12);
        let mut b = GridState::new(10, 12);
        seed_random(&mut a, &mut StdRng::seed_from_u64(7));
        seed_random(&mut b, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn live_count_stays_below_grid_size() {
        for seed in 0..20 {
            let mut grid = GridState::new(10, 12);
            seed_random(&mut grid, &mut StdRng::seed_from_u64(seed));
            assert!(grid.live_count() < 120);
        }
    }

    #[test]
    fn seeding_discards_previous_state() {
        let mut stale = GridState::new(8, 8);
        for row in 0..8 {
            for col in 0..8 {
                stale.set(row, col, Cell::Alive);
            }
        }
        let mut fresh = GridState::new(8, 8);

        seed_random(&mut stale, &mut StdRng::seed_from_u64(3));
        seed_random(&mut fresh, &mut StdRng::seed_from_u64(3));
        assert_eq!(stale, fresh);
    }

    #[test]
    fn single_cell_grid_seeds_empty() {
        // target count is drawn from [0, 1), so no draws happen
        let mut grid = GridState::new(1, 1);
        seed_random(&mut grid, &mut StdRng::seed_from_u64(0));
        assert_eq!(grid.live_count(), 0);
    }
}
