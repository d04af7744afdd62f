use super::GridState;

/// Count live cells in the Moore neighborhood of `(row, col)` with
/// toroidal wraparound: the 8 orthogonal and diagonal neighbors, where
/// offsets falling off an edge wrap to the opposite side.
///
/// Reads only the current generation, so a full-grid pass sees one
/// consistent snapshot. This is the only place in the crate that performs
/// wraparound arithmetic; the euclidean modulo keeps `-1` mapping to
/// `n - 1` rather than truncating toward zero.
pub fn count_live_neighbors(grid: &GridState, row: usize, col: usize) -> u8 {
    let h = grid.rows() as i64;
    let w = grid.cols() as i64;
    let (r, c) = (row as i64, col as i64);

    (-1..=1)
        .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
        .filter(|&(dr, dc)| dr != 0 || dc != 0)
        .filter(|&(dr, dc)| {
            let nr = ((r + dr) % h + h) % h;
            let nc = ((c + dc) % w + w) % w;
            grid.get(nr as usize, nc as usize).is_alive()
        })
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    #[test]
    fn empty_grid_has_no_live_neighbors() {
        let grid = GridState::new(5, 5);
        assert_eq!(count_live_neighbors(&grid, 2, 2), 0);
    }

    #[test]
    fn counts_all_eight_interior_neighbors() {
        let mut grid = GridState::new(5, 5);
        for row in 1..=3 {
            for col in 1..=3 {
                grid.set(row, col, Cell::Alive);
            }
        }
        // center excluded from its own count
        assert_eq!(count_live_neighbors(&grid, 2, 2), 8);
    }

    #[test]
    fn corner_cell_wraps_to_opposite_corner() {
        let mut grid = GridState::new(5, 7);
        grid.set(0, 0, Cell::Alive);

        // (0,0) is diagonally/orthogonally adjacent to the far corner and
        // the two wrapped edge cells on a torus.
        assert_eq!(count_live_neighbors(&grid, 4, 6), 1);
        assert_eq!(count_live_neighbors(&grid, 4, 0), 1);
        assert_eq!(count_live_neighbors(&grid, 0, 6), 1);
        // and the other direction
        let mut grid = GridState::new(5, 7);
        grid.set(4, 6, Cell::Alive);
        assert_eq!(count_live_neighbors(&grid, 0, 0), 1);
    }

    #[test]
    fn wrap_does_not_reach_non_adjacent_cells() {
        let mut grid = GridState::new(5, 7);
        grid.set(0, 0, Cell::Alive);
        assert_eq!(count_live_neighbors(&grid, 2, 2), 0);
        assert_eq!(count_live_neighbors(&grid, 3, 6), 0);
    }

    #[test]
    fn single_row_torus_counts_wrapped_rows_twice() {
        // On a 1xN grid the row above and below are the row itself.
        let mut grid = GridState::new(1, 4);
        grid.set(0, 1, Cell::Alive);
        // neighbors of (0,0): columns 3,0,1 each seen at dr = -1, 0, +1,
        // minus the center (0,0) itself.
        assert_eq!(count_live_neighbors(&grid, 0, 0), 3);
    }
}
