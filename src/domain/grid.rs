use super::Cell;

/// Double-buffered simulation grid.
///
/// `current` is the authoritative, externally visible state. `next` is
/// scratch space for the generation pass: fully overwritten every
/// generation, promoted wholesale by [`commit_next`](Self::commit_next),
/// and never partially read from outside.
///
/// Coordinates given to `get`/`set` must already be in range; wraparound
/// arithmetic belongs to the neighbor counter, not here.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GridState {
    rows: usize,
    cols: usize,
    current: Vec<Cell>,
    next: Vec<Cell>,
}

impl GridState {
    /// Create a grid of the given dimensions with every cell dead.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be positive");
        Self {
            rows,
            cols,
            current: vec![Cell::Dead; rows * cols],
            next: vec![Cell::Dead; rows * cols],
        }
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to a row-major index.
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Liveness of a cell in the current generation.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        debug_assert!(row < self.rows && col < self.cols);
        self.current[self.index(row, col)]
    }

    /// Write directly into the current generation (editing, seeding).
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(row < self.rows && col < self.cols);
        let idx = self.index(row, col);
        self.current[idx] = cell;
    }

    /// Write into the scratch buffer. Only the generation engine does this,
    /// and it must cover every coordinate before committing.
    pub(crate) fn set_next(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(row < self.rows && col < self.cols);
        let idx = self.index(row, col);
        self.next[idx] = cell;
    }

    /// Set every cell in both buffers dead.
    pub fn reset_all(&mut self) {
        self.current.fill(Cell::Dead);
        self.next.fill(Cell::Dead);
    }

    /// Promote the scratch buffer: `current` takes the contents of `next`,
    /// and `next` is cleared to all-dead for the following generation.
    pub fn commit_next(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.next.fill(Cell::Dead);
    }

    /// Iterate over all cells of the current generation with positions.
    /// This is the pull interface renderers read after each commit.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| (row, col, self.get(row, col)))
    }

    /// Number of live cells in the current generation.
    pub fn live_count(&self) -> usize {
        self.current.iter().filter(|cell| cell.is_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_dead() {
        let grid = GridState::new(4, 6);
        assert_eq!(grid.dimensions(), (4, 6));
        assert!(grid.iter_cells().all(|(_, _, cell)| !cell.is_alive()));
    }

    #[test]
    fn set_and_get_roundtrip() {
        let mut grid = GridState::new(3, 3);
        grid.set(1, 2, Cell::Alive);
        assert_eq!(grid.get(1, 2), Cell::Alive);
        assert_eq!(grid.get(2, 1), Cell::Dead);
        assert_eq!(grid.live_count(), 1);
    }

    #[test]
    fn commit_promotes_next_and_clears_scratch() {
        let mut grid = GridState::new(2, 2);
        grid.set(0, 0, Cell::Alive);
        grid.set_next(1, 1, Cell::Alive);
        grid.commit_next();

        // current equals the previously computed next
        assert_eq!(grid.get(0, 0), Cell::Dead);
        assert_eq!(grid.get(1, 1), Cell::Alive);
        // next is fully dead again
        assert!(grid.next.iter().all(|cell| !cell.is_alive()));
    }

    #[test]
    fn reset_all_clears_both_buffers() {
        let mut grid = GridState::new(2, 3);
        grid.set(0, 1, Cell::Alive);
        grid.set_next(1, 2, Cell::Alive);
        grid.reset_all();

        assert_eq!(grid.live_count(), 0);
        // a commit after reset must not resurrect anything
        grid.commit_next();
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    #[should_panic]
    fn zero_dimension_is_rejected() {
        GridState::new(0, 10);
    }
}
