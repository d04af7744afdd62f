/// A single cell of the automaton, either dead or alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip liveness. This is the primitive behind toggle-mode editing.
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Conway's rule (B3/S23) as a pure function of the prior state and
    /// the live-neighbor count:
    /// - a live cell with 2 or 3 live neighbors survives
    /// - a dead cell with exactly 3 live neighbors is born
    /// - every other cell is dead in the next generation
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}
