/// CellState is the fundamental unit of the automaton.
/// Each cell is either Dead or Alive, nothing else.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// Next state given the number of live neighbors.
    /// Three neighbors always give life, two keep whatever the cell already is,
    /// anything else is death.
    pub const fn evolve(self, live_neighbors: u8) -> Self {
        match live_neighbors {
            3 => CellState::Alive,
            2 => self,
            _ => CellState::Dead,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference B3/S23 table, written the usual way round.
    fn b3s23(state: CellState, n: u8) -> CellState {
        match (state, n) {
            (CellState::Alive, 2 | 3) => CellState::Alive,
            (CellState::Dead, 3) => CellState::Alive,
            _ => CellState::Dead,
        }
    }

    #[test]
    fn test_underpopulation() {
        assert_eq!(CellState::Alive.evolve(0), CellState::Dead);
        assert_eq!(CellState::Alive.evolve(1), CellState::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(CellState::Alive.evolve(2), CellState::Alive);
        assert_eq!(CellState::Alive.evolve(3), CellState::Alive);
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(CellState::Alive.evolve(4), CellState::Dead);
        assert_eq!(CellState::Alive.evolve(8), CellState::Dead);
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(CellState::Dead.evolve(3), CellState::Alive);
    }

    #[test]
    fn test_two_neighbors_keep_dead_cell_dead() {
        assert_eq!(CellState::Dead.evolve(2), CellState::Dead);
    }

    #[test]
    fn test_matches_b3s23_for_every_count() {
        for state in [CellState::Dead, CellState::Alive] {
            for n in 0..=8 {
                assert_eq!(state.evolve(n), b3s23(state, n), "{state:?} with {n}");
            }
        }
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(CellState::from(true), CellState::Alive);
        assert_eq!(CellState::from(false), CellState::Dead);
        assert_eq!(CellState::default(), CellState::Dead);
    }
}
