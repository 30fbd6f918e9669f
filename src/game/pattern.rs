use rand::seq::SliceRandom;
use rand::Rng;

use crate::game::{GridCell, GRID};
use crate::{MAX_PATTERN_LEN, MIN_PATTERN_CAP};

/// Ordered, duplicate-free path through the grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pattern {
    cells: Vec<GridCell>,
}

impl Pattern {
    pub fn new() -> Self {
        Self { cells: Vec::with_capacity(MAX_PATTERN_LEN) }
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        self.cells.contains(&cell)
    }

    /// Appends `cell` unless it is already part of the path.
    pub fn push(&mut self, cell: GridCell) -> bool {
        if self.contains(cell) {
            return false;
        }
        self.cells.push(cell);
        true
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Strict ordered comparison by cell id.
    pub fn matches(&self, other: &Pattern) -> bool {
        self.cells.len() == other.cells.len()
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|(a, b)| a.id() == b.id())
    }
}

impl FromIterator<GridCell> for Pattern {
    fn from_iter<I: IntoIterator<Item = GridCell>>(iter: I) -> Self {
        let mut pattern = Pattern::new();
        for cell in iter {
            pattern.push(cell);
        }
        pattern
    }
}

pub fn min_len(level: u32) -> usize {
    MIN_PATTERN_CAP.min(2 + (level / 3) as usize)
}

pub fn max_len(level: u32) -> usize {
    MAX_PATTERN_LEN.min(3 + (level / 2) as usize)
}

pub fn random_pattern<R: Rng>(level: u32, rng: &mut R) -> Pattern {
    let len = rng.gen_range(min_len(level)..=max_len(level));
    let mut cells = GRID;
    cells.shuffle(rng);
    cells[..len].iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn path(ids: &[usize]) -> Pattern {
        ids.iter().filter_map(|&id| GridCell::from_id(id)).collect()
    }

    #[test]
    fn length_bounds_follow_level() {
        assert_eq!(min_len(1), 2);
        assert_eq!(min_len(3), 3);
        assert_eq!(min_len(9), 3);
        assert_eq!(max_len(1), 3);
        assert_eq!(max_len(2), 4);
        assert_eq!(max_len(6), 6);
        assert_eq!(max_len(40), 6);
        for level in 1..200 {
            assert!(min_len(level) <= max_len(level), "level {level}");
            assert!(max_len(level) <= MAX_PATTERN_LEN);
        }
    }

    #[test]
    fn generated_patterns_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for level in 1..30 {
            for _ in 0..50 {
                let pattern = random_pattern(level, &mut rng);
                assert!(pattern.len() >= min_len(level));
                assert!(pattern.len() <= max_len(level));
                let mut ids: Vec<usize> = pattern.cells().iter().map(GridCell::id).collect();
                assert!(ids.iter().all(|&id| id < GRID.len()));
                ids.sort_unstable();
                ids.dedup();
                assert_eq!(ids.len(), pattern.len(), "duplicate cell at level {level}");
            }
        }
    }

    #[test]
    fn generator_reaches_every_length_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; MAX_PATTERN_LEN + 1];
        for _ in 0..500 {
            seen[random_pattern(2, &mut rng).len()] = true;
        }
        assert!((min_len(2)..=max_len(2)).all(|len| seen[len]));
    }

    #[test]
    fn ordering_matters_for_matches() {
        let forward = path(&[0, 1, 2]);
        let backward = path(&[2, 1, 0]);
        assert!(forward.matches(&path(&[0, 1, 2])));
        assert!(!forward.matches(&backward));
        assert!(!forward.matches(&path(&[0, 1])));
    }

    #[test]
    fn push_rejects_duplicates() {
        let mut pattern = Pattern::new();
        assert!(pattern.push(GridCell::new(0, 0)));
        assert!(!pattern.push(GridCell::new(0, 0)));
        assert_eq!(pattern.len(), 1);
    }
}
