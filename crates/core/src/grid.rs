//! Grid module - shuffled paired-symbol layouts
//!
//! A grid is an ordered sequence of symbol ids (`1..=pair_count`), each id
//! appearing exactly twice, permuted with Fisher-Yates. The icons theme
//! additionally assigns one glyph per symbol id from a fixed pool, shuffled
//! per game so the same symbol gets a different face across rounds.

use crate::rng::SimpleRng;
use crate::types::{GridSize, SymbolId, MAX_PAIRS};

/// Glyph pool for the icons theme.
///
/// The 6x6 grid needs 18 pairs, so the pool is exactly consumed at the
/// largest size. All glyphs render single-cell in common monospace fonts.
pub const ICON_GLYPHS: [char; MAX_PAIRS] = [
    '♠', '♣', '♥', '♦', '★', '☀', '☂', '☁', '☘', '☾', '♪', '♫', '⚑', '✦', '✧', '✿', '❖', '♞',
];

/// Shuffled card layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: GridSize,
    cells: Vec<SymbolId>,
}

impl Grid {
    /// Generate a shuffled grid for the given size.
    ///
    /// Every symbol id in `1..=pair_count` appears exactly twice.
    pub fn generate(size: GridSize, rng: &mut SimpleRng) -> Self {
        let pairs = size.pair_count();
        let mut cells: Vec<SymbolId> = Vec::with_capacity(size.cell_count());
        for symbol in 1..=pairs as SymbolId {
            cells.push(symbol);
            cells.push(symbol);
        }
        rng.shuffle(&mut cells);
        Self { size, cells }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn pair_count(&self) -> usize {
        self.cells.len() / 2
    }

    /// Symbol at a grid index, or `None` out of range.
    pub fn symbol_at(&self, index: usize) -> Option<SymbolId> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[SymbolId] {
        &self.cells
    }
}

/// Per-game assignment of one glyph per symbol id (icons theme).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconMap {
    glyphs: Vec<char>,
}

impl IconMap {
    /// Shuffle the glyph pool and take one glyph per symbol.
    pub fn assign(pair_count: usize, rng: &mut SimpleRng) -> Self {
        debug_assert!(pair_count <= MAX_PAIRS);
        let mut pool = ICON_GLYPHS;
        rng.shuffle(&mut pool);
        Self {
            glyphs: pool[..pair_count.min(MAX_PAIRS)].to_vec(),
        }
    }

    /// Glyph for a symbol id, or `None` for an unknown symbol.
    pub fn glyph(&self, symbol: SymbolId) -> Option<char> {
        if symbol == 0 {
            return None;
        }
        self.glyphs.get(symbol as usize - 1).copied()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol_counts(grid: &Grid) -> Vec<usize> {
        let mut counts = vec![0usize; grid.pair_count() + 1];
        for &symbol in grid.cells() {
            counts[symbol as usize] += 1;
        }
        counts
    }

    #[test]
    fn test_every_symbol_appears_exactly_twice() {
        for size in GridSize::ALL {
            let mut rng = SimpleRng::new(42);
            let grid = Grid::generate(size, &mut rng);

            assert_eq!(grid.len(), size.cell_count());
            let counts = symbol_counts(&grid);
            for symbol in 1..=size.pair_count() {
                assert_eq!(counts[symbol], 2, "symbol {} in {:?}", symbol, size);
            }
        }
    }

    #[test]
    fn test_grid_is_permutation_of_pair_sequence() {
        let mut rng = SimpleRng::new(7);
        let grid = Grid::generate(GridSize::Four, &mut rng);

        let mut sorted: Vec<SymbolId> = grid.cells().to_vec();
        sorted.sort_unstable();
        let expected: Vec<SymbolId> = (1..=8).flat_map(|s| [s, s]).collect();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);
        assert_eq!(
            Grid::generate(GridSize::Six, &mut rng1),
            Grid::generate(GridSize::Six, &mut rng2)
        );
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut rng1 = SimpleRng::new(1);
        let mut rng2 = SimpleRng::new(2);
        assert_ne!(
            Grid::generate(GridSize::Six, &mut rng1).cells(),
            Grid::generate(GridSize::Six, &mut rng2).cells()
        );
    }

    #[test]
    fn test_symbol_at_out_of_range() {
        let mut rng = SimpleRng::new(1);
        let grid = Grid::generate(GridSize::Four, &mut rng);
        assert_eq!(grid.symbol_at(16), None);
        assert!(grid.symbol_at(15).is_some());
    }

    #[test]
    fn test_icon_map_assigns_distinct_glyphs() {
        let mut rng = SimpleRng::new(5);
        let map = IconMap::assign(GridSize::Six.pair_count(), &mut rng);
        assert_eq!(map.len(), 18);

        let mut seen = Vec::new();
        for symbol in 1..=18 {
            let glyph = map.glyph(symbol).unwrap();
            assert!(!seen.contains(&glyph), "duplicate glyph {:?}", glyph);
            seen.push(glyph);
        }
    }

    #[test]
    fn test_icon_map_unknown_symbol() {
        let mut rng = SimpleRng::new(5);
        let map = IconMap::assign(8, &mut rng);
        assert_eq!(map.glyph(0), None);
        assert_eq!(map.glyph(9), None);
        assert!(map.glyph(8).is_some());
    }
}
