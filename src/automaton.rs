//! Parity flip rule: a cell flips when the sum of its eight neighbors is odd.

use crate::grid::Grid;

/// Compute the next state of `grid`.
///
/// Neighbors outside the grid count as 0. The input is left untouched and a
/// new grid is returned.
pub fn next_state(grid: &Grid) -> Grid {
    let n = grid.size();
    let cells = grid.cells();
    let mut next = Vec::with_capacity(cells.len());

    for y in 0..n {
        for x in 0..n {
            let current = cells[y * n + x];
            let sum = neighbor_sum(cells, x, y, n);
            next.push(if sum % 2 == 1 { 1 - current } else { current });
        }
    }

    Grid::from_cells(n, next)
}

#[inline]
fn neighbor_sum(cells: &[u8], x: usize, y: usize, n: usize) -> u8 {
    let mut sum = 0u8;
    let xi = x as isize;
    let yi = y as isize;
    let ni = n as isize;
    for dy in -1..=1isize {
        for dx in -1..=1isize {
            if dx == 0 && dy == 0 {
                continue;
            }
            let nx = xi + dx;
            let ny = yi + dy;
            // Zero-fill: off-grid positions contribute nothing
            if nx < 0 || ny < 0 || nx >= ni || ny >= ni {
                continue;
            }
            sum += cells[ny as usize * n + nx as usize];
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> Grid {
        text.parse().unwrap()
    }

    #[test]
    fn all_zero_stays_zero() {
        let zeros = Grid::zeros(3);
        assert_eq!(next_state(&zeros), zeros);
    }

    #[test]
    fn isolated_center_lights_everything() {
        // Every non-center cell sees exactly the center (sum 1, odd) and
        // flips; the center sees 0 and stays 1.
        let center = grid("000\n010\n000");
        assert_eq!(next_state(&center), grid("111\n111\n111"));
    }

    #[test]
    fn all_ones_returns_to_center() {
        // corners see 3, edges see 5, center sees 8
        assert_eq!(next_state(&grid("111\n111\n111")), grid("000\n010\n000"));
    }

    #[test]
    fn boundary_is_zero_filled_not_wrapped() {
        // With wraparound the far corner would see the set corner and flip.
        let corner = grid("1000\n0000\n0000\n0000");
        let next = next_state(&corner);
        assert_eq!(next, grid("1100\n1100\n0000\n0000"));
        assert_eq!(next.get(3, 3), Some(0));
    }

    #[test]
    fn single_cell_never_flips() {
        for v in [0, 1] {
            let one = Grid::from_rows(vec![vec![v]]).unwrap();
            assert_eq!(next_state(&one), one);
        }
    }

    #[test]
    fn empty_grid_maps_to_empty() {
        let empty = Grid::zeros(0);
        let next = next_state(&empty);
        assert!(next.is_empty());
        assert_eq!(next, empty);
    }

    #[test]
    fn two_by_two_parity() {
        // odd total: zeros flip to 1; even total: ones flip to 0
        assert_eq!(next_state(&grid("10\n00")), grid("11\n11"));
        assert_eq!(next_state(&grid("11\n11")), grid("00\n00"));
    }

    #[test]
    fn deterministic_and_input_untouched() {
        let g = grid("0110\n1001\n0011\n1100");
        let copy = g.clone();
        let a = next_state(&g);
        let b = next_state(&g);
        assert_eq!(a, b);
        assert_eq!(g, copy);
    }

    #[test]
    fn fixed_point_is_idempotent() {
        let fixed = grid("010\n101\n010");
        assert_eq!(next_state(&fixed), fixed);
        assert_eq!(next_state(&next_state(&fixed)), fixed);
    }
}
