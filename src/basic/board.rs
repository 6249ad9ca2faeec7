use rand::distributions::uniform::SampleRange;
use rand::Rng;

use crate::basic::{Cell, GridDim};

/// Cells that block fruit placement, sorted in row-major order and
/// deduplicated for use with [`random_free_cell`]
pub fn occupied_cells(cells: impl Iterator<Item = Cell>) -> Vec<Cell> {
    let mut occupied: Vec<_> = cells.collect();
    occupied.sort_unstable();
    occupied.dedup();
    occupied
}

/// Uniformly choose a cell not in `occupied`, `None` when the board is full.
/// `occupied` must be sorted in row-major order and contain only cells
/// within `dim`.
pub fn random_free_cell(occupied: &[Cell], dim: GridDim, rng: &mut impl Rng) -> Option<Cell> {
    let free_cells = (dim.x * dim.y) as usize - occupied.len();
    if free_cells == 0 {
        return None;
    }

    // index into the implicit row-major list of free cells
    let mut new_idx = (0..free_cells).sample_single(rng);
    for Cell { x, y } in occupied {
        let idx = (y * dim.x + x) as usize;
        if idx <= new_idx {
            new_idx += 1;
        }
    }

    assert!(new_idx < (dim.x * dim.y) as usize);
    Some(Cell {
        x: new_idx as isize % dim.x,
        y: new_idx as isize / dim.x,
    })
}

#[cfg(test)]
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn test_free_cell_never_occupied() {
    let dim = Cell::new(5, 5);
    let occupied = occupied_cells(
        [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (4, 4)]
            .iter()
            .map(|&(x, y)| Cell::new(x, y)),
    );

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let cell = random_free_cell(&occupied, dim, &mut rng).unwrap();
        assert!(!occupied.contains(&cell), "placed fruit on {:?}", cell);
        assert!(dim.contains(cell));
    }
}

#[test]
fn test_full_board() {
    let dim = Cell::new(3, 2);
    let all: Vec<_> = (0..2)
        .flat_map(|y| (0..3).map(move |x| Cell::new(x, y)))
        .collect();

    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(random_free_cell(&all, dim, &mut rng), None);
}

#[test]
fn test_single_free_cell() {
    let dim = Cell::new(2, 2);
    let occupied = occupied_cells(
        [(0, 0), (1, 0), (1, 1)].iter().map(|&(x, y)| Cell::new(x, y)),
    );

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(
            random_free_cell(&occupied, dim, &mut rng),
            Some(Cell::new(0, 1))
        );
    }
}

#[test]
fn test_all_free_cells_reachable() {
    let dim = Cell::new(3, 3);
    let occupied = occupied_cells([Cell::new(1, 1)].into_iter());

    let mut seen = std::collections::HashSet::new();
    for seed in 0..500 {
        let mut rng = StdRng::seed_from_u64(seed);
        seen.insert(random_free_cell(&occupied, dim, &mut rng).unwrap());
    }
    // 8 free cells on a 3x3 board with the center occupied
    assert_eq!(seen.len(), 8);
}
