//! Shape catalog - immutable definitions of the 7 piece kinds.
//!
//! Each shape is a 4x4 occupancy matrix plus its kind tag. The matrices are
//! defined once and never mutated; pieces take a working copy at spawn.
//! Rotation logic elsewhere assumes exactly the 4x4 frame, even for shapes
//! whose footprint is smaller.

use crate::core::rng::SimpleRng;
use crate::types::{PieceKind, ShapeMatrix};

/// An immutable catalog entry: occupancy matrix plus kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub matrix: ShapeMatrix,
    pub kind: PieceKind,
}

const X: bool = true;
const O: bool = false;

/// The 7 tetromino shapes, in catalog (color code) order.
pub const CATALOG: [Shape; 7] = [
    Shape {
        kind: PieceKind::I,
        matrix: [
            [O, O, O, O],
            [X, X, X, X],
            [O, O, O, O],
            [O, O, O, O],
        ],
    },
    Shape {
        kind: PieceKind::J,
        matrix: [
            [X, O, O, O],
            [X, X, X, O],
            [O, O, O, O],
            [O, O, O, O],
        ],
    },
    Shape {
        kind: PieceKind::L,
        matrix: [
            [O, O, X, O],
            [X, X, X, O],
            [O, O, O, O],
            [O, O, O, O],
        ],
    },
    Shape {
        kind: PieceKind::O,
        matrix: [
            [O, X, X, O],
            [O, X, X, O],
            [O, O, O, O],
            [O, O, O, O],
        ],
    },
    Shape {
        kind: PieceKind::S,
        matrix: [
            [O, X, X, O],
            [X, X, O, O],
            [O, O, O, O],
            [O, O, O, O],
        ],
    },
    Shape {
        kind: PieceKind::T,
        matrix: [
            [O, X, O, O],
            [X, X, X, O],
            [O, O, O, O],
            [O, O, O, O],
        ],
    },
    Shape {
        kind: PieceKind::Z,
        matrix: [
            [X, X, O, O],
            [O, X, X, O],
            [O, O, O, O],
            [O, O, O, O],
        ],
    },
];

/// Look up the catalog entry for a kind.
pub fn shape_for(kind: PieceKind) -> &'static Shape {
    &CATALOG[(kind.code() - 1) as usize]
}

/// Pick one of the 7 shapes uniformly at random.
pub fn random_shape(rng: &mut SimpleRng) -> &'static Shape {
    &CATALOG[rng.next_range(CATALOG.len() as u32) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_all_kinds_in_code_order() {
        for (i, shape) in CATALOG.iter().enumerate() {
            assert_eq!(shape.kind.code() as usize, i + 1);
        }
    }

    #[test]
    fn every_shape_has_four_cells() {
        for shape in &CATALOG {
            let count = shape
                .matrix
                .iter()
                .flatten()
                .filter(|&&cell| cell)
                .count();
            assert_eq!(count, 4, "shape {:?}", shape.kind);
        }
    }

    #[test]
    fn shape_for_matches_catalog() {
        for kind in PieceKind::ALL {
            assert_eq!(shape_for(kind).kind, kind);
        }
    }

    #[test]
    fn random_shape_is_deterministic_per_seed() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for _ in 0..50 {
            assert_eq!(random_shape(&mut a).kind, random_shape(&mut b).kind);
        }
    }

    #[test]
    fn random_shape_reaches_every_kind() {
        let mut rng = SimpleRng::new(1);
        let mut seen = [false; 7];
        for _ in 0..1000 {
            seen[(random_shape(&mut rng).kind.code() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
