use once_cell::sync::Lazy;

use super::Square;

/// Knight steps as (file, rank) deltas, in generation order.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, -2),
    (1, -2),
    (-2, -1),
    (2, -1),
    (-2, 1),
    (2, 1),
    (-1, 2),
    (1, 2),
];

/// King steps as (file, rank) deltas, in generation order.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];
pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// On-board destinations of a leaper from one square, in offset order.
#[derive(Clone, Copy)]
pub(crate) struct Targets {
    squares: [Square; 8],
    len: u8,
}

impl Targets {
    #[inline]
    pub(crate) fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len as usize]
    }
}

fn leaper_table(offsets: &[(i8, i8); 8]) -> [Targets; 64] {
    let mut table = [Targets {
        squares: [Square::A1; 8],
        len: 0,
    }; 64];
    for from in Square::all() {
        let entry = &mut table[from.index()];
        for &(df, dr) in offsets {
            if let Some(to) = from.offset(df, dr) {
                entry.squares[entry.len as usize] = to;
                entry.len += 1;
            }
        }
    }
    table
}

pub(crate) static KNIGHT_TARGETS: Lazy<[Targets; 64]> = Lazy::new(|| leaper_table(&KNIGHT_OFFSETS));

pub(crate) static KING_TARGETS: Lazy<[Targets; 64]> = Lazy::new(|| leaper_table(&KING_OFFSETS));
