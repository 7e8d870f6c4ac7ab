use super::{CastleSide, CastlingRights, Color, Piece, Square};

/// A chess position: 64 cells, side to move, castling rights and the
/// en passant target.
///
/// `Board` is a plain `Copy` value. Search and legality checking copy it
/// before applying a move so the parent position stays valid for siblings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) cells: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
}

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Board {
    /// The standard initial position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, piece) in (0u8..).zip(BACK_RANK) {
            board.set_piece(Square::at(0, file), Color::White, piece);
            board.set_piece(Square::at(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square::at(6, file), Color::Black, Piece::Pawn);
            board.set_piece(Square::at(7, file), Color::Black, piece);
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    /// A board without pieces, White to move, no castling rights.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [None; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.cells[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Get just the piece kind on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.cells[sq.index()] = Some((color, piece));
    }

    pub fn clear_square(&mut self, sq: Square) {
        self.cells[sq.index()] = None;
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    pub fn set_castling_right(&mut self, color: Color, side: CastleSide) {
        self.castling_rights.set(color, side);
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant_target = target;
    }

    /// Squares holding a king of `color`. One in legal play; castling
    /// legality checks temporarily add phantom kings.
    pub fn king_squares(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    /// The same position seen from the other side: ranks flipped, colours
    /// swapped, rights and en passant target carried across.
    #[must_use]
    pub fn mirrored(&self) -> Board {
        let mut mirror = Board::empty();
        for (sq, color, piece) in self.pieces() {
            mirror.set_piece(sq.flip_vertical(), color.opponent(), piece);
        }
        mirror.side_to_move = self.side_to_move.opponent();
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                if self.castling_rights.has(color, side) {
                    mirror.castling_rights.set(color.opponent(), side);
                }
            }
        }
        mirror.en_passant_target = self.en_passant_target.map(Square::flip_vertical);
        mirror
    }

    /// Iterate over occupied squares in index order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(c, p)| (sq, c, p)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
