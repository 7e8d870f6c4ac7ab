use std::fmt;
use std::str::FromStr;

use super::error::FenError;
use super::{Board, CastlingRights, Color, Piece, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The first four fields are required. The halfmove clock and fullmove
    /// number may be omitted but must be numbers when present; their values
    /// are not kept.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }
        if parts.len() > 6 {
            return Err(FenError::TooManyParts { found: parts.len() });
        }

        let mut board = Board::empty();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - row as u8;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::BadRankLength {
                        rank: row,
                        files: file + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                board.set_piece(Square::at(rank, file as u8), color, piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::BadRankLength { rank: row, files: file });
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.castling_rights =
            CastlingRights::from_fen(parts[2]).map_err(|c| FenError::InvalidCastling { char: c })?;

        board.en_passant_target = match parts[3] {
            "-" => None,
            text => Some(text.parse::<Square>().map_err(|_| FenError::InvalidEnPassant {
                found: text.to_string(),
            })?),
        };

        for clock in &parts[4..] {
            if clock.parse::<u32>().is_err() {
                return Err(FenError::InvalidClock {
                    found: (*clock).to_string(),
                });
            }
        }

        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    ///
    /// Move counters are not tracked, so the output always ends in `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square::at(rank, file)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} 0 1",
            rows.join("/"),
            self.side_to_move.to_char(),
            self.castling_rights.to_fen(),
            ep
        )
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

/// ASCII diagram with rank and file labels, followed by the side to move,
/// castling rights and en passant square.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for rank in (0..8u8).rev() {
            write!(f, "{}", rank + 1)?;
            for file in 0..8 {
                let c = self
                    .piece_at(Square::at(rank, file))
                    .map_or('-', |(color, piece)| piece.to_fen_char(color));
                write!(f, " {c}")?;
            }
            writeln!(f, " {}", rank + 1)?;
        }
        writeln!(f, "  a b c d e f g h")?;
        writeln!(f, "side to move: {}", self.side_to_move.to_char())?;
        writeln!(f, "castling rights: {}", self.castling_rights.to_fen())?;
        match self.en_passant_target {
            Some(sq) => write!(f, "en passant square: {sq}"),
            None => write!(f, "en passant square: -"),
        }
    }
}
