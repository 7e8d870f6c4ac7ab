//! Legal move filter checked against the independent attack oracle.

use crate::board::{Board, Move};

/// True when playing `mv` leaves one of the mover's kings attacked, or, for
/// castling, when the king's origin or the square it crosses is attacked
/// after the move.
pub(super) fn exposes_king(board: &Board, mv: Move) -> bool {
    let mover = board.side_to_move();
    let after = board.with_move(mv);
    if after.is_in_check(mover) {
        return true;
    }
    match board.castle_side(mv) {
        Some(side) => {
            let rank = mv.from().rank();
            let transit = crate::board::Square::new(rank, side.transit_file());
            [Some(mv.from()), transit]
                .into_iter()
                .flatten()
                .any(|sq| after.is_square_attacked(sq, mover.opponent()))
        }
        None => false,
    }
}

fn assert_filter_agrees(fen: &str) {
    let board = Board::from_fen(fen);
    let legal = board.generate_moves();
    for &mv in &board.generate_pseudo_moves() {
        let exposed = exposes_king(&board, mv);
        assert_eq!(
            legal.contains(&mv),
            !exposed,
            "{fen}: move {mv} legal={} exposed={exposed}",
            legal.contains(&mv)
        );
    }
}

#[test]
fn test_filter_matches_attack_oracle() {
    for fen in [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
        "r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1",
    ] {
        assert_filter_agrees(fen);
    }
}

#[test]
fn test_en_passant_discovered_check_is_illegal() {
    // Capturing en passant would clear the fifth rank between king and rook.
    let board = Board::from_fen("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1");
    let ep: Move = "e5d6".parse().unwrap();
    assert!(board.generate_pseudo_moves().contains(&ep));
    assert!(!board.is_legal(ep));
    assert!(exposes_king(&board, ep));
}

#[test]
fn test_check_evasions_only() {
    // Rook on e8 gives check; every legal move must resolve it.
    let board = Board::from_fen("4r1k1/8/8/8/8/8/3P4/3QK3 w - - 0 1");
    let moves = board.generate_moves();
    assert!(!moves.is_empty());
    for &mv in &moves {
        assert!(!board.with_move(mv).is_in_check(board.side_to_move()));
    }
}

#[test]
fn test_castling_with_attacked_destination_is_illegal() {
    let board = Board::from_fen("4k1r1/8/8/8/8/8/8/4K2R w K - 0 1");
    let castle: Move = "e1g1".parse().unwrap();
    assert!(board.generate_pseudo_moves().contains(&castle));
    assert!(!board.is_legal(castle));
}
