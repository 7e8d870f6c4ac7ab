use std::io::Write;
use std::process::{Command, Stdio};

use mailbox_engine::board::Board;
use mailbox_engine::uci::{parse_uci_move, try_parse_position_command};

/// Feed `input` to the engine binary and return its stdout.
fn run_engine(input: &[u8]) -> String {
    let exe = env!("CARGO_BIN_EXE_mailbox_engine");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn engine binary");

    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(input)
        .expect("write to engine");

    let output = child.wait_with_output().expect("failed to read output");
    assert!(output.status.success(), "engine exited with {}", output.status);
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn bestmove(output: &str) -> &str {
    output
        .lines()
        .find_map(|l| l.strip_prefix("bestmove "))
        .expect("no bestmove found")
        .trim()
}

#[test]
fn uci_smoke_test_returns_legal_move() {
    let output = run_engine(b"uci\nisready\nposition startpos moves e2e4\ngo depth 2\nquit\n");

    assert!(output.contains("uciok"));
    assert!(output.contains("readyok"));

    let mv = bestmove(&output);
    assert_ne!(mv, "0000", "engine returned null move");

    let mut board = Board::new();
    try_parse_position_command(&mut board, &["position", "startpos", "moves", "e2e4"]).unwrap();
    assert!(parse_uci_move(&board, mv).is_some(), "bestmove not legal in position: {mv}");
}

#[test]
fn uci_reports_options() {
    let output = run_engine(b"uci\nsetoption name Threads value 2\nsetoption name Hash value 8\nisready\nquit\n");

    assert!(output.contains("option name Depth type spin default 4 min 1 max 10"));
    assert!(output.contains("option name Threads type spin default 1 min 1 max 64"));
    assert!(output.contains("readyok"));
}

#[test]
fn uci_perft_command_outputs_nodes() {
    let output = run_engine(b"position startpos\nperft 2\nquit\n");
    assert!(output.contains("e2e4: 20"));
    assert!(output.contains("Nodes searched: 400"));
}

#[test]
fn bad_position_keeps_previous_one() {
    let output = run_engine(
        b"position startpos moves e2e4\nposition startpos moves e2e5\nposition fen 8/8 w - -\nd\nquit\n",
    );
    assert!(output.contains("Fen: rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"));
}

#[test]
fn checkmated_side_answers_null_move() {
    let output = run_engine(b"position fen 7k/6Q1/6K1/8/8/8/8/8 b - - 0 1\ngo depth 2\nquit\n");
    assert_eq!(bestmove(&output), "0000");
}

#[test]
fn end_of_input_exits_cleanly() {
    let output = run_engine(b"isready\n");
    assert_eq!(output.trim(), "readyok");
}
