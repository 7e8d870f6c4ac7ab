//! Universal Chess Interface (UCI) protocol implementation.
//!
//! Handles communication with chess GUIs over stdin/stdout.
//! [`UciSession`] owns the current position and writes replies to any
//! [`Write`] sink, so the whole protocol can be driven from tests.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::search::INFINITY;
use crate::board::{
    search, search_as, Board, FenError, Move, MoveParseError, Perspective, PieceSquareEvaluator,
    SearchReport,
};

pub mod command;
pub mod options;

pub use command::{parse_uci_command, GoParams, UciCommand};
pub use options::{parse_setoption, UciOptions};

/// Error type for UCI command handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciError {
    /// Invalid FEN string
    InvalidFen(FenError),
    /// Invalid move in the move list
    InvalidMove { move_str: String, error: MoveParseError },
    /// Missing required parts in the command
    MissingParts,
    /// Token where `moves` or the end of the command was expected
    UnexpectedToken(String),
    UnknownOption(String),
    InvalidOptionValue { name: String, value: Option<String> },
}

impl fmt::Display for UciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            UciError::InvalidMove { move_str, error } => {
                write!(f, "Invalid move '{move_str}': {error}")
            }
            UciError::MissingParts => write!(f, "Missing required parts in position command"),
            UciError::UnexpectedToken(token) => write!(f, "Unexpected token '{token}'"),
            UciError::UnknownOption(name) => write!(f, "Unknown option '{name}'"),
            UciError::InvalidOptionValue { name, value } => match value {
                Some(v) => write!(f, "Invalid value '{v}' for option '{name}'"),
                None => write!(f, "Option '{name}' needs a value"),
            },
        }
    }
}

impl std::error::Error for UciError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UciError::InvalidFen(e) => Some(e),
            UciError::InvalidMove { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<FenError> for UciError {
    fn from(e: FenError) -> Self {
        UciError::InvalidFen(e)
    }
}

/// Parse a move in UCI format (e.g., "e2e4", "e7e8q").
///
/// Delegates to `Board::parse_move`. Returns `None` if the move is not legal.
#[must_use]
pub fn parse_uci_move(board: &Board, uci_string: &str) -> Option<Move> {
    board.parse_move(uci_string).ok()
}

/// Parse a UCI position command.
///
/// Supports "position startpos" and "position fen <fen>" (four to six FEN
/// fields), optionally followed by "moves <move1> <move2> ...". The
/// position is built on a scratch board; `board` changes only on success.
pub fn try_parse_position_command(board: &mut Board, parts: &[&str]) -> Result<(), UciError> {
    let mut i = 1;

    let mut scratch = match parts.get(i) {
        Some(&"startpos") => {
            i += 1;
            Board::new()
        }
        Some(&"fen") => {
            let fields: Vec<&str> = parts[i + 1..]
                .iter()
                .copied()
                .take_while(|&p| p != "moves")
                .collect();
            if fields.is_empty() {
                return Err(UciError::MissingParts);
            }
            i += 1 + fields.len();
            Board::try_from_fen(&fields.join(" "))?
        }
        _ => return Err(UciError::MissingParts),
    };

    match parts.get(i) {
        None => {}
        Some(&"moves") => {
            for &text in &parts[i + 1..] {
                let mv = scratch
                    .parse_move(text)
                    .map_err(|error| UciError::InvalidMove {
                        move_str: text.to_string(),
                        error,
                    })?;
                scratch.make_move(mv);
            }
        }
        Some(other) => return Err(UciError::UnexpectedToken((*other).to_string())),
    }

    *board = scratch;
    Ok(())
}

/// Parse a UCI position command, logging errors on failure.
///
/// Convenience wrapper around `try_parse_position_command` for callers that
/// keep the previous position when the command is bad.
pub fn parse_position_command(board: &mut Board, parts: &[&str]) {
    if let Err(e) = try_parse_position_command(board, parts) {
        log::warn!("position: {e}");
    }
}

/// UCI text for a move, `0000` for none.
#[must_use]
pub fn format_uci_move(mv: Option<Move>) -> String {
    mv.map_or_else(|| "0000".to_string(), |m| m.to_string())
}

/// Full moves to mate for a forced result first found at `plies` depth;
/// negative when the side to move is the one mated.
fn mate_moves(plies: u32, score: i32) -> i64 {
    if score > 0 {
        i64::from((plies + 1) / 2)
    } else {
        -i64::from(plies / 2)
    }
}

/// Score field of an `info` line. A root score at the no-move bound is a
/// forced mate; its distance is the shallowest depth that finds it.
fn score_field(board: &Board, report: &SearchReport) -> String {
    if report.score.abs() != INFINITY {
        return format!("cp {}", report.score);
    }
    let plies = (1..=report.depth)
        .find(|&d| {
            search_as(board, d, Perspective::Maximizing, &PieceSquareEvaluator).score
                == report.score
        })
        .unwrap_or(report.depth);
    format!("mate {}", mate_moves(plies, report.score))
}

/// One engine conversation: current position, options, output sink.
pub struct UciSession<W: Write> {
    board: Board,
    options: UciOptions,
    debug: bool,
    out: W,
}

impl<W: Write> UciSession<W> {
    pub fn new(out: W) -> Self {
        UciSession {
            board: Board::new(),
            options: UciOptions::default(),
            debug: false,
            out,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn options(&self) -> &UciOptions {
        &self.options
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Handle one input line. Returns `Ok(false)` after `quit`.
    pub fn handle_line(&mut self, line: &str) -> io::Result<bool> {
        let Some(cmd) = parse_uci_command(line) else {
            return Ok(true);
        };

        match cmd {
            UciCommand::Uci => self.options.print(&mut self.out)?,
            UciCommand::IsReady => writeln!(self.out, "readyok")?,
            UciCommand::UciNewGame => self.board = Board::new(),
            UciCommand::Position(parts) => {
                let parts_ref: Vec<&str> = parts.iter().map(String::as_str).collect();
                parse_position_command(&mut self.board, &parts_ref);
            }
            UciCommand::Go(params) => match params.perft {
                Some(depth) => self.perft(depth)?,
                None => self.go(&params)?,
            },
            UciCommand::Perft(depth) => self.perft(depth)?,
            UciCommand::SetOption(parts) => {
                let parts_ref: Vec<&str> = parts.iter().map(String::as_str).collect();
                match parse_setoption(&parts_ref) {
                    Some((name, value)) => {
                        if let Err(e) = self.options.apply_setoption(&name, value.as_deref()) {
                            log::warn!("setoption: {e}");
                        }
                    }
                    None => log::warn!("setoption: missing name"),
                }
            }
            UciCommand::Debug(mode) => match mode.as_deref() {
                Some("on") => self.set_debug(true),
                Some("off") => self.set_debug(false),
                other => log::warn!("debug: expected on|off, got {other:?}"),
            },
            UciCommand::Display => {
                write!(self.out, "{}", self.board)?;
                writeln!(self.out, "Fen: {}", self.board.to_fen())?;
            }
            // Searches run to completion before the next line is read.
            UciCommand::Stop => {}
            UciCommand::Quit => return Ok(false),
            UciCommand::Unknown(text) => log::warn!("unknown command: {text}"),
        }

        self.out.flush()?;
        Ok(true)
    }

    fn set_debug(&mut self, enabled: bool) {
        self.debug = enabled;
        crate::logger::set_debug(enabled);
    }

    fn go(&mut self, params: &GoParams) -> io::Result<()> {
        let mut limits = self.options.limits(params.depth);
        limits.time = [params.wtime, params.btime];
        limits.increment = [params.winc, params.binc];

        let report = search(&self.board, &limits, &PieceSquareEvaluator);

        if report.best_move.is_some() {
            writeln!(
                self.out,
                "info depth {} score {} nodes {} time {}",
                report.depth,
                score_field(&self.board, &report),
                report.stats.nodes,
                report.elapsed.as_millis()
            )?;
        }
        if self.debug {
            writeln!(self.out, "info string cutoffs {}", report.stats.cutoffs)?;
        }
        writeln!(self.out, "bestmove {}", format_uci_move(report.best_move))
    }

    fn perft(&mut self, depth: u32) -> io::Result<()> {
        let divide = self.board.perft_divide(depth);
        for (mv, nodes) in &divide {
            writeln!(self.out, "{mv}: {nodes}")?;
        }
        let total: u64 = if depth == 0 {
            1
        } else {
            divide.iter().map(|&(_, n)| n).sum()
        };
        writeln!(self.out)?;
        writeln!(self.out, "Nodes searched: {total}")
    }
}

/// Run the protocol on stdin/stdout until `quit` or end of input.
pub fn run_uci_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut session = UciSession::new(io::stdout().lock());

    for line in stdin.lock().lines() {
        if !session.handle_line(&line?)? {
            break;
        }
    }
    Ok(())
}
