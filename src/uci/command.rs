/// Parameters of a `go` command.
///
/// Clock fields are parsed and handed to the search limits; the search itself
/// runs to a fixed depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    pub depth: Option<u32>,
    pub wtime: Option<u64>,
    pub btime: Option<u64>,
    pub winc: Option<u64>,
    pub binc: Option<u64>,
    /// `go perft N` counts leaves instead of searching.
    pub perft: Option<u32>,
}

impl GoParams {
    /// Parse the tokens after `go`. Unknown keywords and unreadable values
    /// are skipped with a warning.
    #[must_use]
    pub fn parse(parts: &[&str]) -> Self {
        let mut params = GoParams::default();
        let mut i = 0;
        while i < parts.len() {
            let key = parts[i];
            let value = parts.get(i + 1).copied();
            let consumed = match key {
                "depth" => set(&mut params.depth, key, value),
                "wtime" => set(&mut params.wtime, key, value),
                "btime" => set(&mut params.btime, key, value),
                "winc" => set(&mut params.winc, key, value),
                "binc" => set(&mut params.binc, key, value),
                "perft" => set(&mut params.perft, key, value),
                "infinite" | "ponder" => false,
                // movestogo, movetime, nodes, mate take one value we do not use
                "movestogo" | "movetime" | "nodes" | "mate" => value.is_some(),
                _ => {
                    log::warn!("ignoring go token '{key}'");
                    false
                }
            };
            i += if consumed { 2 } else { 1 };
        }
        params
    }
}

fn set<T: std::str::FromStr>(slot: &mut Option<T>, key: &str, value: Option<&str>) -> bool {
    match value.map(str::parse::<T>) {
        Some(Ok(v)) => {
            *slot = Some(v);
            true
        }
        Some(Err(_)) => {
            log::warn!("go {key}: bad value '{}'", value.unwrap_or_default());
            true
        }
        None => {
            log::warn!("go {key}: missing value");
            false
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciCommand {
    Uci,
    IsReady,
    UciNewGame,
    Position(Vec<String>),
    Go(GoParams),
    Perft(u32),
    SetOption(Vec<String>),
    Debug(Option<String>),
    /// `d`: print the current position.
    Display,
    Stop,
    Quit,
    Unknown(String),
}

pub fn parse_uci_command(line: &str) -> Option<UciCommand> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let first = *parts.first()?;

    let owned_parts = || parts.iter().map(|p| (*p).to_string()).collect::<Vec<String>>();

    let cmd = match first {
        "uci" => UciCommand::Uci,
        "isready" => UciCommand::IsReady,
        "ucinewgame" => UciCommand::UciNewGame,
        "position" => UciCommand::Position(owned_parts()),
        "go" => UciCommand::Go(GoParams::parse(&parts[1..])),
        "perft" => {
            let depth = parts.get(1).and_then(|v| v.parse::<u32>().ok()).unwrap_or(1);
            UciCommand::Perft(depth)
        }
        "setoption" => UciCommand::SetOption(owned_parts()),
        "debug" => UciCommand::Debug(parts.get(1).map(|v| (*v).to_string())),
        "d" => UciCommand::Display,
        "stop" => UciCommand::Stop,
        "quit" => UciCommand::Quit,
        _ => UciCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_not_commands() {
        assert_eq!(parse_uci_command(""), None);
        assert_eq!(parse_uci_command("   \t"), None);
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parse_uci_command("uci"), Some(UciCommand::Uci));
        assert_eq!(parse_uci_command(" isready \n"), Some(UciCommand::IsReady));
        assert_eq!(parse_uci_command("d"), Some(UciCommand::Display));
        assert_eq!(parse_uci_command("perft 3"), Some(UciCommand::Perft(3)));
        assert_eq!(parse_uci_command("perft"), Some(UciCommand::Perft(1)));
        assert_eq!(
            parse_uci_command("debug on"),
            Some(UciCommand::Debug(Some("on".to_string())))
        );
        assert_eq!(
            parse_uci_command("xyzzy 1"),
            Some(UciCommand::Unknown("xyzzy 1".to_string()))
        );
    }

    #[test]
    fn go_reads_depth_and_clocks() {
        let Some(UciCommand::Go(params)) =
            parse_uci_command("go wtime 60000 btime 55000 winc 1000 binc 1000 depth 3")
        else {
            panic!("expected go");
        };
        assert_eq!(params.depth, Some(3));
        assert_eq!(params.wtime, Some(60_000));
        assert_eq!(params.btime, Some(55_000));
        assert_eq!(params.winc, Some(1_000));
        assert_eq!(params.binc, Some(1_000));
        assert_eq!(params.perft, None);
    }

    #[test]
    fn go_skips_unused_and_malformed_tokens() {
        let params = GoParams::parse(&["movetime", "500", "depth", "x", "infinite", "perft", "2"]);
        assert_eq!(params.depth, None);
        assert_eq!(params.perft, Some(2));

        let trailing = GoParams::parse(&["depth"]);
        assert_eq!(trailing, GoParams::default());
    }
}
