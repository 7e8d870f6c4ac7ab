use std::io::{self, Write};
use std::ops::RangeInclusive;

use crate::board::search::DEFAULT_DEPTH;
use crate::board::SearchLimits;

use super::UciError;

pub const DEPTH_RANGE: RangeInclusive<u32> = 1..=10;
pub const THREADS_RANGE: RangeInclusive<usize> = 1..=64;

/// Engine options settable with `setoption`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UciOptions {
    pub depth: u32,
    pub threads: usize,
}

impl Default for UciOptions {
    fn default() -> Self {
        UciOptions {
            depth: DEFAULT_DEPTH,
            threads: 1,
        }
    }
}

impl UciOptions {
    /// Reply to `uci`: identity, option list, `uciok`.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "id author the {} authors", env!("CARGO_PKG_NAME"))?;
        writeln!(
            out,
            "option name Depth type spin default {} min {} max {}",
            DEFAULT_DEPTH,
            DEPTH_RANGE.start(),
            DEPTH_RANGE.end()
        )?;
        writeln!(
            out,
            "option name Threads type spin default 1 min {} max {}",
            THREADS_RANGE.start(),
            THREADS_RANGE.end()
        )?;
        writeln!(out, "uciok")
    }

    /// Apply one option. Names are case-insensitive; out-of-range spins are
    /// clamped.
    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) -> Result<(), UciError> {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "depth" => {
                let v = parse_spin::<u32>(name, value)?;
                self.depth = v.clamp(*DEPTH_RANGE.start(), *DEPTH_RANGE.end());
            }
            "threads" => {
                let v = parse_spin::<usize>(name, value)?;
                self.threads = v.clamp(*THREADS_RANGE.start(), *THREADS_RANGE.end());
            }
            _ => return Err(UciError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Limits for one `go`, with an optional depth override. The override
    /// is clamped like the `Depth` option.
    #[must_use]
    pub fn limits(&self, depth: Option<u32>) -> SearchLimits {
        let depth = depth
            .unwrap_or(self.depth)
            .clamp(*DEPTH_RANGE.start(), *DEPTH_RANGE.end());
        SearchLimits::depth(depth).with_threads(self.threads)
    }
}

fn parse_spin<T: std::str::FromStr>(name: &str, value: Option<&str>) -> Result<T, UciError> {
    value
        .and_then(|v| v.trim().parse::<T>().ok())
        .ok_or_else(|| UciError::InvalidOptionValue {
            name: name.to_string(),
            value: value.map(str::to_string),
        })
}

#[must_use]
pub fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    if parts.first() != Some(&"setoption") {
        return None;
    }

    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut mode = "";

    for part in parts.iter().skip(1) {
        match *part {
            "name" => mode = "name",
            "value" => mode = "value",
            _ => match mode {
                "name" => name_parts.push(part),
                "value" => value_parts.push(part),
                _ => {}
            },
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let name = name_parts.join(" ");
    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };

    Some((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setoption_splits_name_and_value() {
        assert_eq!(
            parse_setoption(&["setoption", "name", "Threads", "value", "4"]),
            Some(("Threads".to_string(), Some("4".to_string())))
        );
        assert_eq!(
            parse_setoption(&["setoption", "name", "Clear", "Hash"]),
            Some(("Clear Hash".to_string(), None))
        );
        assert_eq!(parse_setoption(&["setoption", "value", "3"]), None);
        assert_eq!(parse_setoption(&["go"]), None);
    }

    #[test]
    fn spins_are_clamped() {
        let mut options = UciOptions::default();
        options.apply_setoption("depth", Some("25")).unwrap();
        assert_eq!(options.depth, 10);
        options.apply_setoption("THREADS", Some("0")).unwrap();
        assert_eq!(options.threads, 1);
        options.apply_setoption("Threads", Some("8")).unwrap();
        assert_eq!(options.threads, 8);
    }

    #[test]
    fn bad_options_leave_values_untouched() {
        let mut options = UciOptions::default();
        assert!(matches!(
            options.apply_setoption("Depth", Some("deep")),
            Err(UciError::InvalidOptionValue { .. })
        ));
        assert!(matches!(
            options.apply_setoption("Depth", None),
            Err(UciError::InvalidOptionValue { value: None, .. })
        ));
        assert!(matches!(
            options.apply_setoption("Hash", Some("64")),
            Err(UciError::UnknownOption(_))
        ));
        assert_eq!(options, UciOptions::default());
    }

    #[test]
    fn limits_use_override_then_option() {
        let options = UciOptions {
            depth: 3,
            threads: 2,
        };
        assert_eq!(options.limits(None).depth, 3);
        assert_eq!(options.limits(Some(1)).depth, 1);
        assert_eq!(options.limits(None).threads, 2);
        assert_eq!(options.limits(Some(0)).depth, 1);
        assert_eq!(options.limits(Some(99)).depth, 10);
    }

    #[test]
    fn uci_reply_lists_options_and_ends_with_uciok() {
        let mut out = Vec::new();
        UciOptions::default().print(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("id name mailbox_engine"));
        assert!(text.contains("option name Depth type spin default 4 min 1 max 10"));
        assert!(text.contains("option name Threads type spin default 1 min 1 max 64"));
        assert_eq!(text.lines().last(), Some("uciok"));
    }
}
