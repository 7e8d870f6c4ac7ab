use crate::board::Color;

/// Default fixed search depth in plies.
pub const DEFAULT_DEPTH: u32 = 4;

/// What the caller allows a search to spend.
///
/// Only `depth` and `threads` are honoured. Clock fields are accepted so the
/// protocol layer can pass `wtime`/`btime`/`winc`/`binc` through, but the
/// search always runs to the fixed depth.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchLimits {
    pub depth: u32,
    pub threads: usize,
    /// Remaining time per color in milliseconds, White first.
    pub time: [Option<u64>; 2],
    /// Increment per move per color in milliseconds.
    pub increment: [Option<u64>; 2],
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            depth: DEFAULT_DEPTH,
            threads: 1,
            time: [None; 2],
            increment: [None; 2],
        }
    }
}

impl SearchLimits {
    #[must_use]
    pub fn depth(depth: u32) -> Self {
        SearchLimits {
            depth,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    #[must_use]
    pub fn time_for(&self, color: Color) -> Option<u64> {
        self.time[color.index()]
    }

    #[must_use]
    pub fn increment_for(&self, color: Color) -> Option<u64> {
        self.increment[color.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_depth_engine() {
        let limits = SearchLimits::default();
        assert_eq!(limits.depth, 4);
        assert_eq!(limits.threads, 1);
        assert_eq!(limits.time_for(Color::White), None);
    }

    #[test]
    fn builder_clamps_threads() {
        let limits = SearchLimits::depth(2).with_threads(0);
        assert_eq!(limits.depth, 2);
        assert_eq!(limits.threads, 1);
    }
}
