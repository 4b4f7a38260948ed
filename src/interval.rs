use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::constants::DEFAULT_INTERVAL_SECS;

static INTERVAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)([hms])").expect("interval pattern is valid"));

/// Converts `"1h"`, `"30m"` or `"45s"` to seconds.
///
/// Only the first `<digits><unit>` run is read and the unit is case-insensitive.
/// Text without such a run falls back to one hour.
pub fn parse_interval(text: &str) -> u64 {
    let lowered = text.to_lowercase();
    let Some(caps) = INTERVAL_RE.captures(&lowered) else {
        log::debug!("interval {:?} not understood, using {}s", text, DEFAULT_INTERVAL_SECS);
        return DEFAULT_INTERVAL_SECS;
    };

    // A digit run too long for u64 counts as 1.
    let n: u64 = caps[1].parse().unwrap_or(1);

    match &caps[2] {
        "h" => n.saturating_mul(3600),
        "m" => n.saturating_mul(60),
        _ => n,
    }
}

/// Sleep length between two wallpaper changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval(u64);

impl Interval {
    pub fn parse(text: &str) -> Self {
        Interval(parse_interval(text))
    }

    pub fn secs(self) -> u64 {
        self.0
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_secs(self.0)
    }
}
