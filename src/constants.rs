pub const FEH: &str = "feh";                  // External tool that paints the root window
pub const NO_XINERAMA: &str = "--no-xinerama"; // Treat the whole X display as one screen

pub const DEFAULT_INTERVAL: &str = "1h";      // Used when --time-interval is not given
pub const DEFAULT_INTERVAL_SECS: u64 = 3600;  // Fallback when the interval text does not parse
