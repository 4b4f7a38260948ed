/*
 * Command line arguments
 */
use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::constants::DEFAULT_INTERVAL;
use crate::feh::{DisplayFlags, DisplayMode};
use crate::interval::Interval;

/// rotate wallpaper: set a (random) background with feh every so often.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Set the background. Use with --center, --fill, --max, --scale or --tile;
    /// --scale is the default.
    #[arg(long)]
    pub background: bool,

    /// Center the file on the background. If it is too small, it will be
    /// surrounded by a black border
    #[arg(short, long)]
    pub center: bool,

    /// Like --scale, but preserves aspect ratio by zooming the image until it
    /// fits. Either a horizontal or a vertical part of the image will be cut off
    #[arg(short, long)]
    pub fill: bool,

    /// Like --fill, but scale the image to the maximum size that fits the
    /// screen with black borders on one side
    #[arg(short, long)]
    pub max: bool,

    /// Fit the file into the background without repeating it, cutting off
    /// stuff or using borders. The aspect ratio is not preserved either
    #[arg(short, long)]
    pub scale: bool,

    /// Tile (repeat) the image in case it is too small for the screen
    #[arg(short, long)]
    pub tile: bool,

    /// Treat the whole X display as one screen when setting wallpapers
    #[arg(long)]
    pub no_xinerama: bool,

    /// Use this background image
    #[arg(short, long)]
    pub image: Option<OsString>,

    /// Pick a random background from this directory. Wins over --image
    #[arg(short, long)]
    pub directory: Option<OsString>,

    /// How long each background stays: '30s', '15m', '2h'
    #[arg(long, default_value = DEFAULT_INTERVAL)]
    pub time_interval: String,
}

impl Args {
    pub fn parse_normalized<I, T>(args: I) -> Args
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Args::parse_from(normalize_args(args))
    }

    /// First mode flag in center, fill, max, scale, tile order.
    pub fn display_mode(&self) -> DisplayMode {
        if self.center {
            DisplayMode::Center
        } else if self.fill {
            DisplayMode::Fill
        } else if self.max {
            DisplayMode::Max
        } else if self.scale {
            DisplayMode::Scale
        } else if self.tile {
            DisplayMode::Tile
        } else {
            DisplayMode::default()
        }
    }

    pub fn display_flags(&self) -> DisplayFlags {
        DisplayFlags::new(self.display_mode(), self.no_xinerama)
    }

    /// Directory first, then image. An empty value counts as not given.
    pub fn source(&self) -> Option<PathBuf> {
        [&self.directory, &self.image]
            .into_iter()
            .flatten()
            .find(|path| !path.is_empty())
            .map(PathBuf::from)
    }

    pub fn interval(&self) -> Interval {
        Interval::parse(&self.time_interval)
    }
}

// clap shorts are a single character; the two-letter ones are spelled out here
// so `-ti` is not read as `-t -i`.
const LEGACY_SHORTS: [(&str, &str); 3] = [
    ("-bg", "--background"),
    ("-nx", "--no-xinerama"),
    ("-ti", "--time-interval"),
];

pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for arg in args.into_iter().map(Into::into) {
        if passthrough {
            out.push(arg);
            continue;
        }
        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };
        if text == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }
        out.push(rewrite_short(text).unwrap_or(arg));
    }
    out
}

fn rewrite_short(text: &str) -> Option<OsString> {
    LEGACY_SHORTS.iter().find_map(|(short, long)| {
        if text == *short {
            Some(OsString::from(*long))
        } else {
            text.strip_prefix(short)
                .and_then(|rest| rest.strip_prefix('='))
                .map(|value| OsString::from(format!("{long}={value}")))
        }
    })
}
