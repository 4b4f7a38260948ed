use std::path::{Path, PathBuf};
use std::thread;

use crate::error::Result;
use crate::feh::Wallpaper;
use crate::interval::Interval;
use crate::selector;

/// Re-picks and re-applies the wallpaper every `interval`, forever.
pub struct Scheduler<W: Wallpaper> {
    source: PathBuf,
    interval: Interval,
    wallpaper: W,
}

impl<W: Wallpaper> Scheduler<W> {
    pub fn new(source: PathBuf, interval: Interval, wallpaper: W) -> Self {
        if interval.secs() == 0 {
            log::warn!("interval is 0s, wallpaper will be changed in a busy loop");
        }
        Scheduler { source, interval, wallpaper }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// One iteration: pick, apply, sleep. Returns the image that was applied.
    pub fn step(&mut self) -> Result<PathBuf> {
        let image = selector::resolve(&self.source)?;
        log::info!("setting wallpaper {}", image.display());
        self.wallpaper.set(&image)?;
        thread::sleep(self.interval.as_duration());
        Ok(image)
    }

    /// Only returns on the first failed step.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.step()?;
        }
    }
}
