use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use crate::constants::{FEH, NO_XINERAMA};
use crate::error::{Result, RotateError};

/// How feh fits the image to the screen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Centered, black border when too small
    Center,
    /// Zoomed until it covers the screen, aspect ratio kept
    Fill,
    /// Largest size that fits, black borders on one side
    Max,
    /// Stretched to the screen, aspect ratio lost
    #[default]
    Scale,
    /// Repeated when smaller than the screen
    Tile,
}

impl DisplayMode {
    pub fn flag(self) -> &'static str {
        match self {
            DisplayMode::Center => "--bg-center",
            DisplayMode::Fill => "--bg-fill",
            DisplayMode::Max => "--bg-max",
            DisplayMode::Scale => "--bg-scale",
            DisplayMode::Tile => "--bg-tile",
        }
    }
}

/// Flags put in front of the image path on every feh call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFlags {
    mode: DisplayMode,
    no_xinerama: bool,
}

impl DisplayFlags {
    pub fn new(mode: DisplayMode, no_xinerama: bool) -> Self {
        DisplayFlags { mode, no_xinerama }
    }

    pub fn tokens(&self) -> Vec<&'static str> {
        let mut tokens = vec![self.mode.flag()];
        if self.no_xinerama {
            tokens.push(NO_XINERAMA);
        }
        tokens
    }

    /// Full argument list for one invocation.
    pub fn args_for(&self, image: &Path) -> Vec<OsString> {
        self.tokens()
            .into_iter()
            .map(OsString::from)
            .chain(std::iter::once(image.as_os_str().to_owned()))
            .collect()
    }
}

pub trait Wallpaper {
    fn set(&mut self, image: &Path) -> Result<()>;
}

pub struct Feh {
    program: String,
    flags: DisplayFlags,
}

impl Feh {
    pub fn new(flags: DisplayFlags) -> Feh {
        Feh { program: FEH.to_string(), flags }
    }

    #[cfg(test)]
    pub fn with_program(program: impl Into<String>, flags: DisplayFlags) -> Feh {
        Feh { program: program.into(), flags }
    }

    pub fn command(&self, image: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.args(self.flags.args_for(image));
        command
    }
}

impl Wallpaper for Feh {
    // Blocks until feh exits; a non-zero status is an error.
    fn set(&mut self, image: &Path) -> Result<()> {
        let status = self
            .command(image)
            .status()
            .map_err(|source| RotateError::Spawn { tool: self.program.clone(), source })?;

        if !status.success() {
            return Err(RotateError::DisplayFailed { tool: self.program.clone(), status });
        }
        Ok(())
    }
}
