use std::env;
use std::ffi::OsStr;
use std::path::Path;

use anyhow::Context;

mod cli;
mod constants;
mod error;
mod feh;
mod interval;
mod scheduler;
mod selector;

use crate::cli::Args;
use crate::feh::Feh;
use crate::scheduler::Scheduler;

fn program_name() -> String {
    program_name_from(env::args_os().next().as_deref())
}

fn program_name_from(arg0: Option<&OsStr>) -> String {
    arg0.and_then(|arg0| Path::new(arg0).file_name())
        .map_or("rw".to_string(), |name| name.to_string_lossy().into_owned())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse_normalized(env::args_os());

    if !args.background {
        println!("{} -h", program_name());
        return Ok(());
    }

    let Some(source) = args.source() else {
        log::info!("no --directory or --image given, nothing to do");
        return Ok(());
    };

    let flags = args.display_flags();
    let interval = args.interval();
    log::info!(
        "rotating {} every {}s with feh {}",
        source.display(),
        interval.secs(),
        flags.tokens().join(" ")
    );

    let mut scheduler = Scheduler::new(source, interval, Feh::new(flags));
    scheduler
        .run()
        .with_context(|| format!("rotating wallpaper from {}", scheduler.source().display()))
}
