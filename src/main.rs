//! Shows the X11 screen saver's status

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use flexi_logger::Logger;
use log::debug;
use std::io::{self, Write};
use std::path::PathBuf;
use xss_query::xss::{Client, Info};

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// X display to query, defaults to $DISPLAY
    #[clap(short, long)]
    display: Option<String>,

    /// Path to a TOML configuration file
    #[clap(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Log specification, for example "debug"
    #[clap(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    }
    .override_with(args.display, args.log_level);
    let _logger = Logger::try_with_str(&config.log_level)?.start()?;
    log_panics::init();
    debug!("Running with {:?}", config);

    let client = match config.display.as_deref() {
        Some(display) => Client::with_display(display),
        None => Client::new(),
    }
    .context("Couldn't create screensaver client")?;
    let info = client.query().context("Couldn't query screensaver")?;
    write_report(&mut io::stdout().lock(), &info)?;
    Ok(())
}

fn write_report(out: &mut impl Write, info: &Info) -> io::Result<()> {
    writeln!(out, "Enabled: {}", info.enabled)?;
    writeln!(out, "Active: {}", info.active)?;
    writeln!(out, "Kind: {}", info.kind)?;
    writeln!(out, "Countdown: {:?}", info.countdown)?;
    writeln!(out, "ActiveTime: {:?}", info.active_time)?;
    writeln!(out, "IdleTime: {:?}", info.idle_time)
}

#[cfg(test)]
mod test {
    use super::write_report;
    use std::time::Duration;
    use xss_query::xss::{Info, Kind};

    #[test]
    fn test_report() {
        let info = Info {
            enabled: true,
            active: false,
            kind: Kind::Blanked,
            countdown: Duration::from_millis(598_500),
            active_time: Duration::ZERO,
            idle_time: Duration::from_millis(1_500),
        };
        let mut out = Vec::new();
        write_report(&mut out, &info).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Enabled: true\nActive: false\nKind: blanked\nCountdown: 598.5s\nActiveTime: 0ns\nIdleTime: 1.5s\n"
        );
    }
}
