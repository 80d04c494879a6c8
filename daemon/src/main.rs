use std::process::exit;
use std::thread::sleep;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

use usbgps_scanner::{scan_with, ScanError};
use usbgps_usb::LibUsbEnumerator;

use crate::cli::{Cli, LevelFilter};

mod cli;

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    CombinedLogger::init(vec![TermLogger::new(
        match args.log_level {
            LevelFilter::Off => log::LevelFilter::Off,
            LevelFilter::Error => log::LevelFilter::Error,
            LevelFilter::Warn => log::LevelFilter::Warn,
            LevelFilter::Info => log::LevelFilter::Info,
            LevelFilter::Debug => log::LevelFilter::Debug,
            LevelFilter::Trace => log::LevelFilter::Trace,
        },
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .context("Could not configure the logger")?;

    let mut usb = LibUsbEnumerator;
    let mut last_error: Option<ScanError> = None;

    for attempt in 1..=args.count {
        if attempt > 1 {
            sleep(Duration::from_secs(args.poll_interval));
        }

        match scan_with(&args.device_list, &mut usb) {
            Ok(device) => {
                info!(
                    "device name = {}, baudrate = B{}",
                    device.device_path, device.baud
                );
                return Ok(());
            }
            Err(error) => {
                error!("scan attempt {attempt}/{}: {error}", args.count);
                last_error = Some(error);
            }
        }
    }

    exit(last_error.map_or(0, |error| error.exit_code()));
}
