use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use usbgps_scanner::DEVICE_LIST_FILE;

#[derive(Parser, Debug)]
#[clap(about, version, author)]
pub struct Cli {
    /// Minimum log level to print out
    #[clap(long, value_enum, default_value = "info")]
    pub log_level: LevelFilter,

    /// Location of the device list file on disk
    #[clap(long, default_value = DEVICE_LIST_FILE)]
    pub device_list: PathBuf,

    /// Number of scan attempts before giving up
    #[clap(long, default_value = "5")]
    pub count: u32,

    /// Seconds to wait between scan attempts
    #[clap(long, default_value = "1")]
    pub poll_interval: u64,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LevelFilter {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
