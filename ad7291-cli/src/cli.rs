use std::path::PathBuf;

use crate::limits::{HysteresisCommand, LimitsCommand};
use crate::util;

use clap::{Parser, value_parser};

/// CLI for the AD7291 8-channel I2C ADC
///
/// Talks to the AD7291 through a Linux i2c-dev bus. Each invocation first
/// writes the command register with the given channels and flags, then
/// performs the requested action.
///
/// Voltage results are raw 12-bit codes unless a reference voltage is given.
/// Limits and hysteresis are also 12-bit codes; channel 8 is the temperature
/// sensor, whose limits are in quarter degrees Celsius.
///
/// Set RUST_LOG=debug to see every bus transaction.
#[derive(Debug, Parser)]
#[command(name = "ad7291", version, about)]
pub(crate) struct Cli {
    /// I2C bus device
    #[arg(short, long, default_value = "/dev/i2c-1")]
    pub(crate) device: PathBuf,
    /// 7-bit device address in hexadecimal
    #[arg(short, long, default_value = "0x2F", value_parser = util::u8_from_hex)]
    pub(crate) address: u8,
    /// Voltage channels to enable, eg 0,2,4
    #[arg(
        short,
        long,
        value_delimiter = ',',
        value_parser = value_parser!(u8).range(0..=7)
    )]
    pub(crate) channels: Vec<u8>,
    /// Enable the temperature sensor.
    #[arg(short, long)]
    pub(crate) temperature: bool,
    /// Enable noise-delayed sampling.
    #[arg(short, long)]
    pub(crate) noise_delay: bool,
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Parser)]
pub(crate) enum Commands {
    /// Read the latest conversion of each enabled voltage channel.
    Voltages {
        /// Reference voltage, to print results in volts.
        #[arg(long)]
        vref: Option<f32>,
    },
    /// Read the temperature sensor. Requires --temperature.
    Temperature {
        /// Read the running average instead of the latest conversion.
        #[arg(long)]
        average: bool,
    },
    /// Read or change channel alert limits.
    #[command(subcommand)]
    Limits(LimitsCommand),
    /// Read or change channel alert hysteresis.
    #[command(subcommand)]
    Hysteresis(HysteresisCommand),
}
