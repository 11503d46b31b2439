use ad7291_hal::AD7291;
use clap::{Parser, value_parser};
use linux_embedded_hal::I2cdev;

#[derive(Debug, Parser)]
#[command(flatten_help = true)]
pub(crate) enum LimitsCommand {
    /// Print the lower and upper alert limits of a channel.
    Get {
        /// Channel 0..=7, or 8 for the temperature sensor.
        #[arg(value_parser = value_parser!(u8).range(0..=8))]
        channel: u8,
    },
    /// Set the upper alert limit (DATA_HIGH) of a channel.
    SetUpper {
        /// Channel 0..=7, or 8 for the temperature sensor.
        #[arg(value_parser = value_parser!(u8).range(0..=8))]
        channel: u8,
        /// 12-bit limit, 0..=4095.
        #[arg(value_parser = value_parser!(u16).range(0..=4095))]
        value: u16,
    },
    /// Set the lower alert limit (DATA_LOW) of a channel.
    SetLower {
        /// Channel 0..=7, or 8 for the temperature sensor.
        #[arg(value_parser = value_parser!(u8).range(0..=8))]
        channel: u8,
        /// 12-bit limit, 0..=4095.
        #[arg(value_parser = value_parser!(u16).range(0..=4095))]
        value: u16,
    },
}

#[derive(Debug, Parser)]
#[command(flatten_help = true)]
pub(crate) enum HysteresisCommand {
    /// Print the alert hysteresis of a channel.
    Get {
        #[arg(value_parser = value_parser!(u8).range(0..=8))]
        channel: u8,
    },
    /// Set the alert hysteresis of a channel.
    Set {
        #[arg(value_parser = value_parser!(u8).range(0..=8))]
        channel: u8,
        /// 12-bit hysteresis, 0..=4095.
        #[arg(value_parser = value_parser!(u16).range(0..=4095))]
        value: u16,
    },
}

pub(crate) fn limits_action(
    adc: &mut AD7291<I2cdev>,
    command: LimitsCommand,
) -> anyhow::Result<()> {
    match command {
        LimitsCommand::Get { channel } => {
            let (low, high) = adc.get_limits(channel)?;
            println!("channel {channel}: low {low} high {high}");
        }
        LimitsCommand::SetUpper { channel, value } => adc.set_upper_limit(channel, value)?,
        LimitsCommand::SetLower { channel, value } => adc.set_lower_limit(channel, value)?,
    }
    Ok(())
}

pub(crate) fn hysteresis_action(
    adc: &mut AD7291<I2cdev>,
    command: HysteresisCommand,
) -> anyhow::Result<()> {
    match command {
        HysteresisCommand::Get { channel } => {
            println!("channel {channel}: hysteresis {}", adc.get_hysteresis(channel)?);
        }
        HysteresisCommand::Set { channel, value } => adc.set_hysteresis(channel, value)?,
    }
    Ok(())
}
