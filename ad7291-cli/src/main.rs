use ad7291_hal::{AD7291, ChannelSet, Config};
use anyhow::Context;
use clap::Parser;
use linux_embedded_hal::I2cdev;
use tracing::debug;

use cli::Commands;

mod cli;
mod limits;
mod util;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let mut config = Config::new();
    config
        .with_channels(ChannelSet::try_from(cli.channels.as_slice())?)
        .with_temperature(cli.temperature)
        .with_noise_delay(cli.noise_delay);

    let i2c = I2cdev::new(&cli.device)
        .with_context(|| format!("opening {}", cli.device.display()))?;
    debug!(device = %cli.device.display(), address = cli.address, "opened I2C bus");
    let mut adc = AD7291::new(i2c, cli.address, config).context("configuring AD7291")?;

    match cli.command {
        Commands::Voltages { vref } => {
            for reading in adc.read_voltages()? {
                match vref {
                    Some(vref) => println!("VIN{}: {:.4}V", reading.channel, reading.volts(vref)),
                    None => println!("VIN{}: {}", reading.channel, reading.code),
                }
            }
        }
        Commands::Temperature { average: false } => {
            println!("{:.2}°C", adc.read_temperature()?);
        }
        Commands::Temperature { average: true } => {
            println!("{:.2}°C", adc.read_temperature_average()?);
        }
        Commands::Limits(command) => limits::limits_action(&mut adc, command)?,
        Commands::Hysteresis(command) => limits::hysteresis_action(&mut adc, command)?,
    }
    Ok(())
}
