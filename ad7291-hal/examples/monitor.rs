//! Read every channel of an AD7291 on a Linux I2C bus.
//!
//! This enables all eight voltage inputs and the temperature sensor, sets an
//! alert window on VIN0, then prints a few rounds of readings.
use std::time::Duration;

use ad7291_hal::conversion::INTERNAL_REFERENCE_VOLTS;
use ad7291_hal::{AD7291, ChannelSet, Config, DEFAULT_ADDRESS};
use linux_embedded_hal::I2cdev;

/// I2C bus the AD7291 is attached to.
const BUS: &str = "/dev/i2c-1";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let i2c = I2cdev::new(BUS)?;

    let mut config = Config::new();
    config.with_channels(ChannelSet::all()).with_temperature(true);
    let mut adc = AD7291::new(i2c, DEFAULT_ADDRESS, config)?;

    // Alert if VIN0 leaves 0.5V..2.0V. Limits are in conversion codes, with
    // an LSB of 2.5V / 4096 on the internal reference.
    adc.set_lower_limit(0, 819)?;
    adc.set_upper_limit(0, 3276)?;
    let (low, high) = adc.get_limits(0)?;
    println!("VIN0 alert window: {low}..={high}");

    for _ in 0..5 {
        for reading in adc.read_voltages()? {
            println!(
                "VIN{}: {:>4} ({:.3}V)",
                reading.channel,
                reading.code,
                reading.volts(INTERNAL_REFERENCE_VOLTS)
            );
        }
        println!("Temperature: {:.2}°C", adc.read_temperature()?);

        // New results are latched roughly every 5ms per enabled channel, so
        // there is no point polling faster than that.
        std::thread::sleep(Duration::from_millis(500));
    }

    Ok(())
}
