use embedded_hal::i2c::{I2c, SevenBitAddress};
use tracing::{debug, warn};

use crate::channel::Channel;
use crate::command::Config;
use crate::conversion::{self, MAX_CODE, VoltageReading};
use crate::error::Error;
use crate::registers::{self, LimitRegister};

/// Default 7-bit I2C address, with both AS pins floating.
pub const DEFAULT_ADDRESS: SevenBitAddress = 0x2F;

/// Driver for the AD7291.
///
/// # Quick start
///
/// Create the driver with any bus implementing the [`embedded_hal`] blocking
/// [`I2c`] trait and an initial [`Config`], which is written to the command
/// register straight away.
///
/// ```rust,no_run
/// # use ad7291_hal::{AD7291, ChannelSet, Config, DEFAULT_ADDRESS};
/// # fn run<I: embedded_hal::i2c::I2c>(i2c: I) -> Result<(), ad7291_hal::Error<I::Error>> {
/// let mut config = Config::new();
/// config.with_channels(ChannelSet::try_from([0u8, 1].as_slice())?);
/// let mut adc = AD7291::new(i2c, DEFAULT_ADDRESS, config)?;
/// for reading in adc.read_voltages()? {
///     println!("VIN{}: {}", reading.channel, reading.code);
/// }
/// # Ok(())
/// # }
/// ```
///
/// # Overview
///
/// Every method issues at most two bus transactions and returns whatever the
/// device has latched at that moment. The AD7291 converts autonomously, so the
/// driver never triggers a conversion or waits for one. Temperature results are
/// refreshed roughly every 5ms; reading faster than that returns the same value.
///
/// Reads are a single [`I2c::write_read`] that sets the register pointer and then
/// reads from it, so the pointer cannot be moved by another transaction between
/// the two. Methods take `&mut self`; share the driver behind a mutex if more
/// than one thread needs it.
#[derive(Debug)]
pub struct AD7291<I2C> {
    i2c: I2C,
    address: SevenBitAddress,
    /// Configuration last written successfully to the command register.
    config: Config,
}

impl<I2C: I2c> AD7291<I2C> {
    ////////////////////////////////////////////////////////////////////////////////
    // Construction and configuration
    ////////////////////////////////////////////////////////////////////////////////

    /// Create the driver and write `config` to the command register.
    ///
    /// # Errors
    ///
    /// Returns [`Error::I2c`] if the command register write fails.
    pub fn new(
        i2c: I2C,
        address: SevenBitAddress,
        config: Config,
    ) -> Result<Self, Error<I2C::Error>> {
        let mut adc = Self {
            i2c,
            address,
            config,
        };
        adc.configure(config)?;
        Ok(adc)
    }

    /// Write a new configuration to the command register.
    ///
    /// The driver's view of the configuration only changes once the write
    /// has succeeded. Bus errors are returned as-is and the write is not retried.
    ///
    /// # Datasheet
    ///
    /// See table 10 ("Command Register Bit Function Descriptions").
    pub fn configure(&mut self, config: Config) -> Result<(), Error<I2C::Error>> {
        let [high, low] = config.to_command_bytes();
        self.write_register(registers::COMMAND, [high, low])?;
        debug!(
            address = self.address,
            channels = high,
            temperature = config.temperature_enabled(),
            noise_delay = config.noise_delay_enabled(),
            "AD7291 configured"
        );
        self.config = config;
        Ok(())
    }

    /// Configuration currently in effect.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Number of voltage channels whose results [`Self::read_voltages`] returns.
    pub fn active_channel_count(&self) -> usize {
        self.config.active_channel_count()
    }

    /// 7-bit I2C address of the device.
    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Destroy the driver and return the I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Conversion results
    ////////////////////////////////////////////////////////////////////////////////

    /// Read the latest conversion of every enabled voltage channel.
    ///
    /// The device sends one 2-byte result per enabled channel, in its own
    /// round-robin order, and the readings are returned in the order received.
    /// Codes are raw; see [`VoltageReading::volts`] to convert them.
    ///
    /// With no channels enabled this performs a zero-length read and returns an
    /// empty `Vec`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedChannelTag`] if a result is not tagged with a
    /// voltage channel.
    pub fn read_voltages(&mut self) -> Result<Vec<VoltageReading>, Error<I2C::Error>> {
        let register = registers::VOLTAGE_CONVERSION;
        let mut buf = vec![0u8; 2 * self.config.active_channel_count()];
        self.read_register(register, &mut buf)?;
        buf.chunks_exact(2)
            .map(|frame| {
                VoltageReading::from_frame([frame[0], frame[1]])
                    .map_err(|tag| self.unexpected_tag(register, tag))
            })
            .collect()
    }

    /// Read the latest temperature conversion, in degrees Celsius.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemperatureDisabled`] without touching the bus if the
    /// temperature sensor is not enabled, and [`Error::UnexpectedChannelTag`] if
    /// the result is not tagged as channel 8.
    pub fn read_temperature(&mut self) -> Result<f32, Error<I2C::Error>> {
        self.read_temperature_register(registers::TEMPERATURE_CONVERSION)
    }

    /// Read the running average of the temperature conversions, in degrees Celsius.
    ///
    /// Errors are as for [`Self::read_temperature`].
    pub fn read_temperature_average(&mut self) -> Result<f32, Error<I2C::Error>> {
        self.read_temperature_register(registers::TEMPERATURE_AVERAGE)
    }

    fn read_temperature_register(&mut self, register: u8) -> Result<f32, Error<I2C::Error>> {
        if !self.config.temperature_enabled() {
            return Err(Error::TemperatureDisabled);
        }
        let mut frame = [0u8; 2];
        self.read_register(register, &mut frame)?;
        conversion::celsius_from_frame(frame).map_err(|tag| self.unexpected_tag(register, tag))
    }

    fn unexpected_tag(&self, register: u8, tag: u8) -> Error<I2C::Error> {
        warn!(address = self.address, register, tag, "unexpected channel tag in AD7291 result");
        Error::UnexpectedChannelTag { register, tag }
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Alert limits
    ////////////////////////////////////////////////////////////////////////////////

    /// Read the lower and upper alert limits of a channel, as `(low, high)`.
    ///
    /// `channel` is `0..=7` for the voltage inputs or 8 for the temperature sensor.
    pub fn get_limits(&mut self, channel: u8) -> Result<(u16, u16), Error<I2C::Error>> {
        let channel = Channel::try_from(channel)?;
        let high = self.read_limit_register(LimitRegister::High, channel)?;
        let low = self.read_limit_register(LimitRegister::Low, channel)?;
        Ok((low, high))
    }

    /// Set the upper alert limit (DATA_HIGH) of a channel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannel`] or [`Error::ValueOutOfRange`] before any
    /// bus access if `channel` is not in `0..=8` or `value` exceeds 4095.
    pub fn set_upper_limit(&mut self, channel: u8, value: u16) -> Result<(), Error<I2C::Error>> {
        self.write_limit_register(LimitRegister::High, channel, value)
    }

    /// Set the lower alert limit (DATA_LOW) of a channel.
    ///
    /// Errors are as for [`Self::set_upper_limit`].
    pub fn set_lower_limit(&mut self, channel: u8, value: u16) -> Result<(), Error<I2C::Error>> {
        self.write_limit_register(LimitRegister::Low, channel, value)
    }

    /// Read the alert hysteresis of a channel.
    pub fn get_hysteresis(&mut self, channel: u8) -> Result<u16, Error<I2C::Error>> {
        let channel = Channel::try_from(channel)?;
        self.read_limit_register(LimitRegister::Hysteresis, channel)
    }

    /// Set the alert hysteresis of a channel.
    ///
    /// Errors are as for [`Self::set_upper_limit`].
    pub fn set_hysteresis(&mut self, channel: u8, value: u16) -> Result<(), Error<I2C::Error>> {
        self.write_limit_register(LimitRegister::Hysteresis, channel, value)
    }

    fn read_limit_register(
        &mut self,
        kind: LimitRegister,
        channel: Channel,
    ) -> Result<u16, Error<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.read_register(kind.address(channel), &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    fn write_limit_register(
        &mut self,
        kind: LimitRegister,
        channel: u8,
        value: u16,
    ) -> Result<(), Error<I2C::Error>> {
        let channel = Channel::try_from(channel)?;
        if value > MAX_CODE {
            return Err(Error::ValueOutOfRange(value));
        }
        self.write_register(kind.address(channel), value.to_be_bytes())
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Bus transactions
    ////////////////////////////////////////////////////////////////////////////////

    /// Write a 16-bit register: the register pointer followed by the value, MSB first.
    fn write_register(&mut self, register: u8, value: [u8; 2]) -> Result<(), Error<I2C::Error>> {
        debug!(address = self.address, register, "AD7291 write");
        self.i2c
            .write(self.address, &[register, value[0], value[1]])
            .map_err(Error::I2c)
    }

    /// Set the register pointer and read `buf.len()` bytes from it.
    fn read_register(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Error<I2C::Error>> {
        debug!(address = self.address, register, len = buf.len(), "AD7291 read");
        self.i2c
            .write_read(self.address, &[register], buf)
            .map_err(Error::I2c)
    }
}
