//! Device configuration and the command register.

use bit_field::BitField;

use crate::channel::ChannelSet;

/// Command register flag enabling the temperature sensor (D7).
const TEMPERATURE_BIT: usize = 7;
/// Command register flag enabling noise-delayed sampling (D5).
const NOISE_DELAY_BIT: usize = 5;

/// Conversion settings held in the AD7291 command register.
///
/// `Config::new()` enables nothing: no voltage channels, no temperature sensor
/// and no noise delay. Use the `with_*` methods to build up the configuration
/// to pass to [`AD7291::new`] or [`AD7291::configure`].
///
/// ```rust
/// # use ad7291_hal::{ChannelSet, Config};
/// let mut config = Config::new();
/// config
///     .with_channels(ChannelSet::try_from([0u8, 2, 4].as_slice()).unwrap())
///     .with_temperature(true);
/// assert_eq!(config.to_command_bytes(), [0b1010_1000, 0b1000_0000]);
/// ```
///
/// [`AD7291::new`]: crate::AD7291::new
/// [`AD7291::configure`]: crate::AD7291::configure
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    channels: ChannelSet,
    temperature_enabled: bool,
    noise_delay_enabled: bool,
}

impl Config {
    /// Configuration with every conversion disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the voltage channels to convert.
    pub fn with_channels(&mut self, channels: ChannelSet) -> &mut Self {
        self.channels = channels;
        self
    }

    /// Include (or not) the temperature sensor in the conversion sequence.
    pub fn with_temperature(&mut self, enabled: bool) -> &mut Self {
        self.temperature_enabled = enabled;
        self
    }

    /// Request (or not) noise-delayed sampling.
    ///
    /// When enabled, conversions are delayed while I2C activity is taking place
    /// on the bus, to keep bus noise out of the sampled signal.
    pub fn with_noise_delay(&mut self, enabled: bool) -> &mut Self {
        self.noise_delay_enabled = enabled;
        self
    }

    /// Voltage channels enabled for conversion.
    pub fn channels(&self) -> ChannelSet {
        self.channels
    }

    /// Whether the temperature sensor is converted.
    pub fn temperature_enabled(&self) -> bool {
        self.temperature_enabled
    }

    /// Whether noise-delayed sampling is requested.
    pub fn noise_delay_enabled(&self) -> bool {
        self.noise_delay_enabled
    }

    /// Number of voltage channels enabled, which sizes the voltage result read.
    pub fn active_channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Encode as the 16-bit command register value.
    ///
    /// D15 to D8 are the channel-enable bits (channel 0 at D15), D7 enables
    /// the temperature sensor and D5 enables noise-delayed sampling. The
    /// remaining bits (reset, autocycle, alert control) are left clear.
    pub fn to_command_bits(&self) -> u16 {
        let mut flags = 0u8;
        flags.set_bit(TEMPERATURE_BIT, self.temperature_enabled);
        flags.set_bit(NOISE_DELAY_BIT, self.noise_delay_enabled);
        u16::from_be_bytes([self.channels.mask(), flags])
    }

    /// Command register value as it is written to the device, MSB first.
    pub fn to_command_bytes(&self) -> [u8; 2] {
        self.to_command_bits().to_be_bytes()
    }

    /// Decode a command register value.
    ///
    /// Bits other than the channel enables, D7 and D5 are ignored.
    pub fn from_command_bits(bits: u16) -> Self {
        let [mask, flags] = bits.to_be_bytes();
        Self {
            channels: ChannelSet::from_mask(mask),
            temperature_enabled: flags.get_bit(TEMPERATURE_BIT),
            noise_delay_enabled: flags.get_bit(NOISE_DELAY_BIT),
        }
    }
}
