//! AD7291 register map.
//!
//! # Datasheet
//!
//! See table 9 ("Register Addresses") of the AD7291 datasheet.
use crate::channel::Channel;

/// Command register, written as two bytes.
pub const COMMAND: u8 = 0x00;
/// Voltage conversion results of all enabled channels, read back-to-back.
pub const VOLTAGE_CONVERSION: u8 = 0x01;
/// Latest temperature conversion result.
pub const TEMPERATURE_CONVERSION: u8 = 0x02;
/// Running average of the temperature conversions.
pub const TEMPERATURE_AVERAGE: u8 = 0x03;

/// First per-channel register (channel 0 DATA_HIGH).
const CHANNEL_BASE: u8 = 0x04;
/// Each channel has a DATA_HIGH, DATA_LOW and hysteresis register.
const CHANNEL_STRIDE: u8 = 3;

/// One of the three alert registers each channel has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitRegister {
    /// Upper alert limit (DATA_HIGH).
    High,
    /// Lower alert limit (DATA_LOW).
    Low,
    /// Hysteresis applied to both limits.
    Hysteresis,
}

impl LimitRegister {
    fn offset(self) -> u8 {
        match self {
            LimitRegister::High => 0,
            LimitRegister::Low => 1,
            LimitRegister::Hysteresis => 2,
        }
    }

    /// Register address of this limit register for the given channel.
    ///
    /// The temperature sensor's registers (0x1C to 0x1E) directly follow those
    /// of channel 7, so channel 8 fits the same stride.
    pub fn address(self, channel: Channel) -> u8 {
        CHANNEL_BASE + CHANNEL_STRIDE * channel.index() + self.offset()
    }
}
