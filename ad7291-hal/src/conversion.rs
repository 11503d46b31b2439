//! Conversion result frames.
//!
//! Voltage and temperature conversion results are 16-bit words sent MSB first.
//! The top four bits identify the channel the result belongs to and the
//! remaining twelve hold the conversion code:
//!
//! ```text
//! D15..D12   D11..D0
//! channel    code
//! ```
//!
//! Limit and hysteresis registers have no channel tag and are read as plain
//! 16-bit values.
use std::ops::Range;

use bit_field::BitField;

/// Largest 12-bit conversion code.
pub const MAX_CODE: u16 = 0x0FFF;

/// Nominal voltage of the internal reference, in volts.
pub const INTERNAL_REFERENCE_VOLTS: f32 = 2.5;

/// Channel tag carried by temperature results.
pub(crate) const TEMPERATURE_TAG: u8 = 8;

const TAG_BITS: Range<usize> = 12..16;
const CODE_BITS: Range<usize> = 0..12;

/// Temperature codes at or above this value are negative (bit 11 set).
const TEMPERATURE_SIGN_THRESHOLD: u16 = 0x800;
/// Degrees Celsius per temperature code.
const DEGREES_PER_CODE: f32 = 0.25;

/// Split a result frame into its channel tag and 12-bit code.
pub(crate) fn split_frame(frame: [u8; 2]) -> (u8, u16) {
    let word = u16::from_be_bytes(frame);
    (word.get_bits(TAG_BITS) as u8, word.get_bits(CODE_BITS))
}

/// Raw conversion result of one voltage channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoltageReading {
    /// Channel the result was tagged with, `0..=7`.
    pub channel: u8,
    /// 12-bit conversion code, `0..=4095`.
    pub code: u16,
}

impl VoltageReading {
    /// Decode one 2-byte entry of the voltage conversion result register.
    ///
    /// Returns the channel tag as the error if it does not name a voltage channel,
    /// which means the byte stream is misaligned.
    pub fn from_frame(frame: [u8; 2]) -> Result<Self, u8> {
        match split_frame(frame) {
            (channel @ 0..=7, code) => Ok(Self { channel, code }),
            (tag, _) => Err(tag),
        }
    }

    /// The two bytes the device sends for this result.
    pub fn to_frame(&self) -> [u8; 2] {
        let mut word = 0u16;
        word.set_bits(TAG_BITS, u16::from(self.channel & 0x0F));
        word.set_bits(CODE_BITS, self.code & MAX_CODE);
        word.to_be_bytes()
    }

    /// Convert the code to volts for the given reference voltage.
    ///
    /// The AD7291 transfer function is straight binary with an LSB of
    /// `vref / 4096`. Pass [`INTERNAL_REFERENCE_VOLTS`] when the internal
    /// reference is in use.
    pub fn volts(&self, vref: f32) -> f32 {
        f32::from(self.code) * vref / 4096.0
    }
}

/// Convert a 12-bit temperature code to degrees Celsius.
///
/// The code is twos complement with a resolution of 0.25°C, so codes from
/// 0x800 upwards are negative.
pub fn celsius_from_code(code: u16) -> f32 {
    let code = code & MAX_CODE;
    let quarter_degrees = if code >= TEMPERATURE_SIGN_THRESHOLD {
        -((MAX_CODE + 1 - code) as i16)
    } else {
        code as i16
    };
    f32::from(quarter_degrees) * DEGREES_PER_CODE
}

/// Decode a temperature result frame to degrees Celsius.
///
/// Returns the channel tag as the error if it is not the temperature tag (8).
pub(crate) fn celsius_from_frame(frame: [u8; 2]) -> Result<f32, u8> {
    match split_frame(frame) {
        (TEMPERATURE_TAG, code) => Ok(celsius_from_code(code)),
        (tag, _) => Err(tag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_layout() {
        assert_eq!(split_frame([0x3A, 0xBC]), (3, 0xABC));
        assert_eq!(split_frame([0x80, 0x64]), (8, 0x064));
    }

    #[test]
    fn every_voltage_frame_round_trips() {
        for channel in 0..8 {
            for code in 0..=MAX_CODE {
                let reading = VoltageReading { channel, code };
                assert_eq!(VoltageReading::from_frame(reading.to_frame()), Ok(reading));
            }
        }
    }

    #[test]
    fn non_voltage_tags_are_rejected() {
        assert_eq!(VoltageReading::from_frame([0x8F, 0xFF]), Err(8));
        assert_eq!(VoltageReading::from_frame([0x90, 0x01]), Err(9));
        assert_eq!(VoltageReading::from_frame([0xF0, 0x00]), Err(15));
    }

    #[test]
    fn volts_from_internal_reference() {
        let reading = VoltageReading { channel: 0, code: 2048 };
        assert_eq!(reading.volts(INTERNAL_REFERENCE_VOLTS), 1.25);
        let reading = VoltageReading { channel: 0, code: 0 };
        assert_eq!(reading.volts(INTERNAL_REFERENCE_VOLTS), 0.0);
    }

    #[test]
    fn positive_temperatures() {
        assert_eq!(celsius_from_code(0x000), 0.0);
        assert_eq!(celsius_from_code(0x001), 0.25);
        assert_eq!(celsius_from_code(0x064), 25.0);
        assert_eq!(celsius_from_code(0x7FF), 511.75);
    }

    #[test]
    fn negative_temperatures() {
        assert_eq!(celsius_from_code(0xFFF), -0.25);
        assert_eq!(celsius_from_code(0xF9C), -25.0);
        assert_eq!(celsius_from_code(0x800), -512.0);
    }

    #[test]
    fn temperature_frame_tag() {
        assert_eq!(celsius_from_frame([0x80, 0x64]), Ok(25.0));
        assert_eq!(celsius_from_frame([0x70, 0x64]), Err(7));
    }
}
