//! Input channels of the AD7291.
//!
//! The AD7291 has eight voltage inputs, `VIN0` to `VIN7`, and an on-chip
//! temperature sensor. In the conversion result registers the temperature
//! sensor is tagged as channel 8, and its limit registers follow those of the
//! voltage inputs, so it is treated here as a ninth channel.
use bit_field::BitField;

/// Index of the last voltage input channel.
const LAST_VOLTAGE_CHANNEL: u8 = 7;

/// A channel number outside the range accepted by the operation.
///
/// The enclosed `u8` is the rejected channel number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidChannel(pub u8);

impl std::fmt::Display for InvalidChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid AD7291 channel {}", self.0)
    }
}

impl std::error::Error for InvalidChannel {}

/// A validated channel number, `0..=8`.
///
/// Channels 0 to 7 are the voltage inputs and channel 8 is the temperature
/// sensor. Only the limit and hysteresis registers accept the temperature
/// channel; use [`ChannelSet`] to select channels for conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Channel(u8);

impl Channel {
    /// The on-chip temperature sensor.
    pub const TEMPERATURE: Channel = Channel(8);

    /// Channel number, `0..=8`.
    pub fn index(self) -> u8 {
        self.0
    }

    /// True for the voltage inputs `VIN0` to `VIN7`.
    pub fn is_voltage(self) -> bool {
        self.0 <= LAST_VOLTAGE_CHANNEL
    }

    /// True for the temperature sensor.
    pub fn is_temperature(self) -> bool {
        self == Self::TEMPERATURE
    }
}

impl TryFrom<u8> for Channel {
    type Error = InvalidChannel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0..=8 => Ok(Self(value)),
            _ => Err(InvalidChannel(value)),
        }
    }
}

impl From<Channel> for u8 {
    fn from(value: Channel) -> Self {
        value.0
    }
}

/// Set of voltage input channels enabled for conversion.
///
/// Internally this is the channel-enable byte of the command register, where
/// channel `i` is bit `7 - i` (channel 0 is the most significant bit).
/// Only membership is recorded; the device decides the conversion order.
///
/// ```rust
/// # use ad7291_hal::ChannelSet;
/// let channels = ChannelSet::try_from([0u8, 2, 4].as_slice()).unwrap();
/// assert_eq!(channels.mask(), 0b1010_1000);
/// assert_eq!(channels.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ChannelSet(u8);

impl ChannelSet {
    /// Empty set: no voltage channel is converted.
    pub fn new() -> Self {
        Self(0)
    }

    /// All eight voltage channels.
    pub fn all() -> Self {
        Self(0xFF)
    }

    /// Build a set from the command register channel-enable byte.
    pub fn from_mask(mask: u8) -> Self {
        Self(mask)
    }

    /// Channel-enable byte for the command register (D15 to D8).
    pub fn mask(self) -> u8 {
        self.0
    }

    /// Add a voltage channel to the set.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidChannel`] if `channel` is not a voltage input (`0..=7`).
    /// The temperature sensor is enabled through its own configuration flag.
    pub fn insert(&mut self, channel: u8) -> Result<(), InvalidChannel> {
        if channel > LAST_VOLTAGE_CHANNEL {
            return Err(InvalidChannel(channel));
        }
        self.0.set_bit(Self::bit_for(channel), true);
        Ok(())
    }

    /// Builder form of [`ChannelSet::insert`].
    pub fn with(mut self, channel: u8) -> Result<Self, InvalidChannel> {
        self.insert(channel)?;
        Ok(self)
    }

    /// Whether the voltage channel is in the set.
    ///
    /// Always false for numbers outside `0..=7`.
    pub fn contains(self, channel: u8) -> bool {
        channel <= LAST_VOLTAGE_CHANNEL && self.0.get_bit(Self::bit_for(channel))
    }

    /// Number of enabled channels.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// True if no channel is enabled.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Enabled channel numbers in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..=LAST_VOLTAGE_CHANNEL).filter(move |&channel| self.contains(channel))
    }

    fn bit_for(channel: u8) -> usize {
        usize::from(LAST_VOLTAGE_CHANNEL - channel)
    }
}

impl TryFrom<&[u8]> for ChannelSet {
    type Error = InvalidChannel;

    fn try_from(channels: &[u8]) -> Result<Self, Self::Error> {
        channels
            .iter()
            .try_fold(Self::new(), |set, &channel| set.with(channel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_zero_is_most_significant_bit() {
        let set = ChannelSet::new().with(0).unwrap();
        assert_eq!(set.mask(), 0x80);
        let set = ChannelSet::new().with(7).unwrap();
        assert_eq!(set.mask(), 0x01);
    }

    #[test]
    fn every_subset_survives_the_mask() {
        for mask in 0..=u8::MAX {
            let members: Vec<u8> = ChannelSet::from_mask(mask).iter().collect();
            let rebuilt = ChannelSet::try_from(members.as_slice()).unwrap();
            assert_eq!(rebuilt.mask(), mask);
            assert_eq!(rebuilt.len(), members.len());
            for channel in 0..8 {
                let expected = mask & (1 << (7 - channel)) != 0;
                assert_eq!(rebuilt.contains(channel), expected);
            }
        }
    }

    #[test]
    fn temperature_channel_is_not_a_conversion_input() {
        assert_eq!(ChannelSet::new().with(8), Err(InvalidChannel(8)));
        assert_eq!(
            ChannelSet::try_from([1u8, 9].as_slice()),
            Err(InvalidChannel(9))
        );
        assert!(!ChannelSet::all().contains(8));
    }

    #[test]
    fn duplicate_channels_count_once() {
        let set = ChannelSet::try_from([3u8, 3, 3].as_slice()).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn channel_range() {
        assert!(Channel::try_from(0u8).unwrap().is_voltage());
        assert!(Channel::try_from(8u8).unwrap().is_temperature());
        assert_eq!(Channel::try_from(9u8), Err(InvalidChannel(9)));
    }
}
