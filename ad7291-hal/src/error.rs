use crate::channel::InvalidChannel;

/// Wrapper for problems when communicating with the AD7291.
///
/// `E` is the error type of the underlying I2C bus.
#[derive(Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// A channel number was outside the range accepted by the operation.
    ///
    /// Conversion channel sets accept `0..=7`. Limit and hysteresis registers also
    /// accept the temperature channel, 8.
    InvalidChannel(u8),
    /// A limit or hysteresis value did not fit in 12 bits (`0..=4095`).
    ValueOutOfRange(u16),
    /// A temperature read was attempted while the temperature sensor is not
    /// enabled in the command register.
    TemperatureDisabled,
    /// A conversion result carried a channel tag that does not belong to the
    /// register that was read.
    ///
    /// This indicates the byte stream is out of step with the device.
    UnexpectedChannelTag {
        /// Register the result was read from.
        register: u8,
        /// Channel tag found in the top four bits of the result.
        tag: u8,
    },
    /// The I2C bus returned an error.
    I2c(E),
}

impl<E> Error<E> {
    /// True for errors raised before any bus transaction was attempted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidChannel(_) | Error::ValueOutOfRange(_) | Error::TemperatureDisabled
        )
    }

    /// True if a decoded result did not match the register it was read from.
    pub fn is_framing(&self) -> bool {
        matches!(self, Error::UnexpectedChannelTag { .. })
    }
}

#[doc(hidden)]
impl<E> From<InvalidChannel> for Error<E> {
    fn from(value: InvalidChannel) -> Self {
        Self::InvalidChannel(value.0)
    }
}

impl<E: std::fmt::Debug> std::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidChannel(channel) => write!(f, "invalid channel {channel}"),
            Error::ValueOutOfRange(value) => {
                write!(f, "value {value} does not fit in 12 bits")
            }
            Error::TemperatureDisabled => write!(f, "temperature sensor is not enabled"),
            Error::UnexpectedChannelTag { register, tag } => write!(
                f,
                "unexpected channel tag {tag} in result from register {register:#04X}"
            ),
            Error::I2c(e) => write!(f, "I2C bus error: {e:?}"),
        }
    }
}

impl<E: std::fmt::Debug> std::error::Error for Error<E> {}
