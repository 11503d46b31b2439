#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod channel;
mod command;
pub mod conversion;
mod driver;
mod error;
pub mod registers;

pub use channel::{Channel, ChannelSet};
pub use command::Config;
pub use conversion::VoltageReading;
pub use driver::{AD7291, DEFAULT_ADDRESS};
pub use error::Error;
