//! Driver for the TCA9535/TCA9555 16-bit I2C GPIO expanders.
//!
//! The chip exposes four register groups of two bytes each (one byte per 8-pin port): input
//! levels, output levels, input polarity inversion and pin direction.  This crate reads and
//! writes those groups as typed values:
//!
//! ```
//! # use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
//! # let mut i2c = Mock::new(&[
//! #     Transaction::write(0x21, vec![0x06]),
//! #     Transaction::read(0x21, vec![0xff, 0xff]),
//! #     Transaction::write(0x21, vec![0x02]),
//! #     Transaction::read(0x21, vec![0xff, 0xff]),
//! #     Transaction::write(0x21, vec![0x04]),
//! #     Transaction::read(0x21, vec![0x00, 0x00]),
//! #     Transaction::write(0x21, vec![0x06, 0xfe, 0xff]),
//! #     Transaction::write(0x21, vec![0x02, 0xfe, 0xff]),
//! #     Transaction::write(0x21, vec![0x04, 0x00, 0x00]),
//! #     Transaction::write(0x21, vec![0x00]),
//! #     Transaction::read(0x21, vec![0x00, 0x01]),
//! # ]);
//! use tca95x5::{PinMode, PinState, Tca95x5};
//!
//! // A0 tied high, A1 and A2 low
//! let mut tca = Tca95x5::new_i2c(i2c.clone(), true, false, false);
//!
//! let mut config = tca.get_config().unwrap();
//! config.pin_mode(0, PinMode::Output);
//! config.pin_write(0, PinState::Low);
//! tca.write_all_config(&config).unwrap();
//!
//! let inputs = tca.get_input_status().unwrap();
//! if inputs.is_high(8) {
//!     // ...
//! }
//! # i2c.done();
//! ```
//!
//! The bus is accessed through the [`Transport`] trait.  [`I2cTransport`] implements it for any
//! `embedded-hal` I2C bus.
#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "std", not(test)))]
extern crate std;

#[macro_use]
mod fmt;

mod address;
mod bus;
mod common;
mod config;
mod driver;
mod error;
mod mutex;

#[cfg(test)]
mod testing;

pub use address::Address;
pub use bus::{I2cTransport, Transport, TransportError};
pub use common::{PinMode, PinState, Register, RegisterGroup};
pub use config::{
    Config, Group, InputStatus, ModeConfig, OutputConfig, PolarityConfig, Writable, PIN_COUNT,
};
pub use driver::Tca95x5;
pub use error::ConfigError;
pub use mutex::{DeviceMutex, SharedTca95x5};
