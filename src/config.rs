//! Typed views of the chip's register groups.
//!
//! Each group is a 16-bit value where bit N belongs to pin N: pins 0-7 live on port 0 (the first
//! register of the group), pins 8-15 on port 1.  On the wire a group is always exactly two bytes,
//! port 0 first, see [`Group::to_bytes`] and [`Group::from_bytes`].
use crate::common::{PinMode, PinState, RegisterGroup};

/// Number of pins on the chip.
pub const PIN_COUNT: usize = 16;

/// A register group that can be transferred as one two-byte burst.
pub trait Group: Copy {
    /// Which group this is; also determines the base register.
    const GROUP: RegisterGroup;

    /// Pack into wire order: port 0, then port 1.
    fn to_bytes(&self) -> [u8; 2];

    /// Unpack from wire order: port 0, then port 1.
    fn from_bytes(bytes: [u8; 2]) -> Self;
}

/// Marker for register groups the host may write.
pub trait Writable: Group {}

fn pin_mask(pin: usize) -> u16 {
    assert!(pin < PIN_COUNT, "pin {} out of range", pin);
    1 << pin
}

macro_rules! register_group {
    ($(#[$meta:meta])* $name:ident => $group:ident) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub struct $name {
            raw: u16,
        }

        impl $name {
            pub const fn from_raw(raw: u16) -> Self {
                Self { raw }
            }

            /// All 16 bits, pin 0 in the LSB.
            pub const fn raw(&self) -> u16 {
                self.raw
            }

            pub fn set_raw(&mut self, raw: u16) {
                self.raw = raw;
            }

            /// Bit belonging to `pin`.
            ///
            /// # Panics
            /// If `pin >= 16`.
            pub fn bit(&self, pin: usize) -> bool {
                self.raw & pin_mask(pin) != 0
            }

            pub fn set_bit(&mut self, pin: usize) {
                self.raw |= pin_mask(pin);
            }

            pub fn clear_bit(&mut self, pin: usize) {
                self.raw &= !pin_mask(pin);
            }

            pub fn write_bit(&mut self, pin: usize, value: bool) {
                if value {
                    self.set_bit(pin);
                } else {
                    self.clear_bit(pin);
                }
            }
        }

        impl Group for $name {
            const GROUP: RegisterGroup = RegisterGroup::$group;

            fn to_bytes(&self) -> [u8; 2] {
                self.raw.to_le_bytes()
            }

            fn from_bytes(bytes: [u8; 2]) -> Self {
                Self {
                    raw: u16::from_le_bytes(bytes),
                }
            }
        }
    };
}

register_group! {
    /// Pin directions: a set bit makes the pin an input, a cleared bit an output.
    ModeConfig => Mode
}

register_group! {
    /// Output levels.  Bits of input pins are ignored by the chip but read back as written.
    OutputConfig => Output
}

register_group! {
    /// Input polarity inversion: a set bit inverts the value reported for that input.
    PolarityConfig => Polarity
}

register_group! {
    /// Sampled input levels, after polarity inversion.
    InputStatus => Status
}

impl Writable for ModeConfig {}
impl Writable for OutputConfig {}
impl Writable for PolarityConfig {}

impl ModeConfig {
    /// Chip state after power-on: all pins inputs.
    pub const POWER_ON: Self = Self::from_raw(0xffff);

    pub fn mode(&self, pin: usize) -> PinMode {
        self.bit(pin).into()
    }

    pub fn set_mode(&mut self, pin: usize, mode: PinMode) {
        self.write_bit(pin, mode == PinMode::Input);
    }
}

impl OutputConfig {
    /// Chip state after power-on: all outputs high.
    pub const POWER_ON: Self = Self::from_raw(0xffff);

    pub fn state(&self, pin: usize) -> PinState {
        self.bit(pin).into()
    }

    pub fn set_state(&mut self, pin: usize, state: PinState) {
        self.write_bit(pin, state.into());
    }
}

impl PolarityConfig {
    /// Chip state after power-on: no inversion.
    pub const POWER_ON: Self = Self::from_raw(0x0000);

    pub fn is_inverted(&self, pin: usize) -> bool {
        self.bit(pin)
    }

    pub fn set_inverted(&mut self, pin: usize, inverted: bool) {
        self.write_bit(pin, inverted);
    }
}

impl InputStatus {
    pub fn is_high(&self, pin: usize) -> bool {
        self.bit(pin)
    }

    pub fn is_low(&self, pin: usize) -> bool {
        !self.bit(pin)
    }
}

/// All writable pin configuration of the chip.
///
/// On the bus this is three independent transfers (mode, output, polarity), see
/// [`Tca95x5::write_all_config`][crate::Tca95x5::write_all_config].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub mode: ModeConfig,
    pub output: OutputConfig,
    pub polarity: PolarityConfig,
}

impl Config {
    /// Chip state after power-on.
    pub const POWER_ON: Self = Self {
        mode: ModeConfig::POWER_ON,
        output: OutputConfig::POWER_ON,
        polarity: PolarityConfig::POWER_ON,
    };

    /// Set the direction of `pin` in this (local) configuration.
    ///
    /// Nothing is sent to the chip until the configuration is written back.
    ///
    /// # Panics
    /// If `pin >= 16`.
    pub fn pin_mode(&mut self, pin: usize, mode: PinMode) {
        self.mode.set_mode(pin, mode);
    }

    /// Set the output level of `pin` in this (local) configuration.
    ///
    /// # Panics
    /// If `pin >= 16`.
    pub fn pin_write(&mut self, pin: usize, state: PinState) {
        self.output.set_state(pin, state);
    }

    pub fn pin_polarity(&mut self, pin: usize, inverted: bool) {
        self.polarity.set_inverted(pin, inverted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_order_is_port0_first() {
        let mode = ModeConfig::from_raw(0xbeef);
        assert_eq!(mode.to_bytes(), [0xef, 0xbe]);
        assert_eq!(OutputConfig::from_bytes([0x34, 0x12]).raw(), 0x1234);
        assert_eq!(
            InputStatus::from_bytes([0x01, 0x80]).to_bytes(),
            [0x01, 0x80]
        );
    }

    #[test]
    fn port1_pins_map_to_second_byte() {
        let mut out = OutputConfig::default();
        out.set_state(8, PinState::High);
        assert_eq!(out.to_bytes(), [0x00, 0x01]);
        out.set_state(7, PinState::High);
        assert_eq!(out.to_bytes(), [0x80, 0x01]);
    }

    #[test]
    fn pin_mode_sets_single_bit() {
        for pin in 0..PIN_COUNT {
            let mut config = Config::default();
            config.pin_mode(pin, PinMode::Input);
            assert_eq!(config.mode.raw(), 1 << pin);
            assert_eq!(config.output.raw(), 0);
            assert_eq!(config.polarity.raw(), 0);
            assert_eq!(config.mode.mode(pin), PinMode::Input);
            config.pin_mode(pin, PinMode::Output);
            assert_eq!(config, Config::default());
        }
    }

    #[test]
    fn pin_write_sets_single_bit() {
        for pin in 0..PIN_COUNT {
            let mut config = Config::default();
            config.pin_write(pin, PinState::High);
            assert_eq!(config.output.raw(), 1 << pin);
            assert_eq!(config.mode.raw(), 0);
            assert_eq!(config.output.state(pin), PinState::High);
            config.pin_write(pin, PinState::Low);
            assert_eq!(config, Config::default());
        }
    }

    #[test]
    fn bit_helpers_leave_other_pins_alone() {
        let mut pol = PolarityConfig::from_raw(0xa5a5);
        pol.set_inverted(1, true);
        pol.clear_bit(0);
        assert_eq!(pol.raw(), 0xa5a6);
        assert!(pol.is_inverted(1));
        assert!(!pol.is_inverted(0));

        let status = InputStatus::from_raw(0x8001);
        assert!(status.is_high(0));
        assert!(status.is_high(15));
        assert!(status.is_low(7));
    }

    #[test]
    fn power_on_defaults() {
        assert_eq!(Config::POWER_ON.mode.mode(3), PinMode::Input);
        assert_eq!(Config::POWER_ON.output.state(12), PinState::High);
        assert!(!Config::POWER_ON.polarity.is_inverted(0));
    }

    #[test]
    #[should_panic]
    fn pin_out_of_range() {
        Config::default().pin_mode(16, PinMode::Input);
    }
}
