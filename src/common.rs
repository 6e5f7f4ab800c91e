/// Register map of the TCA9535/TCA9555.
///
/// Every group spans two consecutive registers, port 0 first.  The chip auto-increments within a
/// register pair, so a two-byte burst starting at the `*0` register covers the whole group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    Input0 = 0x00,
    Input1 = 0x01,
    Output0 = 0x02,
    Output1 = 0x03,
    PolarityInversion0 = 0x04,
    PolarityInversion1 = 0x05,
    Configuration0 = 0x06,
    Configuration1 = 0x07,
}

impl From<Register> for u8 {
    fn from(r: Register) -> u8 {
        r as u8
    }
}

/// The four logical 16-bit register groups of the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterGroup {
    /// Pin directions (`Configuration0`/`Configuration1`).
    Mode,
    /// Output levels (`Output0`/`Output1`).
    Output,
    /// Input polarity inversion (`PolarityInversion0`/`PolarityInversion1`).
    Polarity,
    /// Input levels (`Input0`/`Input1`), read-only.
    Status,
}

impl RegisterGroup {
    /// First register of the group.
    pub const fn base(self) -> Register {
        match self {
            RegisterGroup::Mode => Register::Configuration0,
            RegisterGroup::Output => Register::Output0,
            RegisterGroup::Polarity => Register::PolarityInversion0,
            RegisterGroup::Status => Register::Input0,
        }
    }
}

/// Direction of a pin.  The discriminant is the raw bit in the configuration register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    Output = 0,
    Input = 1,
}

impl From<bool> for PinMode {
    fn from(bit: bool) -> Self {
        if bit {
            PinMode::Input
        } else {
            PinMode::Output
        }
    }
}

/// Commanded level of an output pin.  The discriminant is the raw bit in the output register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    Low = 0,
    High = 1,
}

impl From<bool> for PinState {
    fn from(bit: bool) -> Self {
        if bit {
            PinState::High
        } else {
            PinState::Low
        }
    }
}

impl From<PinState> for bool {
    fn from(s: PinState) -> bool {
        s == PinState::High
    }
}
