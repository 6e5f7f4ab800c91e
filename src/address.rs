/// 7-bit bus address of a TCA9535/TCA9555.
///
/// The upper address bits are fixed to `0b0100` by the chip, the lower three follow the `A0`,
/// `A1`, `A2` strap pins, giving the range `0x20..=0x27`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Address(u8);

impl Address {
    /// Address with all strap pins tied low.
    pub const BASE: u8 = 0x20;
    /// Mask applied to explicitly supplied addresses.
    ///
    /// Note that this keeps bit 5 and bits 0-2 but clears bit 3, so e.g. `0x28` maps to `0x20`.
    /// The literal value is kept as-is until it has been checked against the datasheet.
    pub const MASK: u8 = 0x27;

    /// Address resulting from the state of the three strap pins.
    pub const fn from_straps(a0: bool, a1: bool, a2: bool) -> Self {
        Self(Self::BASE | ((a2 as u8) << 2) | ((a1 as u8) << 1) | (a0 as u8))
    }

    /// Explicit address, masked with [`Address::MASK`].
    pub const fn from_raw(addr: u8) -> Self {
        Self(addr & Self::MASK)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::from_straps(false, false, false)
    }
}

impl From<Address> for u8 {
    fn from(a: Address) -> u8 {
        a.0
    }
}

#[cfg(test)]
mod tests {
    use super::Address;

    #[test]
    fn strap_table() {
        let table = [
            ((false, false, false), 0x20),
            ((true, false, false), 0x21),
            ((false, true, false), 0x22),
            ((true, true, false), 0x23),
            ((false, false, true), 0x24),
            ((true, false, true), 0x25),
            ((false, true, true), 0x26),
            ((true, true, true), 0x27),
        ];
        for ((a0, a1, a2), expected) in table {
            assert_eq!(Address::from_straps(a0, a1, a2).get(), expected);
        }
    }

    #[test]
    fn explicit_address_is_masked() {
        for raw in 0..=u8::MAX {
            assert_eq!(Address::from_raw(raw).get(), raw & 0x27);
        }
        assert_eq!(Address::from_raw(0x23).get(), 0x23);
        assert_eq!(Address::from_raw(0x28).get(), 0x20);
        assert_eq!(Address::from_raw(0xff).get(), 0x27);
    }

    #[test]
    fn default_is_base() {
        assert_eq!(u8::from(Address::default()), 0x20);
    }
}
