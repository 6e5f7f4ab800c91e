use crate::address::Address;
use crate::bus::{I2cTransport, Transport};
use crate::common::{Register, RegisterGroup};
use crate::config::{
    Config, Group, InputStatus, ModeConfig, OutputConfig, PolarityConfig, Writable,
};
use crate::error::ConfigError;

/// `TCA9535`/`TCA9555` "16-bit I2C-bus and SMBus I/O port"
///
/// The handle only stores the transport and the bus address.  All configuration lives on the chip
/// and is fetched again on every read.
pub struct Tca95x5<T> {
    bus: T,
    addr: Address,
}

impl<I2C> Tca95x5<I2cTransport<I2C>>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Driver on an `embedded-hal` I2C bus with the address given by the strap pins.
    pub fn new_i2c(i2c: I2C, a0: bool, a1: bool, a2: bool) -> Self {
        Self::new(I2cTransport::new(i2c), a0, a1, a2)
    }
}

impl<T: Transport> Tca95x5<T> {
    /// Driver with the address given by the strap pins.
    pub fn new(bus: T, a0: bool, a1: bool, a2: bool) -> Self {
        Self {
            bus,
            addr: Address::from_straps(a0, a1, a2),
        }
    }

    /// Driver with an explicit address, masked like [`begin()`][Self::begin] does.
    pub fn with_address(bus: T, addr: u8) -> Self {
        Self {
            bus,
            addr: Address::from_raw(addr),
        }
    }

    /// Use an explicit bus address.  Only the bits in [`Address::MASK`] are kept.
    pub fn begin(&mut self, addr: u8) {
        self.addr = Address::from_raw(addr);
    }

    /// Use the bus address given by the strap pins.
    pub fn begin_straps(&mut self, a0: bool, a1: bool, a2: bool) {
        self.set_address(a0, a1, a2);
    }

    pub fn set_address(&mut self, a0: bool, a1: bool, a2: bool) {
        self.addr = Address::from_straps(a0, a1, a2);
    }

    pub fn address(&self) -> u8 {
        self.addr.get()
    }

    /// Give back the transport.
    pub fn release(self) -> T {
        self.bus
    }

    /// Read `buf.len()` bytes starting at `reg`.
    ///
    /// If selecting the register fails, the error is returned and `buf` is not touched.  The
    /// transport may deliver fewer bytes than requested; this is not an error, the remaining bytes
    /// of `buf` keep their previous contents.  The number of bytes actually read is returned.
    ///
    /// An empty `buf` only selects the register, no read is issued.
    ///
    /// The length is not limited here, but a transport may cap it: [`I2cTransport`] rejects reads
    /// longer than the 8-byte register map with [`TransportError::BufferOverflow`], before any
    /// byte of `buf` is touched.
    ///
    /// [`TransportError::BufferOverflow`]: crate::TransportError::BufferOverflow
    pub fn read(&mut self, reg: Register, buf: &mut [u8]) -> Result<usize, T::Error> {
        let addr = self.addr.get();
        trace!("read {=u8:#x} reg {} len {=usize}", addr, reg, buf.len());

        self.bus.begin_transaction(addr);
        self.bus.write_byte(reg.into());
        if let Err(e) = self.bus.end_transaction() {
            warn!("selecting reg {} on {=u8:#x} failed", reg, addr);
            return Err(e);
        }

        if buf.is_empty() {
            return Ok(0);
        }

        self.bus.request_bytes(addr, buf.len())?;
        let mut filled = 0;
        for slot in buf.iter_mut() {
            if self.bus.bytes_available() == 0 {
                break;
            }
            match self.bus.read_byte() {
                Some(b) => *slot = b,
                None => break,
            }
            filled += 1;
        }

        if filled < buf.len() {
            warn!(
                "short read on {=u8:#x}: {=usize} of {=usize} bytes",
                addr,
                filled,
                buf.len()
            );
        }
        Ok(filled)
    }

    /// Write all of `buf` starting at `reg` in one transfer.
    ///
    /// Only the completion status of the whole transfer is checked.
    pub fn write(&mut self, reg: Register, buf: &[u8]) -> Result<(), T::Error> {
        let addr = self.addr.get();
        trace!("write {=u8:#x} reg {} data {=[u8]:#x}", addr, reg, buf);

        self.bus.begin_transaction(addr);
        self.bus.write_byte(reg.into());
        for &b in buf {
            self.bus.write_byte(b);
        }
        self.bus.end_transaction().map_err(|e| {
            warn!("write to reg {} on {=u8:#x} failed", reg, addr);
            e
        })
    }

    /// Write one register group.
    pub fn write_config<G: Writable>(&mut self, config: &G) -> Result<(), T::Error> {
        self.write(G::GROUP.base(), &config.to_bytes())
    }

    /// Read one register group into `config`.
    ///
    /// On a short read the bytes that were not received keep their value from `config`.
    pub fn read_config<G: Group>(&mut self, config: &mut G) -> Result<(), T::Error> {
        let mut buf = config.to_bytes();
        self.read(G::GROUP.base(), &mut buf)?;
        *config = G::from_bytes(buf);
        Ok(())
    }

    pub fn read_status(&mut self, status: &mut InputStatus) -> Result<(), T::Error> {
        self.read_config(status)
    }

    /// Write mode, output and polarity configuration, in this order.
    ///
    /// These are three separate transfers.  On failure the remaining groups are skipped and the
    /// failing group is reported, see [`ConfigError`].
    pub fn write_all_config(&mut self, config: &Config) -> Result<(), ConfigError<T::Error>> {
        self.write_config(&config.mode)
            .map_err(|e| ConfigError::new(RegisterGroup::Mode, e))?;
        self.write_config(&config.output)
            .map_err(|e| ConfigError::new(RegisterGroup::Output, e))?;
        self.write_config(&config.polarity)
            .map_err(|e| ConfigError::new(RegisterGroup::Polarity, e))?;
        Ok(())
    }

    /// Read mode, output and polarity configuration, in this order.
    ///
    /// Groups after a failing one are not read and keep their previous value in `config`.
    pub fn read_all_config(&mut self, config: &mut Config) -> Result<(), ConfigError<T::Error>> {
        self.read_config(&mut config.mode)
            .map_err(|e| ConfigError::new(RegisterGroup::Mode, e))?;
        self.read_config(&mut config.output)
            .map_err(|e| ConfigError::new(RegisterGroup::Output, e))?;
        self.read_config(&mut config.polarity)
            .map_err(|e| ConfigError::new(RegisterGroup::Polarity, e))?;
        Ok(())
    }

    pub fn get_config(&mut self) -> Result<Config, ConfigError<T::Error>> {
        let mut config = Config::default();
        self.read_all_config(&mut config)?;
        Ok(config)
    }

    pub fn get_mode_config(&mut self) -> Result<ModeConfig, T::Error> {
        self.get()
    }

    pub fn get_output_config(&mut self) -> Result<OutputConfig, T::Error> {
        self.get()
    }

    pub fn get_polarity_config(&mut self) -> Result<PolarityConfig, T::Error> {
        self.get()
    }

    /// Sample all inputs.
    pub fn get_input_status(&mut self) -> Result<InputStatus, T::Error> {
        self.get()
    }

    fn get<G: Group + Default>(&mut self) -> Result<G, T::Error> {
        let mut config = G::default();
        self.read_config(&mut config)?;
        Ok(config)
    }
}
