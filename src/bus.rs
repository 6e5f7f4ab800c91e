use embedded_hal::i2c as hal_i2c;

/// Byte-level bus transport the driver talks through.
///
/// This is the classic "begin / write / end, then request / read" model of a two-wire bus
/// controller.  Bytes written between [`begin_transaction()`][Transport::begin_transaction] and
/// [`end_transaction()`][Transport::end_transaction] form one transfer; the transport is free to
/// buffer them, but any failure on the way must be reported by `end_transaction()`.
pub trait Transport {
    type Error;

    /// Start a write transfer to the device at the 7-bit `address`.
    fn begin_transaction(&mut self, address: u8);

    /// Queue one byte of the current write transfer.
    fn write_byte(&mut self, byte: u8);

    /// Finish the current write transfer and report its completion status.
    fn end_transaction(&mut self) -> Result<(), Self::Error>;

    /// Read up to `count` bytes from the device at `address`.
    ///
    /// The received bytes are then drained using [`read_byte()`][Transport::read_byte].  A
    /// transport may deliver fewer bytes than requested.
    fn request_bytes(&mut self, address: u8, count: usize) -> Result<(), Self::Error>;

    /// Number of received bytes not yet drained.
    fn bytes_available(&self) -> usize;

    /// Next received byte, if any.
    fn read_byte(&mut self) -> Option<u8>;
}

/// Capacity of the write phase: one register byte plus the whole 8-byte register map.
pub(crate) const TX_CAPACITY: usize = 9;
/// Capacity of the read phase: the whole 8-byte register map.
pub(crate) const RX_CAPACITY: usize = 8;

/// Errors of the [`I2cTransport`] adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError<E> {
    /// The underlying I2C bus failed.
    Bus(E),
    /// A transfer did not fit the adapter's fixed buffers.
    BufferOverflow,
}

impl<E> From<E> for TransportError<E> {
    fn from(e: E) -> Self {
        TransportError::Bus(e)
    }
}

impl<E: hal_i2c::Error> hal_i2c::Error for TransportError<E> {
    fn kind(&self) -> hal_i2c::ErrorKind {
        match self {
            TransportError::Bus(e) => e.kind(),
            TransportError::BufferOverflow => hal_i2c::ErrorKind::Other,
        }
    }
}

/// [`Transport`] on top of an `embedded-hal` I2C bus.
///
/// The write phase is collected and sent as a single `write()` when the transaction ends.  A
/// request is performed immediately as a single `read()` of exactly the requested length.
pub struct I2cTransport<I2C> {
    i2c: I2C,
    address: u8,
    tx: heapless::Vec<u8, TX_CAPACITY>,
    tx_overflow: bool,
    rx: heapless::Vec<u8, RX_CAPACITY>,
    rx_pos: usize,
}

impl<I2C> I2cTransport<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: 0,
            tx: heapless::Vec::new(),
            tx_overflow: false,
            rx: heapless::Vec::new(),
            rx_pos: 0,
        }
    }

    /// Give back the wrapped bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: hal_i2c::I2c> Transport for I2cTransport<I2C> {
    type Error = TransportError<I2C::Error>;

    fn begin_transaction(&mut self, address: u8) {
        self.address = address;
        self.tx.clear();
        self.tx_overflow = false;
    }

    fn write_byte(&mut self, byte: u8) {
        if self.tx.push(byte).is_err() {
            self.tx_overflow = true;
        }
    }

    fn end_transaction(&mut self) -> Result<(), Self::Error> {
        if self.tx_overflow {
            return Err(TransportError::BufferOverflow);
        }
        self.i2c.write(self.address, &self.tx)?;
        Ok(())
    }

    fn request_bytes(&mut self, address: u8, count: usize) -> Result<(), Self::Error> {
        self.rx.clear();
        self.rx_pos = 0;
        if count > RX_CAPACITY {
            return Err(TransportError::BufferOverflow);
        }
        // cannot fail, count is within capacity
        let _ = self.rx.resize_default(count);
        if let Err(e) = self.i2c.read(address, &mut self.rx) {
            self.rx.clear();
            return Err(e.into());
        }
        Ok(())
    }

    fn bytes_available(&self) -> usize {
        self.rx.len() - self.rx_pos
    }

    fn read_byte(&mut self) -> Option<u8> {
        let byte = self.rx.get(self.rx_pos).copied()?;
        self.rx_pos += 1;
        Some(byte)
    }
}
