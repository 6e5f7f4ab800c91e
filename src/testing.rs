//! Register-level model of a TCA9555 for exercising the transaction layer.
use crate::bus::Transport;
use std::collections::VecDeque;

/// Non-zero completion status returned by [`MockChip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError(pub u8);

/// Status code for an address NACK.
pub const NACK: MockError = MockError(2);
/// Status code used for injected failures.
pub const INJECTED: MockError = MockError(4);

pub struct MockChip {
    pub address: u8,
    /// Levels applied to the pins from the outside.
    pub pins: u16,
    output: [u8; 2],
    polarity: [u8; 2],
    mode: [u8; 2],
    pointer: u8,
    target: Option<u8>,
    tx: Vec<u8>,
    rx: VecDeque<u8>,
    ends: usize,
    /// `end_transaction()` calls (counted from 0) that should fail.
    pub fail_ends: Vec<usize>,
    /// Deliver at most this many bytes per request.
    pub short_read: Option<usize>,
    pub fail_requests: bool,
    /// Every completed write transfer, address byte included.
    pub writes: Vec<Vec<u8>>,
}

impl MockChip {
    pub fn new(address: u8) -> Self {
        Self {
            address,
            pins: 0,
            output: [0xff; 2],
            polarity: [0x00; 2],
            mode: [0xff; 2],
            pointer: 0,
            target: None,
            tx: Vec::new(),
            rx: VecDeque::new(),
            ends: 0,
            fail_ends: Vec::new(),
            short_read: None,
            fail_requests: false,
            writes: Vec::new(),
        }
    }

    pub fn register(&self, reg: u8) -> u8 {
        let port = (reg & 1) as usize;
        match reg & 0x06 {
            0x00 => {
                let mode = u16::from_le_bytes(self.mode);
                let output = u16::from_le_bytes(self.output);
                let level = (self.pins & mode) | (output & !mode);
                (level ^ u16::from_le_bytes(self.polarity)).to_le_bytes()[port]
            }
            0x02 => self.output[port],
            0x04 => self.polarity[port],
            _ => self.mode[port],
        }
    }

    fn store(&mut self, reg: u8, value: u8) {
        let port = (reg & 1) as usize;
        match reg & 0x06 {
            // input registers are read-only
            0x00 => (),
            0x02 => self.output[port] = value,
            0x04 => self.polarity[port] = value,
            _ => self.mode[port] = value,
        }
    }

    // The pointer toggles within a register pair.
    fn advance(&mut self) {
        self.pointer ^= 1;
    }
}

impl Transport for MockChip {
    type Error = MockError;

    fn begin_transaction(&mut self, address: u8) {
        self.target = Some(address);
        self.tx.clear();
    }

    fn write_byte(&mut self, byte: u8) {
        self.tx.push(byte);
    }

    fn end_transaction(&mut self) -> Result<(), Self::Error> {
        let n = self.ends;
        self.ends += 1;
        if self.target.take() != Some(self.address) {
            return Err(NACK);
        }
        if self.fail_ends.contains(&n) {
            return Err(INJECTED);
        }
        let tx = core::mem::take(&mut self.tx);
        if let Some((&reg, data)) = tx.split_first() {
            self.pointer = reg & 0x07;
            for &b in data {
                self.store(self.pointer, b);
                self.advance();
            }
        }
        self.writes.push(tx);
        Ok(())
    }

    fn request_bytes(&mut self, address: u8, count: usize) -> Result<(), Self::Error> {
        self.rx.clear();
        if address != self.address {
            return Err(NACK);
        }
        if self.fail_requests {
            return Err(INJECTED);
        }
        let count = self.short_read.map_or(count, |max| count.min(max));
        for _ in 0..count {
            let b = self.register(self.pointer);
            self.rx.push_back(b);
            self.advance();
        }
        Ok(())
    }

    fn bytes_available(&self) -> usize {
        self.rx.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }
}
