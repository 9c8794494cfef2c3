//! Wire frame layouts for the 16-bit SPI protocol.

use crate::{register::Register, utils};

bitfield::bitfield! {
    /// Command frame
    ///
    /// Sent first in every transaction to select a register address and a
    /// read or write intent.
    pub struct CommandFrame(u16);
    impl Debug;
    u16;
    /// Register address
    pub address, set_address: 13, 0;
    /// Read/write flag: 1 = read, 0 = write
    pub rw, set_rw: 14;
    /// Odd parity over bits 0-14
    pub parity, set_parity: 15;
}

impl CommandFrame {
    /// Build a read command for the given register address
    #[must_use]
    pub fn read(address: u16) -> Self {
        Self::build(address, true)
    }

    /// Build a write command for the given register address
    #[must_use]
    pub fn write(address: u16) -> Self {
        Self::build(address, false)
    }

    /// The no-op read command used to pump a pipelined response off the bus
    #[must_use]
    pub fn nop() -> Self {
        Self::read(u16::from(Register::Nop))
    }

    fn build(address: u16, read: bool) -> Self {
        let mut frame = Self(0);
        frame.set_address(address);
        frame.set_rw(read);
        frame.set_parity(utils::calculate_parity(frame.0));
        frame
    }

    /// Raw wire representation
    #[must_use]
    pub fn raw(&self) -> u16 {
        self.0
    }
}

bitfield::bitfield! {
    /// Data frame received from the sensor
    ///
    /// The error flag reports a sensor-side fault (for instance a rejected
    /// previous command); the parity bit is the sensor's and must be checked
    /// by the receiver.
    pub struct ReadDataFrame(u16);
    impl Debug;
    u16;
    /// Register payload
    pub data, _: 13, 0;
    /// Sensor-reported error flag
    pub error_flag, _: 14;
    /// Odd parity over bits 0-14, as received
    pub parity, _: 15;
}

impl ReadDataFrame {
    /// Check the received parity bit against the rest of the frame
    #[must_use]
    pub fn parity_ok(&self) -> bool {
        utils::verify_parity(self.0)
    }

    /// Raw wire representation
    #[must_use]
    pub fn raw(&self) -> u16 {
        self.0
    }
}

impl From<u16> for ReadDataFrame {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

bitfield::bitfield! {
    /// Data frame sent to the sensor during a register write
    pub struct WriteDataFrame(u16);
    impl Debug;
    u16;
    /// Register payload
    pub data, set_data: 13, 0;
    /// Reserved, transmitted low
    pub low, set_low: 14;
    /// Odd parity over bits 0-14
    pub parity, set_parity: 15;
}

impl WriteDataFrame {
    /// Build a data frame carrying `value`, truncated to 14 bits
    #[must_use]
    pub fn new(value: u16) -> Self {
        let mut frame = Self(0);
        frame.set_data(value);
        frame.set_parity(utils::calculate_parity(frame.0));
        frame
    }

    /// Raw wire representation
    #[must_use]
    pub fn raw(&self) -> u16 {
        self.0
    }
}
