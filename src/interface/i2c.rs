//! I2C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::{I2c, SevenBitAddress};

use super::Tsl2591Interface;
use crate::registers::DEFAULT_ADDRESS;

/// I2C-based interface implementation for the TSL2591 driver.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: SevenBitAddress,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface from the provided I2C bus abstraction.
    pub const fn new(i2c: I2C, address: SevenBitAddress) -> Self {
        Self { i2c, address }
    }

    /// Creates a new interface bound to the factory-default device address.
    pub const fn with_default_address(i2c: I2C) -> Self {
        Self::new(i2c, DEFAULT_ADDRESS)
    }

    /// Returns the 7-bit device address this interface is bound to.
    pub const fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Provides mutable access to the wrapped I2C bus.
    pub fn bus_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Tsl2591Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        self.i2c.write(self.address, &[register])?;
        // SMBus-style writes have no payload to return; echo the command byte.
        Ok(register)
    }

    fn read_block(&mut self, register: u8) -> core::result::Result<[u8; 2], Self::Error> {
        let mut block = [0u8; 2];
        self.i2c.write_read(self.address, &[register], &mut block)?;
        Ok(block)
    }

    fn read_byte(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.i2c.write_read(self.address, &[register], &mut value)?;
        Ok(value[0])
    }
}
