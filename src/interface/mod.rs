//! Bus interface abstraction for the TSL2591 driver.

pub mod i2c;

/// Abstraction over the low-level bus access required by the driver.
///
/// Register arguments are transmitted verbatim; callers supply fully formed
/// command bytes (command bit included) and no masking is applied here.
pub trait Tsl2591Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Issues a write-style transaction addressing a register.
    ///
    /// Returns an integer status/echo describing the completed write.
    fn write_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error>;

    /// Reads a fixed two-byte block starting at a register.
    fn read_block(&mut self, register: u8) -> core::result::Result<[u8; 2], Self::Error>;

    /// Reads a single byte from a register.
    fn read_byte(&mut self, register: u8) -> core::result::Result<u8, Self::Error>;
}
