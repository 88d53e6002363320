//! Register map definitions for the TSL2591-family light sensor.

use modular_bitfield::prelude::*;

use crate::params::{Gain, IntegrationTime, Power};

/// Factory-default 7-bit I2C device address.
pub const DEFAULT_ADDRESS: u8 = 0x39;

/// Command bit that must be set to address the register map.
pub const COMMAND_BIT: u8 = 0x80;

/// Register address of `CONTROL`.
pub const REG_CONTROL: u8 = 0x00;
/// Register address of `TIMING`.
pub const REG_TIMING: u8 = 0x01;
/// Register address of `THRESHLOWLOW`.
pub const REG_THRESHLOWLOW: u8 = 0x02;
/// Register address of `THRESHLOWHIGH`.
pub const REG_THRESHLOWHIGH: u8 = 0x03;
/// Register address of `THRESHHIGHLOW`.
pub const REG_THRESHHIGHLOW: u8 = 0x04;
/// Register address of `THRESHHIGHHIGH`.
pub const REG_THRESHHIGHHIGH: u8 = 0x05;
/// Register address of `INTERRUPT`.
pub const REG_INTERRUPT: u8 = 0x06;
/// Register address of `ID`.
pub const REG_ID: u8 = 0x0A;
/// Register address of `DATA0LOW` (visible + infrared channel, low byte).
pub const REG_DATA0LOW: u8 = 0x0C;
/// Register address of `DATA0HIGH` (visible + infrared channel, high byte).
pub const REG_DATA0HIGH: u8 = 0x0D;
/// Register address of `DATA1LOW` (infrared channel, low byte).
pub const REG_DATA1LOW: u8 = 0x0E;
/// Register address of `DATA1HIGH` (infrared channel, high byte).
pub const REG_DATA1HIGH: u8 = 0x0F;

/// `CONTROL` value that powers the device up.
pub const POWER_UP_COMMAND: u8 = 0x03;
/// `CONTROL` value that powers the device down.
pub const POWER_DOWN_COMMAND: u8 = 0x00;
/// `TIMING` value selecting 1x gain and the 402 ms integration window.
pub const TIMING_DEFAULT_COMMAND: u8 = 0x02;

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Write-only register.
    WriteOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Raw storage backing the register payload.
    type Raw: Copy;
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Optional reset/default value defined by the datasheet.
    const RESET_VALUE: Option<Self::Raw>;
}

/// Bitfield representation of the `CONTROL` register (address `0x00`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    // ADC power state (bits 1:0).
    pub power: Power,
    #[skip]
    __: B6,
}

impl From<u8> for Control {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Control> for u8 {
    fn from(value: Control) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `TIMING` register (address `0x01`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    // Integration window selection (bits 1:0).
    pub integration: IntegrationTime,
    #[skip]
    __: B1,
    // Manual integration cycle control (bit 3).
    pub manual: bool,
    // Analog gain selection (bit 4).
    pub gain: Gain,
    #[skip]
    __: B3,
}

impl From<u8> for Timing {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Timing> for u8 {
    fn from(value: Timing) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `ID` register (address `0x0A`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartId {
    // Revision number identification (bits 3:0).
    pub rev_no: B4,
    // Part number identification (bits 7:4).
    pub part_no: B4,
}

impl From<u8> for PartId {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<PartId> for u8 {
    fn from(value: PartId) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for Control {
    type Raw = u8;
    const ADDRESS: u8 = REG_CONTROL;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

impl Register for Timing {
    type Raw = u8;
    const ADDRESS: u8 = REG_TIMING;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x02);
}

impl Register for PartId {
    type Raw = u8;
    const ADDRESS: u8 = REG_ID;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = None;
}

/// Builds the command byte addressing the given register.
pub const fn command_byte(register: u8) -> u8 {
    COMMAND_BIT | register
}
