//! Strongly typed parameter enumerations for the TSL2591 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! the register map in [`registers`](crate::registers). Prefer these types
//! over raw integers to keep register values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use tsl2591::params::{Gain, IntegrationTime, Power};
//!
//! let gain = Gain::X1;
//! let integ = IntegrationTime::Ms402;
//! let power = Power::On;
//! let _ = (gain, integ, power);
//! ```

use modular_bitfield::prelude::Specifier;

/// ADC power states encoded in `CONTROL[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum Power {
    /// Device powered down.
    Off = 0b00,
    /// Device powered up, ADCs running.
    On = 0b11,
}

/// Analog gain selections encoded in `TIMING.GAIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum Gain {
    /// 1x nominal gain.
    X1 = 0,
    /// 16x high gain.
    X16 = 1,
}

impl Gain {
    /// Returns the gain as a plain multiplier.
    pub const fn multiplier(self) -> u8 {
        match self {
            Self::X1 => 1,
            Self::X16 => 16,
        }
    }
}

/// ADC integration window selections encoded in `TIMING[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum IntegrationTime {
    /// 13.7 ms integration window.
    Ms13 = 0b00,
    /// 101 ms integration window.
    Ms101 = 0b01,
    /// 402 ms integration window.
    Ms402 = 0b10,
}

impl IntegrationTime {
    /// Returns the nominal integration window in milliseconds.
    pub const fn millis(self) -> f32 {
        match self {
            Self::Ms13 => 13.7,
            Self::Ms101 => 101.0,
            Self::Ms402 => 402.0,
        }
    }
}
