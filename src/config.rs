//! Configuration primitives for the TSL2591 driver.

use crate::registers::{
    command_byte,
    REG_CONTROL,
    REG_DATA0LOW,
    REG_DATA1LOW,
    REG_ID,
    REG_TIMING,
};

/// User-facing configuration for the TSL2591 sensor.
///
/// The five command bytes are transmitted exactly as supplied; they are not
/// checked against the hardware register map. Hosts that expose the
/// `i2c_bus_num`/`chip_*` schema map each key onto the matching field here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Bus identifier the host binds the transport to (`i2c_bus_num`).
    pub i2c_bus: u8,
    /// Command byte addressing the power-on register (`chip_on`).
    pub power_on: u8,
    /// Command byte addressing the calibration register (`chip_calib`).
    pub calibration: u8,
    /// Command byte addressing the diode-1 data block (`chip_diode1`).
    pub diode1: u8,
    /// Command byte addressing the diode-2 data block (`chip_diode2`).
    pub diode2: u8,
    /// Command byte addressing the part-number register (`chip_pn_id`).
    pub part_number: u8,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the bus identifier.
    pub fn i2c_bus(mut self, i2c_bus: u8) -> Self {
        self.config.i2c_bus = i2c_bus;
        self
    }

    /// Overrides the power-on command byte.
    pub fn power_on(mut self, power_on: u8) -> Self {
        self.config.power_on = power_on;
        self
    }

    /// Overrides the calibration command byte.
    pub fn calibration(mut self, calibration: u8) -> Self {
        self.config.calibration = calibration;
        self
    }

    /// Overrides the diode-1 data command byte.
    pub fn diode1(mut self, diode1: u8) -> Self {
        self.config.diode1 = diode1;
        self
    }

    /// Overrides the diode-2 data command byte.
    pub fn diode2(mut self, diode2: u8) -> Self {
        self.config.diode2 = diode2;
        self
    }

    /// Overrides the part-number command byte.
    pub fn part_number(mut self, part_number: u8) -> Self {
        self.config.part_number = part_number;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            i2c_bus: 1,
            power_on: command_byte(REG_CONTROL),
            calibration: command_byte(REG_TIMING),
            diode1: command_byte(REG_DATA0LOW),
            diode2: command_byte(REG_DATA1LOW),
            part_number: command_byte(REG_ID),
        }
    }
}
