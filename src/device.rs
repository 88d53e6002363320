//! High-level TSL2591 device driver implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::i2c::I2cInterface;
use crate::interface::Tsl2591Interface;
use crate::reading::{Measurement, MeasurementKind, RawReading};
use crate::registers::PartId;
use embedded_hal::i2c::{I2c, SevenBitAddress};

/// High-level synchronous driver for the TSL2591 light sensor.
///
/// The driver captures one raw snapshot during [`setup`](Tsl2591::setup) and
/// serves every subsequent [`value`](Tsl2591::value) request from that cache
/// without further bus traffic. Serializing access across sensors sharing a
/// physical bus is the caller's responsibility.
pub struct Tsl2591<IFACE> {
    interface: IFACE,
    config: Config,
    reading: Option<RawReading>,
}

impl<IFACE> Tsl2591<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    pub fn new(interface: IFACE, config: Config) -> Self {
        Self {
            interface,
            config,
            reading: None,
        }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> (IFACE, Config) {
        (self.interface, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a mutable reference to the active configuration.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Returns the cached raw snapshot, if setup has completed.
    pub fn reading(&self) -> Option<&RawReading> {
        self.reading.as_ref()
    }
}

impl<I2C> Tsl2591<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I2C transports.
    pub fn new_i2c(i2c: I2C, address: SevenBitAddress, config: Config) -> Self {
        Self::new(I2cInterface::new(i2c, address), config)
    }

    /// Releases the driver, returning the I2C bus and configuration.
    pub fn release_i2c(self) -> (I2C, Config) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<IFACE, CommE> Tsl2591<IFACE>
where
    IFACE: Tsl2591Interface<Error = CommE>,
{
    // ==================================================================
    // == Initialization ================================================
    // ==================================================================
    /// Runs the one-time initialization sequence and caches the results.
    ///
    /// Issues, in order: the power-on write, the calibration write, the two
    /// diode block reads, and the part-number byte read. The cache is only
    /// installed once all five transactions have succeeded; a failure at any
    /// step propagates the transport error and leaves the driver without a
    /// snapshot, so [`value`](Tsl2591::value) keeps failing with
    /// [`Error::NotReady`]. The host calls this once per driver instance.
    pub fn setup(&mut self) -> Result<(), CommE> {
        let on = self
            .interface
            .write_register(self.config.power_on)
            .map_err(Error::from)?;
        let calib = self
            .interface
            .write_register(self.config.calibration)
            .map_err(Error::from)?;
        let diode1 = self
            .interface
            .read_block(self.config.diode1)
            .map_err(Error::from)?;
        let diode2 = self
            .interface
            .read_block(self.config.diode2)
            .map_err(Error::from)?;
        let pn_id = self
            .interface
            .read_byte(self.config.part_number)
            .map_err(Error::from)?;

        self.reading = Some(RawReading {
            on,
            calib,
            diode1,
            diode2,
            pn_id,
        });
        Ok(())
    }

    // ==================================================================
    // == Value Derivation ==============================================
    // ==================================================================
    /// Derives the requested output quantity from the cached snapshot.
    ///
    /// Pure over the cache: no bus I/O, and repeated calls with the same
    /// selector return identical output. The lux ratio fails with
    /// [`Error::ZeroFullSpectrum`] when the broadband channel reads zero
    /// rather than producing a non-finite value.
    pub fn value(&self, kind: MeasurementKind) -> Result<Measurement, CommE> {
        let reading = self.reading.as_ref().ok_or(Error::NotReady)?;

        Ok(match kind {
            MeasurementKind::RawLuminosity => Measurement::Raw {
                pn_id: reading.pn_id,
                diode1: reading.diode1,
                diode2: reading.diode2,
            },
            MeasurementKind::FullSpectrum => Measurement::FullSpectrum(reading.full_spectrum()),
            MeasurementKind::Infrared => Measurement::Infrared(reading.infrared()),
            MeasurementKind::Visible => Measurement::Visible(reading.visible()),
            MeasurementKind::Lux => {
                Measurement::Lux(reading.lux().ok_or(Error::ZeroFullSpectrum)?)
            }
        })
    }

    // ==================================================================
    // == Identification ================================================
    // ==================================================================
    /// Decodes the cached part-number byte into its identification fields.
    pub fn part_id(&self) -> Result<PartId, CommE> {
        let reading = self.reading.as_ref().ok_or(Error::NotReady)?;
        Ok(PartId::from(reading.pn_id))
    }
}

#[cfg(test)]
mod tests {
    use super::Tsl2591;
    use crate::config::Config;
    use crate::error::Error;
    use crate::interface::Tsl2591Interface;
    use crate::reading::{Measurement, MeasurementKind};

    /// Scripted fake transport recording every transaction it serves.
    struct FakeInterface {
        diode1: [u8; 2],
        diode2: [u8; 2],
        pn_id: u8,
        blocks_served: usize,
        /// Transaction at which to inject a failure, if any.
        fail_at: Option<usize>,
        log: Vec<(&'static str, u8)>,
    }

    impl FakeInterface {
        fn new(diode1: [u8; 2], diode2: [u8; 2], pn_id: u8) -> Self {
            Self {
                diode1,
                diode2,
                pn_id,
                blocks_served: 0,
                fail_at: None,
                log: Vec::new(),
            }
        }

        fn failing_at(mut self, transaction: usize) -> Self {
            self.fail_at = Some(transaction);
            self
        }

        fn step(&mut self, op: &'static str, register: u8) -> Result<(), ()> {
            if self.fail_at == Some(self.log.len()) {
                return Err(());
            }
            self.log.push((op, register));
            Ok(())
        }
    }

    impl Tsl2591Interface for FakeInterface {
        type Error = ();

        fn write_register(&mut self, register: u8) -> Result<u8, ()> {
            self.step("write", register)?;
            Ok(register)
        }

        fn read_block(&mut self, register: u8) -> Result<[u8; 2], ()> {
            self.step("block", register)?;
            // First block read serves diode 1, the second diode 2.
            let served = self.blocks_served;
            self.blocks_served += 1;
            Ok(if served == 0 { self.diode1 } else { self.diode2 })
        }

        fn read_byte(&mut self, register: u8) -> Result<u8, ()> {
            self.step("byte", register)?;
            Ok(self.pn_id)
        }
    }

    fn lit_driver() -> Tsl2591<FakeInterface> {
        let mut driver = Tsl2591::new(
            FakeInterface::new([0x10, 0x00], [0x08, 0x00], 0x50),
            Config::default(),
        );
        driver.setup().unwrap();
        driver
    }

    #[test]
    fn setup_issues_five_transactions_in_order() {
        let driver = lit_driver();
        assert_eq!(
            driver.interface.log,
            vec![
                ("write", 0x80),
                ("write", 0x81),
                ("block", 0x8C),
                ("block", 0x8E),
                ("byte", 0x8A),
            ]
        );

        let reading = driver.reading().unwrap();
        assert_eq!(reading.on, 0x80);
        assert_eq!(reading.calib, 0x81);
        assert_eq!(reading.diode1, [0x10, 0x00]);
        assert_eq!(reading.diode2, [0x08, 0x00]);
        assert_eq!(reading.pn_id, 0x50);
    }

    #[test]
    fn setup_respects_configured_command_bytes() {
        let config = Config::new()
            .power_on(0xA0)
            .calibration(0xA1)
            .diode1(0xB4)
            .diode2(0xB6)
            .part_number(0xB2)
            .build();
        let mut driver = Tsl2591::new(FakeInterface::new([0, 0], [0, 0], 0), config);
        driver.setup().unwrap();

        assert_eq!(
            driver.interface.log,
            vec![
                ("write", 0xA0),
                ("write", 0xA1),
                ("block", 0xB4),
                ("block", 0xB6),
                ("byte", 0xB2),
            ]
        );
    }

    #[test]
    fn value_derives_all_scalar_quantities() {
        let driver = lit_driver();

        assert_eq!(
            driver.value(MeasurementKind::FullSpectrum),
            Ok(Measurement::FullSpectrum(16))
        );
        assert_eq!(
            driver.value(MeasurementKind::Infrared),
            Ok(Measurement::Infrared(8))
        );
        assert_eq!(
            driver.value(MeasurementKind::Visible),
            Ok(Measurement::Visible(8))
        );
        assert_eq!(driver.value(MeasurementKind::Lux), Ok(Measurement::Lux(0.5)));
    }

    #[test]
    fn raw_luminosity_returns_cached_bytes_verbatim() {
        let driver = lit_driver();

        assert_eq!(
            driver.value(MeasurementKind::RawLuminosity),
            Ok(Measurement::Raw {
                pn_id: 0x50,
                diode1: [0x10, 0x00],
                diode2: [0x08, 0x00],
            })
        );
    }

    #[test]
    fn visible_may_go_negative() {
        let mut driver = Tsl2591::new(
            FakeInterface::new([0x08, 0x00], [0x10, 0x00], 0x50),
            Config::default(),
        );
        driver.setup().unwrap();

        assert_eq!(
            driver.value(MeasurementKind::Visible),
            Ok(Measurement::Visible(-8))
        );
    }

    #[test]
    fn lux_fails_on_zero_full_spectrum() {
        let mut driver = Tsl2591::new(
            FakeInterface::new([0x00, 0x00], [0x08, 0x00], 0x50),
            Config::default(),
        );
        driver.setup().unwrap();

        assert_eq!(
            driver.value(MeasurementKind::Lux),
            Err(Error::ZeroFullSpectrum)
        );
        // Other selectors stay usable against the same snapshot.
        assert_eq!(
            driver.value(MeasurementKind::Visible),
            Ok(Measurement::Visible(-8))
        );
    }

    #[test]
    fn value_is_idempotent_and_issues_no_bus_traffic() {
        let driver = lit_driver();
        let transactions = driver.interface.log.len();

        let first = driver.value(MeasurementKind::Lux);
        let second = driver.value(MeasurementKind::Lux);
        assert_eq!(first, second);
        assert_eq!(driver.interface.log.len(), transactions);
    }

    #[test]
    fn value_before_setup_is_not_ready() {
        let driver = Tsl2591::new(
            FakeInterface::new([0x10, 0x00], [0x08, 0x00], 0x50),
            Config::default(),
        );

        assert_eq!(driver.value(MeasurementKind::Lux), Err(Error::NotReady));
        assert_eq!(driver.part_id(), Err(Error::NotReady));
    }

    #[test]
    fn failed_setup_leaves_no_partial_snapshot() {
        for failing_transaction in 0..5 {
            let mut driver = Tsl2591::new(
                FakeInterface::new([0x10, 0x00], [0x08, 0x00], 0x50)
                    .failing_at(failing_transaction),
                Config::default(),
            );

            assert_eq!(driver.setup(), Err(Error::Interface(())));
            // The failing step aborts the sequence immediately.
            assert_eq!(driver.interface.log.len(), failing_transaction);
            assert!(driver.reading().is_none());
            assert_eq!(
                driver.value(MeasurementKind::FullSpectrum),
                Err(Error::NotReady)
            );
        }
    }

    #[test]
    fn part_id_decodes_cached_byte() {
        let driver = lit_driver();
        let id = driver.part_id().unwrap();
        assert_eq!(id.part_no(), 0x5);
        assert_eq!(id.rev_no(), 0x0);
    }
}
