//! Measurement data types and channel arithmetic.

/// Raw register state captured by the one-time setup sequence.
///
/// The two diode blocks hold the photodiode counts in little-endian byte
/// order: diode 1 is the broadband (visible + infrared) channel, diode 2 the
/// infrared-only channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawReading {
    /// Status/echo returned by the power-on write.
    pub on: u8,
    /// Status/echo returned by the calibration write.
    pub calib: u8,
    /// Diode-1 count bytes, low byte first.
    pub diode1: [u8; 2],
    /// Diode-2 count bytes, low byte first.
    pub diode2: [u8; 2],
    /// Part-number identification byte.
    pub pn_id: u8,
}

impl RawReading {
    /// Combined diode-1 count (visible + infrared).
    pub fn full_spectrum(&self) -> u16 {
        u16::from_le_bytes(self.diode1)
    }

    /// Combined diode-2 count (infrared only).
    pub fn infrared(&self) -> u16 {
        u16::from_le_bytes(self.diode2)
    }

    /// Visible-light portion, full spectrum minus infrared.
    ///
    /// Not clamped: a noisy reading where the infrared channel exceeds the
    /// broadband channel yields a negative count.
    pub fn visible(&self) -> i32 {
        self.full_spectrum() as i32 - self.infrared() as i32
    }

    /// Infrared over full-spectrum channel ratio.
    ///
    /// This is the quotient of the raw counts, uncompensated for gain or
    /// integration time; treat it as a relative brightness figure rather
    /// than an SI illuminance. Returns `None` when the full-spectrum channel
    /// reads zero, where the ratio is undefined.
    pub fn lux(&self) -> Option<f32> {
        let full = self.full_spectrum();
        if full == 0 {
            return None;
        }
        Some(self.infrared() as f32 / full as f32)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RawReading {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "RawReading {{ on: {}, calib: {}, diode1: {}, diode2: {}, pn_id: {} }}",
            self.on,
            self.calib,
            self.diode1,
            self.diode2,
            self.pn_id
        );
    }
}

/// Output quantity requested from a cached reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeasurementKind {
    /// The cached part-number byte and diode blocks, unprocessed.
    RawLuminosity,
    /// Broadband channel count.
    FullSpectrum,
    /// Infrared channel count.
    Infrared,
    /// Visible-light count.
    Visible,
    /// Channel ratio, see [`RawReading::lux`].
    #[default]
    Lux,
}

impl MeasurementKind {
    /// Parses a host schema selector name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "raw_luminosity" => Some(Self::RawLuminosity),
            "full_spectrum" => Some(Self::FullSpectrum),
            "infrared" => Some(Self::Infrared),
            "visible" => Some(Self::Visible),
            "lux" => Some(Self::Lux),
            _ => None,
        }
    }

    /// Returns the host schema name of this selector.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RawLuminosity => "raw_luminosity",
            Self::FullSpectrum => "full_spectrum",
            Self::Infrared => "infrared",
            Self::Visible => "visible",
            Self::Lux => "lux",
        }
    }
}

/// A derived output value, tagged by the selector that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    /// Cached raw state: part-number byte plus both diode blocks.
    Raw {
        /// Part-number identification byte.
        pn_id: u8,
        /// Diode-1 count bytes, low byte first.
        diode1: [u8; 2],
        /// Diode-2 count bytes, low byte first.
        diode2: [u8; 2],
    },
    /// Broadband channel count.
    FullSpectrum(u16),
    /// Infrared channel count.
    Infrared(u16),
    /// Visible-light count, possibly negative.
    Visible(i32),
    /// Channel ratio.
    Lux(f32),
}
