use std::{fs, path::Path};

use log::debug;

use crate::{
    error::{Error, Result},
    literal,
};

/// Largest 8-bit intensity, used to scale inputs into `[0, 1]` and back.
const MAX_INTENSITY: f64 = 255.0;

/// Number of decimal places kept for each entry in the table.
pub const PRECISION: u32 = 5;

/// Gamma correction lookup table.
#[derive(Debug, Clone)]
pub struct GammaTable {
    #[doc(hidden)]
    low: i32,
    #[doc(hidden)]
    table: Vec<f64>,
}

impl GammaTable {
    /// Build the table for every integer input in `[low, high]`. Each entry is
    /// `(i / 255)^gamma * 255`, rounded to [PRECISION] decimal places.
    pub fn generate(low: i32, high: i32, gamma: f64) -> Result<Self> {
        if !gamma.is_finite() || gamma <= 0.0 {
            return Err(Error::InvalidGamma(gamma));
        }

        // Negative inputs only have a real power for whole exponents.
        if low > high || (low < 0 && gamma.fract() != 0.0) {
            return Err(Error::InvalidRange { low, high });
        }

        let table = (low..=high)
            .map(|index| {
                let f = (f64::from(index) / MAX_INTENSITY).powf(gamma);
                literal::round_to(f * MAX_INTENSITY, PRECISION)
            })
            .collect::<Vec<_>>();

        debug!(
            "gamma table [{}, {}] ^ {} has {} entries",
            low,
            high,
            gamma,
            table.len()
        );

        Ok(Self { low, table })
    }

    /// All of the corrected values, in ascending order of input.
    pub fn values(&self) -> &[f64] {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Get the gamma corrected value for an input, or `None` if it falls
    /// outside the range the table was built for.
    pub fn get(&self, input: i32) -> Option<f64> {
        let offset = usize::try_from(input.checked_sub(self.low)?).ok()?;
        self.table.get(offset).copied()
    }

    /// Render the table as a `", "` separated list of `<value>f` literals.
    pub fn to_literal(&self) -> String {
        literal::join_literals(self.table.iter().copied())
    }

    /// Write the literal list to `path`, replacing anything already there.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_literal())?;
        Ok(())
    }
}
