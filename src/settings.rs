use std::path::PathBuf;

use log::LevelFilter;

/// Maximum level of log messages written to stderr.
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Parameters for the gamma correction table.
#[derive(Debug)]
pub struct GammaSettings {
    /// First input value in the table (inclusive).
    pub low: i32,

    /// Last input value in the table (inclusive).
    pub high: i32,

    /// Exponent of the power-law transform.
    pub gamma: f64,

    /// Where the literal list is written; any existing file is replaced.
    pub output: PathBuf,
}

impl Default for GammaSettings {
    fn default() -> Self {
        Self {
            low: 0,
            high: 255,
            gamma: 0.2,
            output: PathBuf::from("gamma-tab.txt"),
        }
    }
}

/// Parameters for the Gaussian kernels. One kernel is generated and plotted
/// for each entry in `sigmas`, all sampled with the same `step`.
#[derive(Debug)]
pub struct KernelSettings {
    pub step: f64,
    pub sigmas: Vec<f64>,

    /// Decimal places kept when a kernel is rendered as a literal list.
    pub precision: u32,
}

impl Default for KernelSettings {
    fn default() -> Self {
        Self {
            step: 1.0,
            sigmas: vec![1.0, 2.0],
            precision: 5,
        }
    }
}

/// The fixed constants both generators run with.
#[derive(Debug, Default)]
pub struct Settings {
    pub gamma: GammaSettings,
    pub kernel: KernelSettings,
}
