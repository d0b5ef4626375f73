use thiserror::Error;

/// Everything that can stop a table from being generated or written.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input range: [{low}, {high}]")]
    InvalidRange { low: i32, high: i32 },
    #[error("Gamma exponent must be finite and positive: {}", _0)]
    InvalidGamma(f64),
    #[error("Sigma must be finite and positive: {}", _0)]
    InvalidSigma(f64),
    #[error("Step must be finite and positive: {}", _0)]
    InvalidStep(f64),
    #[error("Kernel for sigma={sigma} step={step} needs more than {limit} samples per side")]
    KernelTooLarge { sigma: f64, step: f64, limit: usize },
    #[error("I/O error: {}", _0)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
