//! Precomputed tables for the illumination normalization pipeline: a gamma
//! correction lookup table and normalized Gaussian blur kernels.

pub mod error;
pub mod gamma_correction;
pub mod gaussian_kernel;
pub mod literal;
pub mod logging;
pub mod plot;
pub mod plot_window;
pub mod settings;

pub use error::{Error, Result};
