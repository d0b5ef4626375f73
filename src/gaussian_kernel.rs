use std::io::{self, Write};

use log::debug;

use crate::{
    error::{Error, Result},
    literal,
};

/// Samples further than this many standard deviations from the center are
/// dropped, the curve is effectively 0 beyond that.
const SIGMA_RANGE: f64 = 3.0;

/// Largest number of samples allowed on each side of the center.
pub const MAX_RADIUS: usize = 1 << 20;

/// A 1 dimensional Gaussian blur kernel, symmetric around its center weight
/// and normalized so the weights sum to 1.
#[derive(Debug, Clone)]
pub struct GaussianKernel {
    sigma: f64,
    step: f64,
    weights: Vec<f64>,
}

impl GaussianKernel {
    /// Sample the Gaussian with standard deviation `sigma` every `step` units
    /// out to `3 * sigma` on both sides of the center.
    pub fn generate(sigma: f64, step: f64) -> Result<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(Error::InvalidSigma(sigma));
        }

        if !step.is_finite() || step <= 0.0 {
            return Err(Error::InvalidStep(step));
        }

        let gaussian = |x: f64| (-0.5 * (x * x) / (sigma * sigma)).exp();
        let max_x = SIGMA_RANGE * sigma;
        let radius = Self::sample_radius(sigma, step, max_x)?;

        // The half kernel starts at the center, whose weight is always 1.
        let half = (0..=radius)
            .map(|i| gaussian(i as f64 * step))
            .collect::<Vec<_>>();

        // Mirror everything but the center onto the left side.
        let mut weights = Vec::with_capacity(2 * half.len() - 1);
        weights.extend(half[1..].iter().rev());
        weights.extend_from_slice(&half);

        // Normalize the weights so the area under the curve is 1.
        let total: f64 = weights.iter().sum();
        let weights = weights
            .into_iter()
            .map(|weight| weight / total)
            .collect::<Vec<_>>();

        debug!(
            "gaussian kernel sigma={} step={} has {} weights",
            sigma,
            step,
            weights.len()
        );

        Ok(Self {
            sigma,
            step,
            weights,
        })
    }

    /// The last sample index `n` with `n * step <= max_x`.
    fn sample_radius(sigma: f64, step: f64, max_x: f64) -> Result<usize> {
        let estimate = (max_x / step).floor();
        if estimate > MAX_RADIUS as f64 {
            return Err(Error::KernelTooLarge {
                sigma,
                step,
                limit: MAX_RADIUS,
            });
        }

        // The division can land one off either way, settle on the exact edge.
        let mut radius = estimate as usize;
        while radius > 0 && radius as f64 * step > max_x {
            radius -= 1;
        }
        while (radius + 1) as f64 * step <= max_x {
            radius += 1;
        }

        if radius > MAX_RADIUS {
            return Err(Error::KernelTooLarge {
                sigma,
                step,
                limit: MAX_RADIUS,
            });
        }

        Ok(radius)
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Get the weights of the elements in the kernel.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Number of weights on either side of the center.
    pub fn radius(&self) -> usize {
        self.weights.len() / 2
    }

    /// The x coordinate each weight was sampled at, with the center weight at 0.
    pub fn coordinates(&self) -> Vec<f64> {
        let radius = self.radius() as f64;
        (0..self.weights.len())
            .map(|index| (index as f64 - radius) * self.step)
            .collect()
    }

    /// Render the weights, rounded to `precision` decimal places, as a `", "`
    /// separated list of `<value>f` literals.
    pub fn to_literal(&self, precision: u32) -> String {
        literal::join_literals(
            self.weights
                .iter()
                .map(|&weight| literal::round_to(weight, precision)),
        )
    }
}

/// Print the weights of each kernel on its own line in `Debug` list form.
pub fn write_kernels<W: Write>(out: &mut W, kernels: &[GaussianKernel]) -> io::Result<()> {
    for kernel in kernels {
        writeln!(out, "{:?}", kernel.weights())?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample_kernels() -> Vec<GaussianKernel> {
        [(1.0, 1.0), (2.0, 1.0), (0.5, 0.1), (3.3, 0.7), (1.0, 5.0)]
            .into_iter()
            .map(|(sigma, step)| GaussianKernel::generate(sigma, step).expect("generate kernel"))
            .collect()
    }

    #[test]
    fn weights_sum_to_one() {
        for kernel in sample_kernels() {
            let total: f64 = kernel.weights().iter().sum();
            assert!((1.0 - total).abs() < 1e-9);
        }
    }

    #[test]
    fn weights_are_symmetric() {
        for kernel in sample_kernels() {
            let weights = kernel.weights();
            let len = weights.len();
            for i in 0..len {
                assert_eq!(weights[i], weights[len - 1 - i]);
            }
        }
    }

    #[test]
    fn odd_length() {
        for kernel in sample_kernels() {
            assert_eq!(kernel.len() % 2, 1);
        }
    }

    #[test]
    fn unit_sigma_kernel() {
        let kernel = GaussianKernel::generate(1.0, 1.0).expect("generate kernel");
        assert_eq!(kernel.len(), 7);
        assert_eq!(kernel.radius(), 3);

        let weights = kernel.weights();
        let peak = weights
            .iter()
            .copied()
            .fold(f64::MIN, f64::max);
        assert_eq!(weights[3], peak);
        assert!(weights[..4].windows(2).all(|pair| pair[0] < pair[1]));
        assert!(weights[3..].windows(2).all(|pair| pair[0] > pair[1]));

        assert_eq!(
            kernel.to_literal(5),
            "0.00443f, 0.05401f, 0.24204f, 0.39905f, 0.24204f, 0.05401f, 0.00443f"
        );
    }

    #[test]
    fn double_sigma_kernel() {
        let kernel = GaussianKernel::generate(2.0, 1.0).expect("generate kernel");
        assert_eq!(kernel.len(), 13);
        assert_eq!(literal::round_to(kernel.weights()[6], 5), 0.19968);
        assert_eq!(literal::round_to(kernel.weights()[0], 5), 0.00222);
    }

    #[test]
    fn step_wider_than_range_keeps_center() {
        let kernel = GaussianKernel::generate(1.0, 5.0).expect("generate kernel");
        assert_eq!(kernel.weights(), &[1.0]);
    }

    #[test]
    fn centered_coordinates() {
        let kernel = GaussianKernel::generate(1.0, 0.5).expect("generate kernel");
        assert_eq!(kernel.len(), 13);
        let coordinates = kernel.coordinates();
        assert_eq!(coordinates.len(), 13);
        assert_eq!(coordinates[0], -3.0);
        assert_eq!(coordinates[6], 0.0);
        assert_eq!(coordinates[12], 3.0);
    }

    #[test]
    fn radius_includes_samples_on_the_edge() {
        let kernel = GaussianKernel::generate(1.0, 0.1).expect("generate kernel");
        assert_eq!(kernel.radius(), 30);

        let kernel = GaussianKernel::generate(1.0, 0.75).expect("generate kernel");
        assert_eq!(kernel.radius(), 4);

        let kernel = GaussianKernel::generate(1.0, 3.0).expect("generate kernel");
        assert_eq!(kernel.radius(), 1);

        let kernel = GaussianKernel::generate(3.3, 0.7).expect("generate kernel");
        assert_eq!(kernel.radius(), 14);
    }

    #[test]
    fn rejects_oversized_kernels() {
        assert!(matches!(
            GaussianKernel::generate(1e10, 1.0),
            Err(Error::KernelTooLarge { limit: MAX_RADIUS, .. })
        ));
        assert!(matches!(
            GaussianKernel::generate(1.0, 1e-300),
            Err(Error::KernelTooLarge { .. })
        ));
    }

    #[test]
    fn kernels_print_one_list_per_line() {
        let kernels = [1.0, 2.0]
            .into_iter()
            .map(|sigma| GaussianKernel::generate(sigma, 1.0).expect("generate kernel"))
            .collect::<Vec<_>>();

        let mut out = Vec::new();
        write_kernels(&mut out, &kernels).expect("write kernels");
        let text = String::from_utf8(out).expect("utf-8 output");

        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert!(text.ends_with("]\n"));
        assert!(lines[0].starts_with("[0.004433048175243745, 0.054005582622414484, "));
        assert_eq!(lines[0].split(", ").count(), 7);
        assert_eq!(lines[1].split(", ").count(), 13);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(matches!(
            GaussianKernel::generate(0.0, 1.0),
            Err(Error::InvalidSigma(_))
        ));
        assert!(matches!(
            GaussianKernel::generate(-1.0, 1.0),
            Err(Error::InvalidSigma(_))
        ));
        assert!(matches!(
            GaussianKernel::generate(1.0, 0.0),
            Err(Error::InvalidStep(_))
        ));
        assert!(matches!(
            GaussianKernel::generate(1.0, f64::INFINITY),
            Err(Error::InvalidStep(_))
        ));
    }
}
