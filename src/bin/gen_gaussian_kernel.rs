use std::{io, process};

use flo_draw::with_2d_graphics;
use log::{debug, error, info};

use inorm_tables::{
    gaussian_kernel::{self, GaussianKernel},
    logging,
    plot::{Figure, Marker},
    plot_window,
    settings::{self, Settings},
    Result,
};

const MARKERS: [Marker; 2] = [Marker::Star, Marker::Circle];

fn run(settings: &Settings) -> Result<()> {
    let parameters = &settings.kernel;
    let kernels = parameters
        .sigmas
        .iter()
        .map(|&sigma| GaussianKernel::generate(sigma, parameters.step))
        .collect::<Result<Vec<_>>>()?;

    let mut figure = Figure::new("Normalized Gaussian kernels");
    for (kernel, marker) in kernels.iter().zip(MARKERS.iter().cycle()) {
        info!(
            "sigma={} step={}: {} weights",
            kernel.sigma(),
            kernel.step(),
            kernel.len()
        );
        debug!("{}", kernel.to_literal(parameters.precision));

        figure.scatter(
            &format!("sigma={}", kernel.sigma()),
            &kernel.coordinates(),
            kernel.weights(),
            *marker,
        );
    }

    plot_window::show(&figure);

    gaussian_kernel::write_kernels(&mut io::stdout().lock(), &kernels)?;
    Ok(())
}

fn main() {
    logging::init(settings::LOG_LEVEL).expect("install the logger");

    // The window event loop owns the main thread and may end the process once
    // the callback returns, so all of the work happens inside it.
    with_2d_graphics(|| {
        if let Err(error) = run(&Settings::default()) {
            error!("{}", error);
            process::exit(1);
        }
    });
}
