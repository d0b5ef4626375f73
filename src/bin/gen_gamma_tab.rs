use std::process::ExitCode;

use log::{error, info};

use inorm_tables::{
    gamma_correction::GammaTable,
    logging,
    settings::{self, Settings},
    Result,
};

fn run(settings: &Settings) -> Result<()> {
    let parameters = &settings.gamma;
    let table = GammaTable::generate(parameters.low, parameters.high, parameters.gamma)?;
    table.write_to(&parameters.output)?;

    info!(
        "wrote {} entries of [{}, {}] ^ {} to {}",
        table.len(),
        parameters.low,
        parameters.high,
        parameters.gamma,
        parameters.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    logging::init(settings::LOG_LEVEL).expect("install the logger");

    match run(&Settings::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{}", error);
            ExitCode::FAILURE
        }
    }
}
