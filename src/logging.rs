use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Route log messages at or above `level` to stderr.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let colors = ColoredLevelConfig::new().debug(Color::Magenta);
    fern::Dispatch::new()
        .chain(std::io::stderr())
        .level(level)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{:6}][{}] {}",
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .apply()
}
