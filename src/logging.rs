use std::{fs, fs::OpenOptions, io::Write};

use chrono::Local;
use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::{
    config::Config,
    error::{PlaylistError, Result},
};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Fills the `{time}`, `{level}`, `{target}` and `{message}` placeholders of
/// a log line template. Unknown placeholders are left as they are.
pub fn render_line(template: &str, time: &str, level: &str, target: &str, message: &str) -> String {
    template
        .replace("{time}", time)
        .replace("{level}", level)
        .replace("{target}", target)
        .replace("{message}", message)
}

/// Installs the global logger, appending formatted lines to the configured
/// log file.
///
/// Only this crate logs at `config.log_level`; dependencies are held at
/// `warn` so HTTP internals do not flood the file. Must be called at most
/// once per process.
pub fn init(config: &Config) -> Result<()> {
    if let Some(parent) = config.log_file.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    let template = config.log_format.clone();

    Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_CRATE_NAME"), config.log_level)
        .target(Target::Pipe(Box::new(file)))
        .format(move |buf, record| {
            let time = Local::now().format(TIME_FORMAT).to_string();
            let message = record.args().to_string();
            writeln!(
                buf,
                "{}",
                render_line(
                    &template,
                    &time,
                    record.level().as_str(),
                    record.target(),
                    &message
                )
            )
        })
        .try_init()
        .map_err(|e| PlaylistError::Config(format!("cannot install logger: {}", e)))
}
