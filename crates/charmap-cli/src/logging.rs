use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable holding a level name (`off`, `error`, `warn`,
/// `info`, `debug`, `trace`); used when no `-v` flag is given.
pub const LOG_ENV: &str = "CHARMAP_LOG";

struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!(
            "[{}] {}: {}",
            record.level().as_str().to_ascii_lowercase(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

pub fn level_for(verbosity: u8, env: Option<&str>) -> LevelFilter {
    match verbosity {
        0 => env
            .and_then(|v| v.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    let env = std::env::var(LOG_ENV).ok();
    let level = level_for(verbosity, env.as_deref());
    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}
