use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::sync::OnceLock;

pub const LOG_LEVEL_ENV: &str = "LSL_LOG";

pub struct Logger {
    level: Level,
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            eprintln!(
                "{} {} [{}] {}",
                timestamp,
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Parses a level name; `off` and unknown names yield `None`.
pub fn parse_level(value: &str) -> Option<Level> {
    value
        .parse::<LevelFilter>()
        .ok()
        .and_then(|filter| filter.to_level())
}

pub fn level_from_env() -> Option<Level> {
    std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|value| parse_level(&value))
}

/// Installs the stderr logger. Later calls keep the first level.
pub fn init(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    let first_call = LOGGER.get().is_none();
    let logger = LOGGER.get_or_init(|| Logger { level });

    if first_call {
        log::set_logger(logger)?;
        log::set_max_level(level.to_level_filter());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn parses_level_names() {
        let cases: &[(&str, Option<Level>)] = &[
            ("debug", Some(Level::Debug)),
            ("WARN", Some(Level::Warn)),
            ("Trace", Some(Level::Trace)),
            ("error", Some(Level::Error)),
            ("off", None),
            ("garbage", None),
        ];
        for (value, expected) in cases {
            assert_eq!(parse_level(value), *expected, "level {:?}", value);
        }
    }

    #[test]
    #[serial]
    fn env_level_is_optional() {
        std::env::remove_var(LOG_LEVEL_ENV);
        assert_eq!(level_from_env(), None);

        std::env::set_var(LOG_LEVEL_ENV, "info");
        assert_eq!(level_from_env(), Some(Level::Info));

        std::env::remove_var(LOG_LEVEL_ENV);
    }

    #[test]
    fn enabled_respects_threshold() {
        let logger = Logger { level: Level::Info };
        let debug = Metadata::builder().level(Level::Debug).target("t").build();
        let warn = Metadata::builder().level(Level::Warn).target("t").build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&warn));
    }
}
