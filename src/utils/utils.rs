use std::io;

pub const LOG_LEVELS: [&str; 4] = ["debug", "info", "warn", "error"];

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("日誌初始化失敗: {}", e)))
}
