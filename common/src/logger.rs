use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();
static UNINITIALIZED_WARNED: OnceLock<()> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
}

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format(&self, level: Level, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        let level_tag = match level {
            Level::Info => "",
            Level::Warn => "[WARN]",
        };
        match self.prefix {
            Some(ref prefix) => format!(
                "[{}][{}]{}[{}:{}] {}",
                timestamp, prefix, level_tag, file_name, line, message
            ),
            None => format!("[{}]{}[{}:{}] {}", timestamp, level_tag, file_name, line, message),
        }
    }

    pub fn log(&self, level: Level, file: &str, line: u32, message: &str) {
        let formatted = self.format(level, file, line, message);
        match level {
            Level::Info => println!("{}", formatted),
            Level::Warn => eprintln!("{}", formatted),
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(level: Level, file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, file, line, message);
    } else if first_uninitialized_call() {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

/// `true` only for the first call, so the warning is printed once.
fn first_uninitialized_call() -> bool {
    UNINITIALIZED_WARNED.set(()).is_ok()
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Info, file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Warn, file!(), line!(), &format!($($arg)*))
    };
}
