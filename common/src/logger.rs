use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

enum LogSink {
    Stdout,
    File(Mutex<File>),
}

pub struct Logger {
    prefix: Option<String>,
    sink: LogSink,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix, sink: LogSink::Stdout }
    }

    fn with_file(prefix: Option<String>, file: File) -> Self {
        Self { prefix, sink: LogSink::File(Mutex::new(file)) }
    }

    fn format_line(&self, timestamp: &str, file: &str, line: u32, message: &str) -> String {
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let formatted = self.format_line(&timestamp, file, line, message);
        match self.sink {
            LogSink::Stdout => println!("{}", formatted),
            LogSink::File(ref file) => {
                let written = match file.lock() {
                    Ok(mut file) => writeln!(file, "{}", formatted).and_then(|_| file.flush()),
                    Err(_) => Ok(()),
                };
                if let Err(e) = written {
                    eprintln!("Failed to write log line: {}", e);
                }
            }
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// Appends log lines to `path` instead of stdout, for front ends that own the
/// whole terminal.
pub fn init_file_logger(prefix: Option<String>, path: impl AsRef<Path>) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    LOGGER.get_or_init(|| Logger::with_file(prefix, file));
    Ok(())
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
