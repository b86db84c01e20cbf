use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};
use std::io::Write;

/// Initialize the logger; `RUST_LOG` still wins over `verbose`
pub fn log_env_init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::builder()
        .format(log_formatter)
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .format_module_path(false)
        .format_level(false)
        .target(env_logger::Target::Stdout)
        .init();
}

fn log_formatter(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    writeln!(buf, "{}{}", level_prefix(record.level()), record.args())
}

fn level_prefix(level: Level) -> &'static str {
    match level {
        Level::Error => "⛔ ",
        Level::Warn => "⚠️ ",
        Level::Debug | Level::Trace => "🔍 ",
        Level::Info => "",
    }
}
