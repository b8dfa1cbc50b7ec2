use std::{any::Any, panic};

use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const LOG_FILE: &str = "/tmp/termseg.log";
const PATTERN: &str = "{l} {d(%H:%M:%S.%3f)} {f}:{L} {m}{n}";

/// Log to [`LOG_FILE`], debug messages only if `debug` is set
pub fn setup(debug: bool) -> anyhow::Result<()> {
    panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| String::from("<unknown>"));
        log_panic(&location, info.payload());
    }));

    let appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(LOG_FILE)?;
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(appender)))
        .build(Root::builder().appender("file").build(level))?;
    log4rs::init_config(config)?;

    Ok(())
}

fn log_panic(location: &str, payload: &(dyn Any + Send)) {
    let backtrace = std::backtrace::Backtrace::capture();
    log::error!("{backtrace}");

    let cause = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("<cause unknown>");

    log::error!("A panic occurred at {location}: {cause}");
    eprintln!("termseg panicked at {location}: {cause}");
}
