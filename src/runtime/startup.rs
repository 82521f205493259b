//! 运行时初始化
//!
//! dotenv、全局配置与 tracing 输出，宿主在进程入口调用一次。
//! 返回的 guard 决定日志后台线程的存活期，宿主需要持有到退出。

use dotenv::dotenv;
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::AppConfig;
use crate::errors::Result;

pub fn init() -> Result<WorkerGuard> {
    dotenv().ok();

    AppConfig::init()?;
    let config = AppConfig::get();

    let stdout_log = std::io::stdout();
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    warn!(
        "Starting {}...
        Project: {}
        Version: {}
        Authors: {}",
        config.app.system_name,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    Ok(guard)
}
