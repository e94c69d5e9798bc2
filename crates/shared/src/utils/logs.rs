use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber. Keep the returned guard alive for the
/// lifetime of the process or buffered file logs are lost.
pub fn init_logger(component: &str, is_dev: bool, enable_file: bool) -> Option<WorkerGuard> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = if is_dev {
        fmt::layer()
            .pretty()
            .with_thread_names(true)
            .with_ansi(true)
            .with_filter(console_filter)
            .boxed()
    } else {
        fmt::layer()
            .compact()
            .with_ansi(false)
            .with_filter(console_filter)
            .boxed()
    };

    let (file_layer, guard) = if enable_file {
        let log_dir = if is_dev { "./logs" } else { "/var/log/app" };
        let file_name = format!("rust_app_{component}.log");
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

        let layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"))
            .boxed();

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}
