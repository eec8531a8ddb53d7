use crate::config::Config;
use crate::error::StackTrace;
use crate::handler::Handler;
use crate::terminal::Terminal;
use clap::Parser;
use driver::clock::SystemClock;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod config;
mod controller;
mod error;
mod handler;
mod request;
mod response;
mod route;
mod terminal;

fn main() -> Result<(), StackTrace> {
    // A missing .env is the normal case.
    let _ = dotenvy::dotenv();
    let config = Config::parse();
    let _guard = init_tracing(&config);

    let mut module = Handler::init(SystemClock);
    let mut terminal = Terminal::new(std::io::stdin().lock(), std::io::stdout());
    route::run(&mut module, &mut terminal)?;

    Ok(())
}

fn init_tracing(config: &Config) -> Option<WorkerGuard> {
    let (file_layer, guard) = if config.no_log_file {
        (None, None)
    } else {
        let appender = tracing_appender::rolling::daily(&config.log_dir, "library.log");
        let (non_blocking_appender, guard) = tracing_appender::non_blocking(appender);
        let layer = tracing_subscriber::fmt::Layer::default()
            .with_writer(non_blocking_appender)
            .with_ansi(false)
            .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG);
        (Some(layer), Some(guard))
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
                )),
        )
        .with(file_layer)
        .init();

    guard
}
