mod action;
mod active;
mod app;
mod app_state;
mod component;
mod components;
mod directory;
mod logview;
mod stats;
mod stream;
mod theme;
mod widgets;

use scanner_proto::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let data_dir = Config::data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let log_path = data_dir.join("scanmon.log");

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    // Allow RUST_LOG override; default to debug for app code but suppress
    // noisy connection-level DEBUG from HTTP/WS client internals.
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        "debug,hyper_util=warn,reqwest=warn,hyper=warn,tungstenite=warn".to_string()
    });
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(log_filter.as_str())
        .with_ansi(false)
        .init();

    // Print log path to stderr so the operator can tail it immediately.
    eprintln!("scanmon log: {}", log_path.display());

    tracing::info!("scanmon starting…");

    let config = Config::load().unwrap_or_default();

    let app = app::App::new(config);
    app.run().await?;

    Ok(())
}
