//! segbar — lays out a proportional segmented bar and prints it.
//!
//! Run with:  `RUST_LOG=debug segbar [path/to/segbar.toml]`

mod app;

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    // Logs go to stderr so the rendered bar on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("segbar v{} starting", env!("CARGO_PKG_VERSION"));

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(segbar_config::default_path);

    let config = segbar_config::load(&path)
        .with_context(|| format!("loading '{}'", path.display()))?;

    if config.render.watch {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("starting runtime")?;
        return runtime.block_on(app::watch(path, config));
    }

    let mut app = app::App::new(&config);
    print!("{}", app.render(&config)?);
    Ok(())
}
