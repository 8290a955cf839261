use anyhow::Context;
use lawblog::{Config, run};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    build_runtime(config.general.worker_threads)
        .context("Failed to start async runtime")?
        .block_on(run(config))
}

/// `worker_threads == 0` leaves the choice to tokio (one per core).
fn build_runtime(worker_threads: usize) -> std::io::Result<tokio::runtime::Runtime> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all().thread_name("lawblog-worker");

    if worker_threads > 0 {
        builder.worker_threads(worker_threads);
    }

    builder.build()
}
