use anyhow::Result;
use clap::Parser;
use pulsecheck::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries the report only.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let app_config = cli.apply(config::AppConfig::load(cli.config.as_deref())?);
    app_config.validate()?;
    tracing::info!(version = version::VERSION, "{} starting", version::NAME);

    for message in &app_config.greeting.messages {
        logger::log(message);
    }

    if app_config.report.system {
        let sysinfo_repo = sysinfo_repo::SysinfoRepo::new();
        status::report(&sysinfo_repo).map_err(|e| anyhow::anyhow!("system status: {}", e))?;
    }

    if app_config.report.network {
        let checker = network::NetworkChecker::new(
            app_config.network.endpoint.clone(),
            app_config.network.timeout(),
        )?;
        let result = checker.check().await;
        tracing::info!(connected = result.is_connected(), "network check done");
    }

    Ok(())
}
