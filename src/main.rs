use anyhow::Result;
use dailycount::{batch, Config};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) inputs live next to the executable ───────────────────────
    let config = Config::beside_executable()?;
    info!(
        dir = %config.base_dir.display(),
        countries = ?config.countries,
        "startup"
    );

    // ─── 3) one pass per country; failures are reported, not fatal ──
    batch::run(&config);
    Ok(())
}
