use tracing::{error, info};

use crate::config::Config;
use crate::process::process_country;

/// Process every configured country in order. A failing country is reported
/// and skipped; the batch always runs to the end.
pub fn run(config: &Config) {
    let mut failed = 0usize;

    for country in &config.countries {
        if let Err(e) = process_country(&config.base_dir, country) {
            error!(country = %country, "{}", e);
            failed += 1;
        }
    }

    info!(
        succeeded = config.countries.len() - failed,
        failed,
        "batch finished"
    );
}
