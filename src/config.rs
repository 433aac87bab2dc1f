use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Countries processed by the shipped binary.
pub static DEFAULT_COUNTRIES: &[&str] = &["SE", "NO", "FI", "DK"];

/// What to process and where the files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Country codes, processed in order.
    pub countries: Vec<String>,
    /// Directory holding `raw_<CC>.xlsx` inputs and receiving `result_<CC>.csv`.
    pub base_dir: PathBuf,
}

impl Config {
    pub fn new<P: Into<PathBuf>>(countries: &[&str], base_dir: P) -> Self {
        Self {
            countries: countries.iter().map(|c| c.to_string()).collect(),
            base_dir: base_dir.into(),
        }
    }

    /// Default countries, rooted at the directory containing the running executable.
    pub fn beside_executable() -> Result<Self> {
        let exe = std::env::current_exe().context("locating current executable")?;
        let exe = exe
            .canonicalize()
            .with_context(|| format!("canonicalizing {}", exe.display()))?;
        let dir = exe
            .parent()
            .with_context(|| format!("{} has no parent directory", exe.display()))?;
        Ok(Self::new(DEFAULT_COUNTRIES, dir))
    }
}

pub fn input_path(base_dir: &Path, country: &str) -> PathBuf {
    base_dir.join(format!("raw_{}.xlsx", country))
}

pub fn output_path(base_dir: &Path, country: &str) -> PathBuf {
    base_dir.join(format!("result_{}.csv", country))
}
