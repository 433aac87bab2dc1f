pub mod batch;
pub mod config;
pub mod error;
pub mod process;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use error::{Error, Result};
