//! Wordlist Forge - password candidate wordlist generation
//!
//! Combines base words with casing and leet variants, numbers, symbols and
//! date tokens, filters by length and writes the result to a plain or gzip
//! file.

pub mod error;
pub mod forge;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod profile;
pub mod types;

// Re-export commonly used types
pub use error::{ForgeError, Result};
pub use types::{GenerationConfig, GenerationMode, OutputDescriptor, TokenSets};

// Re-export main functionality
pub use forge::{build_year_tokens, estimate, expand, generate, leet_variants, Combinations};
pub use output::{write_output, PROGRESS_INTERVAL};
pub use pipeline::{run, RunSummary};
pub use profile::Profile;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
