//! Wordlist Forge - password candidate wordlist generator
//!
//! Reads base words from a file, stdin or an interactive prompt, expands
//! them and writes the wordlist to disk.

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordlist_forge::{
    forge::{build_year_tokens, tokens},
    input,
    pipeline::{self, RunSummary},
    profile::{affixes_or_blank, Profile},
    types::{GenerationConfig, GenerationMode, OutputDescriptor, TokenSets},
    ForgeError, Result,
};

#[derive(Parser, Debug)]
#[command(name = "wordlist-forge")]
#[command(about = "Generate password candidate wordlists from base words")]
#[command(version)]
struct Cli {
    /// Input file with base words (one per line)
    #[arg(short, long, env = "WORDLIST_FORGE_INPUT")]
    input: Option<PathBuf>,

    /// Generation mode [default: basic]
    #[arg(short, long, value_enum)]
    mode: Option<GenerationMode>,

    /// Output filename (use .gz to compress)
    #[arg(short, long, env = "WORDLIST_FORGE_OUTPUT", default_value = "wordlist.txt")]
    output: PathBuf,

    /// Minimum length of entries to include [default: 4]
    #[arg(long)]
    min_len: Option<usize>,

    /// Maximum length of entries to include [default: 64]
    #[arg(long)]
    max_len: Option<usize>,

    /// Remove duplicates in final output (buffers in memory)
    #[arg(long)]
    unique: bool,

    /// Shuffle output before saving (buffers in memory)
    #[arg(long)]
    shuffle: bool,

    /// Include leet substitutions
    #[arg(long)]
    leet: bool,

    /// Append date tokens for years START..=END
    #[arg(long, num_args = 2, value_names = ["START", "END"])]
    years: Option<Vec<i32>>,

    /// Number tokens to append
    #[arg(long, num_args = 0..)]
    numbers: Option<Vec<String>>,

    /// Symbol tokens to insert (full mode)
    #[arg(long, num_args = 0..)]
    symbols: Option<Vec<String>>,

    /// Separators between word and number
    #[arg(long, num_args = 0..)]
    separators: Option<Vec<String>>,

    /// Prefixes to add
    #[arg(long, num_args = 0..)]
    prefixes: Option<Vec<String>>,

    /// Suffixes to add
    #[arg(long, num_args = 0..)]
    suffixes: Option<Vec<String>>,

    /// Stop after writing LIMIT entries (0 = no limit)
    #[arg(long, default_value_t = 0)]
    limit: usize,

    /// Minimal console output
    #[arg(short, long)]
    quiet: bool,

    /// Prompt for base words (overrides --input)
    #[arg(long)]
    interactive: bool,

    /// JSON profile with default words and token sets
    #[arg(long, env = "WORDLIST_FORGE_PROFILE")]
    profile: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // Load .env before clap reads env-backed flags
    if let Err(e) = wordlist_forge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("{}", e.user_message());
        process::exit(e.exit_code());
    }

    if let Err(e) = run_wordlist_forge(&cli) {
        match e.downcast_ref::<ForgeError>() {
            Some(ForgeError::Interrupted) => {
                println!("{}", ForgeError::Interrupted.user_message());
                process::exit(0);
            }
            Some(forge_error) => {
                eprintln!("{}", forge_error.user_message());
                tracing::debug!(error = %format!("{:#}", e), "Run failed");
                process::exit(forge_error.exit_code());
            }
            None => {
                eprintln!("❌ Error: {:#}", e);
                process::exit(1);
            }
        }
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let filter = if verbose { "wordlist_forge=debug" } else { "wordlist_forge=warn" };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| ForgeError::config(format!("Failed to initialize logging: {}", e)))
}

/// Main wordlist forge workflow
fn run_wordlist_forge(cli: &Cli) -> anyhow::Result<()> {
    let profile = match &cli.profile {
        Some(path) => Profile::load(path)
            .with_context(|| format!("loading profile {}", path.display()))?,
        None => Profile::default(),
    };

    let base_words = resolve_base_words(cli, &profile)?;
    let tokens = build_token_sets(cli, &profile);
    let config = build_generation_config(cli, &profile);
    let output = OutputDescriptor {
        path: cli.output.clone(),
        unique: cli.unique,
        shuffle: cli.shuffle,
        limit: cli.limit,
        quiet: cli.quiet,
    };

    if !output.quiet {
        print_banner(&base_words, &tokens, &config, &output);
    }

    let progress = progress_bar(output.quiet)?;
    let start = std::time::Instant::now();
    let summary = pipeline::run(
        &base_words,
        &tokens,
        &config,
        &output,
        &mut rand::thread_rng(),
        |written| progress.set_message(format!("Wrote {} entries...", written)),
    )?;
    progress.finish_and_clear();

    if !output.quiet {
        print_summary(&summary, &output, start.elapsed());
    }

    Ok(())
}

/// Base words from the prompt, input file, piped stdin, profile or defaults
fn resolve_base_words(cli: &Cli, profile: &Profile) -> Result<Vec<String>> {
    if cli.interactive {
        return Ok(input::prompt_base_words()?.unwrap_or_else(|| profile.base_words_or_default()));
    }

    if let Some(path) = &cli.input {
        let words = input::read_word_file(path)?;
        if words.is_empty() {
            tracing::warn!(path = %path.display(), "Input file has no words, using defaults");
            return Ok(tokens::to_owned(tokens::DEFAULT_BASE_WORDS));
        }
        return Ok(words);
    }

    if let Some(words) = input::read_piped_stdin()? {
        return Ok(words);
    }

    Ok(profile.base_words_or_default())
}

/// Token tables: command line over profile over defaults
fn build_token_sets(cli: &Cli, profile: &Profile) -> TokenSets {
    let mut tokens = profile.token_sets();

    if let Some(numbers) = &cli.numbers {
        tokens.numbers = numbers.clone();
    }
    if let Some(symbols) = &cli.symbols {
        tokens.symbols = symbols.clone();
    }
    if let Some(separators) = &cli.separators {
        tokens.separators = separators.clone();
    }
    if let Some(prefixes) = &cli.prefixes {
        tokens.prefixes = affixes_or_blank(prefixes.clone());
    }
    if let Some(suffixes) = &cli.suffixes {
        tokens.suffixes = affixes_or_blank(suffixes.clone());
    }
    if let Some([start, end]) = cli.years.as_deref() {
        tokens.year_tokens = build_year_tokens(*start, *end);
    }

    tokens
}

fn build_generation_config(cli: &Cli, profile: &Profile) -> GenerationConfig {
    let mut config = profile.generation_config();
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if let Some(min_len) = cli.min_len {
        config.min_len = min_len;
    }
    if let Some(max_len) = cli.max_len {
        config.max_len = max_len;
    }
    if cli.leet {
        config.use_leet = true;
    }
    config
}

fn progress_bar(quiet: bool) -> Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }

    let style = ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed_precise}]")
        .map_err(|e| ForgeError::internal(format!("Invalid progress template: {}", e)))?;
    let progress = ProgressBar::new_spinner().with_style(style);
    progress.set_message("Generating...");
    progress.enable_steady_tick(Duration::from_millis(120));
    Ok(progress)
}

fn print_banner(base_words: &[String], tokens: &TokenSets, config: &GenerationConfig, output: &OutputDescriptor) {
    let estimate = pipeline::estimate_run(base_words, tokens, config);

    println!("🔥 Wordlist Forge - password candidate generation");
    println!("═══════════════════════════════════════════════════");
    println!("📚 Base words: {}", base_words.len());
    println!("⚙️  Mode: {}", config.mode);
    println!("📏 Length: {}..={}", config.min_len, config.max_len);
    println!("📊 Estimated output size (rough): ~{} entries", estimate);
    println!("💾 Writing to: {}", output.path.display());
    if output.compressed() {
        println!("🗜️  Gzip compression enabled.");
    }
    if output.shuffle {
        println!("🔀 Shuffle enabled (will buffer in memory).");
    }
    if output.unique {
        println!("🧹 Unique output enabled (will buffer in memory).");
    }
    if config.use_leet {
        println!("🧬 Leet substitutions enabled.");
    }
    println!();
}

fn print_summary(summary: &RunSummary, output: &OutputDescriptor, elapsed: Duration) {
    let path = std::fs::canonicalize(&output.path).unwrap_or_else(|_| output.path.clone());
    println!("✅ Done. Wrote {} entries to {}", summary.written, path.display());
    println!("   ⏱️  Total time: {:.2}s", elapsed.as_secs_f32());
}
