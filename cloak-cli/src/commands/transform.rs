//! Encrypt and decrypt command implementation

use anyhow::{Context, Result};
use clap::Args;
use cloak_core::{CipherSelector, FileCryptor, StrategyKind};
use std::io::Write;
use std::path::PathBuf;

use crate::error::CliError;

/// Direction of a transform command
#[derive(Debug, Clone, Copy)]
pub enum Direction {
    /// Apply the strategy's forward transform
    Encrypt,
    /// Apply the strategy's inverse transform
    Decrypt,
}

impl Direction {
    fn verb(self) -> &'static str {
        match self {
            Direction::Encrypt => "encryption",
            Direction::Decrypt => "decryption",
        }
    }
}

/// Arguments shared by the encrypt and decrypt commands
#[derive(Debug, Args)]
pub struct TransformArgs {
    /// Input file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (default: raw bytes to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Cipher strategy to apply
    #[arg(short, long, value_enum)]
    pub algorithm: Algorithm,

    /// Strategy key (xor: arbitrary bytes; caesar: decimal shift; binary: ignored)
    #[arg(short, long, value_name = "KEY", default_value = "")]
    pub key: String,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported cipher algorithms
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Algorithm {
    /// Byte-wise XOR with a cyclically repeated key
    Xor,
    /// Per-byte shift by a decimal key, modulo 255
    Caesar,
    /// Each byte encoded as 8-character binary text
    Binary,
}

impl Algorithm {
    /// Map the CLI flag to the core strategy kind
    pub fn kind(self) -> StrategyKind {
        match self {
            Algorithm::Xor => StrategyKind::Xor,
            Algorithm::Caesar => StrategyKind::Caesar,
            Algorithm::Binary => StrategyKind::Binary,
        }
    }
}

impl TransformArgs {
    /// Execute the encrypt or decrypt command
    pub fn execute(&self, direction: Direction) -> Result<()> {
        self.init_logging();

        log::info!(
            "Starting {} with the {} strategy",
            direction.verb(),
            self.algorithm.kind().name()
        );
        log::debug!("Arguments: {:?}", self);

        if !self.input.exists() {
            return Err(CliError::FileNotFound(self.input.display().to_string()).into());
        }

        match &self.output {
            Some(output) => self.transform_to_file(direction, output),
            None => self.transform_to_stdout(direction),
        }
    }

    fn transform_to_file(&self, direction: Direction, output: &PathBuf) -> Result<()> {
        let cryptor = FileCryptor::with_strategy(self.algorithm.kind());
        let key = self.key.as_bytes();

        match direction {
            Direction::Encrypt => cryptor.encrypt_file(&self.input, output, key),
            Direction::Decrypt => cryptor.decrypt_file(&self.input, output, key),
        }
        .map_err(|error| CliError::TransformFailed(error.to_string()))?;

        log::info!("Wrote {}", output.display());
        Ok(())
    }

    fn transform_to_stdout(&self, direction: Direction) -> Result<()> {
        let content = std::fs::read(&self.input)
            .with_context(|| format!("Failed to read file: {}", self.input.display()))?;

        let mut selector = CipherSelector::new();
        selector.select(self.algorithm.kind());
        let key = self.key.as_bytes();

        let transformed = match direction {
            Direction::Encrypt => selector.encrypt(&content, key),
            Direction::Decrypt => selector.decrypt(&content, key),
        }
        .map_err(|error| CliError::TransformFailed(error.to_string()))?;

        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(&transformed)
            .and_then(|()| stdout.flush())
            .context("Failed to write to stdout")
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}
