//! CLI command implementations

use clap::Subcommand;

use crate::error::CliResult;

pub mod transform;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Encrypt a file with the selected cipher strategy
    Encrypt(transform::TransformArgs),

    /// Decrypt a file with the selected cipher strategy
    Decrypt(transform::TransformArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available cipher algorithms
    Algorithms,
}

impl Commands {
    /// Execute the parsed command
    pub fn execute(self) -> CliResult<()> {
        match self {
            Commands::Encrypt(args) => args.execute(transform::Direction::Encrypt),
            Commands::Decrypt(args) => args.execute(transform::Direction::Decrypt),
            Commands::List { subcommand } => {
                match subcommand {
                    ListCommands::Algorithms => list_algorithms(),
                }
                Ok(())
            }
        }
    }
}

/// Print the available algorithms with their key expectations
fn list_algorithms() {
    for &kind in cloak_core::StrategyKind::all() {
        let description = match kind {
            cloak_core::StrategyKind::Xor => {
                "byte-wise XOR with a cyclic key (key: arbitrary bytes; empty key is a no-op)"
            }
            cloak_core::StrategyKind::Caesar => {
                "per-byte shift, modulo 255 (key: non-negative decimal integer)"
            }
            cloak_core::StrategyKind::Binary => {
                "each byte as 8-character binary text (key: ignored)"
            }
        };
        println!("{:<8} {description}", kind.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_args() -> transform::TransformArgs {
        transform::TransformArgs {
            input: PathBuf::from("plain.txt"),
            output: None,
            algorithm: transform::Algorithm::Xor,
            key: "4".to_string(),
            quiet: false,
            verbose: 0,
        }
    }

    #[test]
    fn test_commands_debug_format() {
        let encrypt_cmd = Commands::Encrypt(sample_args());
        let debug_str = format!("{:?}", encrypt_cmd);
        assert!(debug_str.contains("Encrypt"));
        assert!(debug_str.contains("plain.txt"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Algorithms,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Algorithms"));
    }

    #[test]
    fn test_enum_variants_completeness() {
        match Commands::Encrypt(sample_args()) {
            Commands::Encrypt(_) => (),
            other => panic!("should be Encrypt, got {other:?}"),
        }

        match Commands::Decrypt(sample_args()) {
            Commands::Decrypt(_) => (),
            other => panic!("should be Decrypt, got {other:?}"),
        }

        match (Commands::List {
            subcommand: ListCommands::Algorithms,
        }) {
            Commands::List { .. } => (),
            other => panic!("should be List, got {other:?}"),
        }
    }
}
