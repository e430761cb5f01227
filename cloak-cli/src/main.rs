//! Entry point for the cloak command-line tool

use clap::Parser;
use cloak_cli::commands::Commands;

/// Apply runtime-selected text transformation strategies to files
#[derive(Debug, Parser)]
#[command(name = "cloak", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = cli.command.execute() {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_encrypt() {
        let cli = Cli::try_parse_from([
            "cloak", "encrypt", "-i", "plain.txt", "-o", "cipher.txt", "-a", "xor", "-k", "4",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Encrypt(_)));
    }

    #[test]
    fn test_cli_requires_algorithm() {
        let result = Cli::try_parse_from(["cloak", "encrypt", "-i", "plain.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_algorithm() {
        let result = Cli::try_parse_from(["cloak", "encrypt", "-i", "plain.txt", "-a", "rot13"]);
        assert!(result.is_err());
    }
}
