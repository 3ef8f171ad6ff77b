use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing::debug;

use caesar_shift::shell::{run_cipher, run_strength, Direction};
use caesar_shift::structs::Shift;
use caesar_shift::telemetry;

/// Caesar shift cipher over the A-Z alphabet
///
/// Shifts every letter of a message by a fixed offset, wrapping within A-Z. Input is
/// uppercased; digits, punctuation and whitespace are kept as is. Run without a subcommand
/// to be prompted for the message and the shift.
#[derive(Debug, Parser)]
#[command(name = "caesar")]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Shift a message forward
    Encrypt {
        /// Shift to apply; any integer, negative values allowed
        #[arg(long, short = 's', env = "CAESAR_SHIFT", allow_hyphen_values = true)]
        shift: Option<Shift>,
        /// Message to encrypt; prompted for when omitted
        #[arg(allow_hyphen_values = true)]
        message: Option<String>,
    },
    /// Shift a message back, undoing `encrypt` with the same shift
    Decrypt {
        /// Shift that was used to encrypt
        #[arg(long, short = 's', env = "CAESAR_SHIFT", allow_hyphen_values = true)]
        shift: Option<Shift>,
        /// Message to decrypt; prompted for when omitted
        #[arg(allow_hyphen_values = true)]
        message: Option<String>,
    },
    /// Rate the strength of a password read from stdin
    Strength,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose);

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    match cli.command {
        None => {
            debug!("starting interactive session");
            run_cipher(&mut stdin, &mut stdout, Direction::Encrypt, None, None).await?;
        }
        Some(Commands::Encrypt { shift, message }) => {
            debug!("running encrypt");
            run_cipher(&mut stdin, &mut stdout, Direction::Encrypt, shift, message).await?;
        }
        Some(Commands::Decrypt { shift, message }) => {
            debug!("running decrypt");
            run_cipher(&mut stdin, &mut stdout, Direction::Decrypt, shift, message).await?;
        }
        Some(Commands::Strength) => {
            debug!("running strength check");
            run_strength(&mut stdin, &mut stdout).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("caesar").chain(args.iter().copied()))
    }

    #[test]
    fn no_subcommand_runs_interactive_session() {
        let cli = parse(&[]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn short_shift_accepts_negative_values() {
        let cli = parse(&["encrypt", "-s", "-1", "abc"]).unwrap();
        match cli.command {
            Some(Commands::Encrypt { shift, message }) => {
                assert_eq!(shift, Some(Shift::new(-1)));
                assert_eq!(message.as_deref(), Some("abc"));
            }
            other => panic!("expected encrypt, got {other:?}"),
        }
    }

    #[test]
    fn long_shift_with_equals_sign() {
        let cli = parse(&["decrypt", "--shift=-27", "ZAB"]).unwrap();
        match cli.command {
            Some(Commands::Decrypt { shift, message }) => {
                assert_eq!(shift, Some(Shift::new(-27)));
                assert_eq!(message.as_deref(), Some("ZAB"));
            }
            other => panic!("expected decrypt, got {other:?}"),
        }
    }

    #[test]
    fn message_may_start_with_a_hyphen() {
        let cli = parse(&["-v", "encrypt", "-s", "3", "-abc"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Encrypt { shift, message }) => {
                assert_eq!(shift, Some(Shift::new(3)));
                assert_eq!(message.as_deref(), Some("-abc"));
            }
            other => panic!("expected encrypt, got {other:?}"),
        }
    }

    #[test]
    fn invalid_shift_is_rejected() {
        let err = parse(&["encrypt", "-s", "x", "abc"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn strength_takes_no_arguments() {
        let cli = parse(&["strength"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Strength)));
        assert!(parse(&["strength", "hunter2"]).is_err());
    }

    // The only test that touches CAESAR_SHIFT; every other test passes the shift explicitly.
    #[test]
    fn shift_from_environment() {
        std::env::set_var("CAESAR_SHIFT", "3");
        let from_env = parse(&["decrypt", "DWWDFN"]);
        let overridden = parse(&["decrypt", "-s", "1", "DWWDFN"]);
        std::env::remove_var("CAESAR_SHIFT");

        match from_env.unwrap().command {
            Some(Commands::Decrypt { shift, .. }) => assert_eq!(shift, Some(Shift::new(3))),
            other => panic!("expected decrypt, got {other:?}"),
        }
        match overridden.unwrap().command {
            Some(Commands::Decrypt { shift, .. }) => assert_eq!(shift, Some(Shift::new(1))),
            other => panic!("expected decrypt, got {other:?}"),
        }
    }
}
