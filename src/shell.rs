use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::algos::strength::analyze;
use crate::constants::{MESSAGE_PROMPT, PASSWORD_PROMPT, SHIFT_PROMPT};
use crate::error::CipherError;
use crate::structs::{Caesar, Shift};
use crate::traits::{Decryptor, Encryptor};
use crate::utils::prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Runs one cipher pass, prompting for whichever of `message` and `shift` is missing,
/// and writes the result as a single line.
pub async fn run_cipher<R, W>(
    reader: &mut R,
    writer: &mut W,
    direction: Direction,
    shift: Option<Shift>,
    message: Option<String>,
) -> Result<String, CipherError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let message = match message {
        Some(message) => message,
        None => prompt(reader, writer, MESSAGE_PROMPT).await?,
    };

    let shift = match shift {
        Some(shift) => shift,
        None => {
            let raw = prompt(reader, writer, SHIFT_PROMPT).await?;
            match raw.parse::<Shift>() {
                Ok(shift) => shift,
                Err(err) => {
                    debug!(%err, "rejected shift");
                    return Err(err);
                }
            }
        }
    };

    debug!(?direction, offset = shift.offset(), "applying caesar shift");

    let cipher = Caesar::new(shift);
    let output = match direction {
        Direction::Encrypt => cipher.encrypt(&message),
        Direction::Decrypt => cipher.decrypt(&message),
    };

    writer.write_all(output.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;

    Ok(output)
}

/// Prompts for a password and writes its strength report.
pub async fn run_strength<R, W>(reader: &mut R, writer: &mut W) -> Result<(), CipherError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let password = prompt(reader, writer, PASSWORD_PROMPT).await?;

    let mut out = String::new();
    match analyze(&password) {
        None => out.push_str("No password entered\n"),
        Some(report) => {
            debug!(score = report.score, level = %report.level, "password analyzed");
            out.push_str(&format!(
                "Password strength: {} ({})\n",
                report.level, report.score
            ));
            for (label, passed) in report.checks.items() {
                let mark = if passed { 'x' } else { ' ' };
                out.push_str(&format!("[{}] {}\n", mark, label));
            }
        }
    }

    writer.write_all(out.as_bytes()).await?;
    writer.flush().await?;

    Ok(())
}
