use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::CipherError;

/// Writes `label` without a newline and reads one line back, minus its line ending.
pub async fn prompt<R, W>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> Result<String, CipherError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(label.as_bytes()).await?;
    writer.flush().await?;

    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
        return Err(CipherError::UnexpectedEof {
            prompt: label.to_string(),
        });
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}
