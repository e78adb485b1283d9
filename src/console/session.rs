//! Console session loop
//!
//! Reads one command per line, dispatches it, and writes the reply. The
//! loop ends on QUIT or end of input.

use log::{debug, info, warn};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use super::commands::{CommandStatus, parse_command};
use super::handlers::handle_command;
use super::responses::{COMMAND_ERROR, READY, format_response};
use crate::app::App;

pub async fn run<R, W>(app: &mut App, input: R, mut output: W) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let max_command_length = app.startup().max_command_length;
    let mut reader = BufReader::new(input);
    let mut buf = Vec::new();

    let greeting = match app.session() {
        Some(session) => format!(
            "XForce Leaderboard console ready, logged in as {}",
            session.email()
        ),
        None => "XForce Leaderboard console ready, please LOGIN or SIGNUP".to_string(),
    };
    output
        .write_all(format_response(READY, &greeting).as_bytes())
        .await?;
    output.flush().await?;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            info!("End of input, closing console");
            break;
        }

        let raw = strip_line_ending(&buf);
        let line = match std::str::from_utf8(raw) {
            _ if raw.len() > max_command_length => Err("Command too long"),
            Ok(text) => Ok(text),
            Err(_) => {
                warn!("Rejected a command line that is not valid UTF-8");
                Err("Command is not valid UTF-8")
            }
        };
        let text = match line {
            Ok(text) => text,
            Err(reason) => {
                output
                    .write_all(format_response(COMMAND_ERROR, reason).as_bytes())
                    .await?;
                output.flush().await?;
                continue;
            }
        };
        let trimmed = text.trim();
        if trimmed.is_empty() {
            continue;
        }

        let command = parse_command(trimmed);
        debug!("Received: {:?}", command);

        let result = handle_command(app, &command).await;
        if let Some(msg) = result.message {
            output.write_all(msg.as_bytes()).await?;
            output.flush().await?;
        }
        if result.status == CommandStatus::Exit {
            break;
        }
    }

    Ok(())
}

/// Drops the trailing `\n` or `\r\n`
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
