use std::io::Write;
use std::process::{Command, Stdio};

use base64::Engine;

use crate::error::{Error, Result};

/// Which copy path completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// A system clipboard utility accepted the text
    Native,
    /// Fallback: OSC 52 escape sequence written to the terminal
    Osc52,
}

/// Candidate clipboard utilities, tried in order
const CLIPBOARD_COMMANDS: [(&str, &[&str]); 4] = [
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
];

/// Copy text to the clipboard. Tries the system clipboard utilities first,
/// then falls back to an OSC 52 terminal escape. Failure of both paths is
/// reported, not swallowed.
pub fn copy_to_clipboard(text: &str) -> Result<CopyMethod> {
    for (program, args) in CLIPBOARD_COMMANDS {
        match copy_with_command(program, args, text) {
            Ok(()) => return Ok(CopyMethod::Native),
            Err(e) => {
                tracing::debug!(command = program, error = %e, "clipboard utility unavailable");
            }
        }
    }

    copy_with_osc52(text)
        .map(|_| CopyMethod::Osc52)
        .map_err(|e| {
            Error::Clipboard(format!(
                "no clipboard utility available and terminal fallback failed: {}",
                e
            ))
        })
}

fn copy_with_command(program: &str, args: &[&str], text: &str) -> std::io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
        // stdin drops here, closing the pipe so the utility can exit
    }

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("{} exited with {}", program, status),
        ))
    }
}

fn copy_with_osc52(text: &str) -> std::io::Result<()> {
    let payload = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "\x1b]52;c;{}\x07", payload)?;
    stdout.flush()
}
