//! Parsing of stdin lines into driver commands.
//!
//! ```text
//! 5                 → label "5" for the current session
//! @kiosk-2 tambah   → label "tambah" for session kiosk-2
//! :reset            → reset the current session
//! :sessions         → list live sessions
//! :quit             → stop reading
//! (blank)           → ignored
//! ```

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Apply a label, optionally to an explicit session.
    Label {
        session: Option<String>,
        label: String,
    },
    /// Reset the current session.
    Reset,
    /// List live sessions.
    Sessions,
    /// Stop the loop.
    Quit,
}

/// Error for lines that look like commands but are malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ParseError(pub String);

/// Parses a line. `Ok(None)` means the line carries nothing to do.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    if let Some(directive) = line.strip_prefix(':') {
        return match directive {
            "reset" => Ok(Some(Command::Reset)),
            "sessions" => Ok(Some(Command::Sessions)),
            "quit" | "q" => Ok(Some(Command::Quit)),
            other => Err(ParseError(format!("unknown directive ':{}'", other))),
        };
    }

    if let Some(rest) = line.strip_prefix('@') {
        let mut parts = rest.splitn(2, char::is_whitespace);
        let session = parts.next().unwrap_or_default();
        let label = parts.next().map(str::trim).unwrap_or_default();
        if session.is_empty() || label.is_empty() {
            return Err(ParseError("expected '@<session> <label>'".to_string()));
        }
        return Ok(Some(Command::Label {
            session: Some(session.to_string()),
            label: label.to_string(),
        }));
    }

    Ok(Some(Command::Label {
        session: None,
        label: line.to_string(),
    }))
}
