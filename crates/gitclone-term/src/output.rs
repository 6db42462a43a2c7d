use std::io::{self, Write};
use std::result::Result as StdResult;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use thiserror::Error;

/// Errors produced by [`Output`] implementations while writing to the terminal.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Underlying I/O error while writing to the terminal.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias for output operations.
pub type Result<T> = StdResult<T, OutputError>;

/// Abstraction over how user-facing status messages are produced.
///
/// Implementations can render to a terminal or suppress output entirely.
pub trait Output: Send + Sync {
    /// Print an informational message.
    fn message(&self, msg: &str) -> Result<()>;
    /// Print a success message.
    fn success(&self, msg: &str) -> Result<()>;
    /// Print an error/failure message.
    fn fail(&self, msg: &str) -> Result<()>;
    /// Flush any buffered output.
    fn finish(&self) -> Result<()>;
}

/// Output implementation that suppresses all messages.
pub struct Quiet;

impl Output for Quiet {
    fn message(&self, _msg: &str) -> Result<()> {
        Ok(())
    }

    fn success(&self, _msg: &str) -> Result<()> {
        Ok(())
    }

    fn fail(&self, _msg: &str) -> Result<()> {
        Ok(())
    }

    fn finish(&self) -> Result<()> {
        Ok(())
    }
}

/// Color-capable terminal renderer for status messages.
///
/// Informational and success messages go to stdout; failures go to stderr.
pub struct Terminal {
    /// Whether ANSI colors are emitted.
    color_choice: ColorChoice,
}

impl Terminal {
    /// Create a new terminal output.
    ///
    /// - `color`: when `true`, always render colored output; when `false`,
    ///   disable ANSI colors.
    pub fn new(color: bool) -> Self {
        let color_choice = if color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self { color_choice }
    }

    /// Render `msg` in `color` on `stream`.
    fn write_colored(mut stream: StandardStream, msg: &str, color: Color) -> Result<()> {
        stream.set_color(ColorSpec::new().set_fg(Some(color)))?;
        writeln!(stream, "{msg}")?;
        stream.reset()?;
        stream.flush()?;
        Ok(())
    }
}

impl Output for Terminal {
    fn message(&self, msg: &str) -> Result<()> {
        Self::write_colored(StandardStream::stdout(self.color_choice), msg, Color::Cyan)
    }

    fn success(&self, msg: &str) -> Result<()> {
        Self::write_colored(StandardStream::stdout(self.color_choice), msg, Color::Green)
    }

    fn fail(&self, msg: &str) -> Result<()> {
        Self::write_colored(StandardStream::stderr(self.color_choice), msg, Color::Red)
    }

    fn finish(&self) -> Result<()> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}
