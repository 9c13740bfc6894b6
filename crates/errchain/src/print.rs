//! Printing an error chain node by node.

use crate::Error;
use crate::traverse::collect;
use std::fmt;
use std::io::{self, Write};

/// How each node is rendered when no custom formatter is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrintFormat {
    /// `Name: message`, optionally followed by the stack trace
    #[default]
    Display,

    /// The multi-line `Debug` block
    Debug,

    /// One JSON object per node, as produced by [`Error::to_object`]
    Json,
}

impl fmt::Display for PrintFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrintFormat::Display => write!(f, "display"),
            PrintFormat::Debug => write!(f, "debug"),
            PrintFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for PrintFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "display" => Ok(PrintFormat::Display),
            "debug" => Ok(PrintFormat::Debug),
            "json" => Ok(PrintFormat::Json),
            other => Err(format!(
                "Unknown format: {}. Use 'display', 'debug', or 'json'",
                other
            )),
        }
    }
}

/// Options for the default rendering.
#[derive(Debug, Clone, Default)]
pub struct PrintConfig {
    /// Output format
    pub format: PrintFormat,

    /// Append stack frame lines (display format only)
    pub include_stack: bool,
}

impl PrintConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set output format
    pub fn with_format(mut self, format: PrintFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable/disable stack frame lines
    pub fn with_stack(mut self, enabled: bool) -> Self {
        self.include_stack = enabled;
        self
    }
}

/// Render a single node (not its chain) with the given config.
pub fn render(err: &Error, config: &PrintConfig) -> io::Result<String> {
    match config.format {
        PrintFormat::Display => {
            let mut out = err.to_string();
            if config.include_stack {
                for line in err.stack_trace() {
                    out.push_str("\n    ");
                    out.push_str(line);
                }
            }
            Ok(out)
        }
        PrintFormat::Debug => Ok(format!("{:?}", err).trim_end().to_string()),
        PrintFormat::Json => Ok(serde_json::to_string(&err.to_object())?),
    }
}

/// Writes every node of a chain to a sink, in traversal order.
pub struct Printer<W: Write> {
    writer: W,
    config: PrintConfig,
}

impl Printer<io::Stderr> {
    /// A printer writing to standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Printer<W> {
    /// A printer writing to `writer` with the default config.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            config: PrintConfig::default(),
        }
    }

    /// Replace the print config
    pub fn with_config(mut self, config: PrintConfig) -> Self {
        self.config = config;
        self
    }

    /// Print every node with the default rendering.
    pub fn print(&mut self, err: &Error) -> io::Result<()> {
        for node in collect(err) {
            let text = render(node, &self.config)?;
            writeln!(self.writer, "{}", text)?;
        }
        self.writer.flush()
    }

    /// Print every node with a caller-supplied formatter.
    pub fn print_with<F>(&mut self, err: &Error, mut format: F) -> io::Result<()>
    where
        F: FnMut(&Error) -> String,
    {
        for node in collect(err) {
            writeln!(self.writer, "{}", format(node))?;
        }
        self.writer.flush()
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Print every node of the chain to standard error.
pub fn print_error(err: &Error) -> io::Result<()> {
    Printer::stderr().print(err)
}

/// Print every node of the chain to standard error using `format`.
pub fn print_error_with<F>(err: &Error, format: F) -> io::Result<()>
where
    F: FnMut(&Error) -> String,
{
    Printer::stderr().print_with(err, format)
}
