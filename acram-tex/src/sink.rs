//! Destinations for finished LaTeX documents.

use log::{debug, info};
use std::{
    fmt,
    fs,
    io::{self, Write},
    path::PathBuf,
    process::{Command, Stdio},
};

/// An error that can occur while handing a document to a [`TexSink`].
#[derive(Debug)]
pub enum SinkError {
    /// The typesetting process could not be started.
    Spawn(io::Error),

    /// The document could not be written to the typesetting process or to a file.
    Write(io::Error),

    /// The typesetting process exited unsuccessfully. The exit code is missing if the process
    /// was terminated by a signal.
    Status(Option<i32>),
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Spawn(err) => write!(f, "could not start the typesetter: {}", err),
            SinkError::Write(err) => write!(f, "could not write the document: {}", err),
            SinkError::Status(Some(code)) => write!(f, "the typesetter exited with code {}", code),
            SinkError::Status(None) => write!(f, "the typesetter was terminated"),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SinkError::Spawn(err) | SinkError::Write(err) => Some(err),
            SinkError::Status(_) => None,
        }
    }
}

/// Something that accepts the full source of a LaTeX document.
pub trait TexSink {
    /// Hands the document to the sink.
    fn render(&mut self, document: &str) -> Result<(), SinkError>;
}

/// Typesets documents by piping them into an external `pdflatex` process, which writes
/// `<jobname>.pdf` to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfLatex {
    /// The command to run.
    pub command: String,

    /// The base name of the files written by the typesetter.
    pub jobname: String,
}

impl PdfLatex {
    /// Creates a sink that runs the given command with the given job name.
    pub fn new(command: impl Into<String>, jobname: impl Into<String>) -> Self {
        Self { command: command.into(), jobname: jobname.into() }
    }
}

impl TexSink for PdfLatex {
    fn render(&mut self, document: &str) -> Result<(), SinkError> {
        debug!("running `{} -jobname {}`", self.command, self.jobname);
        let mut child = Command::new(&self.command)
            .arg("-interaction=nonstopmode")
            .arg("-jobname")
            .arg(&self.jobname)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(SinkError::Spawn)?;

        // stdin is closed when dropped, so the typesetter sees the end of the document
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(document.as_bytes()),
            None => Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin was not captured")),
        };
        let status = child.wait().map_err(SinkError::Write)?;
        written.map_err(SinkError::Write)?;

        if status.success() {
            info!("typeset {}.pdf", self.jobname);
            Ok(())
        } else {
            Err(SinkError::Status(status.code()))
        }
    }
}

/// Writes documents verbatim to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainFile {
    pub path: PathBuf,
}

impl PlainFile {
    /// Creates a sink that writes to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a sink that writes to `<jobname>.tex` in the working directory.
    pub fn for_job(jobname: &str) -> Self {
        Self::new(format!("{}.tex", jobname))
    }
}

impl TexSink for PlainFile {
    fn render(&mut self, document: &str) -> Result<(), SinkError> {
        fs::write(&self.path, document).map_err(SinkError::Write)?;
        info!("wrote {}", self.path.display());
        Ok(())
    }
}
