use acram_tex::SinkError;
use rustyline::error::ReadlineError;
use std::{fmt, io, path::PathBuf};

/// Utility enum to package the errors that abort a whole run.
///
/// Errors in a single definition are not among them: they are reported and the run moves on to
/// the next definition.
#[derive(Debug)]
pub enum Error {
    /// None of the input files given on the command line could be read.
    NoInputFile(Vec<PathBuf>),

    /// An option that needs a value was the last argument.
    MissingValue(&'static str),

    /// An unrecognized option was given.
    UnknownOption(String),

    /// Reading the standard input failed.
    Io(io::Error),

    /// The interactive prompt failed.
    Readline(ReadlineError),

    /// The document could neither be typeset nor saved.
    Sink(SinkError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoInputFile(paths) if paths.is_empty() => write!(f, "no input files were given"),
            Self::NoInputFile(paths) => {
                write!(f, "none of the input files could be read:")?;
                paths.iter().try_for_each(|path| write!(f, " {}", path.display()))
            },
            Self::MissingValue(option) => write!(f, "option `{}` needs a value", option),
            Self::UnknownOption(option) => write!(f, "unknown option `{}`", option),
            Self::Io(err) => write!(f, "{}", err),
            Self::Readline(err) => write!(f, "{}", err),
            Self::Sink(err) => write!(f, "{}", err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ReadlineError> for Error {
    fn from(err: ReadlineError) -> Self {
        Self::Readline(err)
    }
}

impl From<SinkError> for Error {
    fn from(err: SinkError) -> Self {
        Self::Sink(err)
    }
}
