use std::{fmt, io, path::PathBuf};

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// Everything that can stop a transfer or one of the utilities wrapped around it.
///
/// The `Display` text of each variant is the diagnostic printed on stderr.
#[derive(Debug)]
pub enum Error {
    /// Wrong number of command line operands; holds the program name
    Usage(String),
    OpenInput { path: PathBuf, source: io::Error },
    OpenOutput { path: PathBuf, source: io::Error },
    Read(io::Error),
    Write(io::Error),
}

impl Error {
    /// Process status a utility exits with after reporting this error
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// The underlying platform error, if any
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Error::Usage(_) => None,
            Error::OpenInput { source, .. } | Error::OpenOutput { source, .. } => Some(source),
            Error::Read(e) | Error::Write(e) => Some(e),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage(program) => write!(f, "usage: {program} <from>"),
            Error::OpenInput { path, source } => {
                write!(f, "error opening input {}: {source}", path.display())
            }
            Error::OpenOutput { path, source } => {
                write!(f, "error opening output {}: {source}", path.display())
            }
            Error::Read(e) => write!(f, "read error: {e}"),
            Error::Write(e) => write!(f, "write error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.io_error().map(|e| e as &(dyn std::error::Error + 'static))
    }
}
