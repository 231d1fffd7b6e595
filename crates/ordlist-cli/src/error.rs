use std::fmt;
use std::io;

use ordlist::ConfigError;

/// Errors that end an interactive session.
#[derive(Debug)]
pub enum CliError {
    /// Reading the input or writing the output failed.
    Io(io::Error),
    /// A date-order setting could not be understood.
    Config(ConfigError),
    /// The command line itself was malformed.
    Usage(String),
}

impl CliError {
    /// Process exit code reported for this error.
    ///
    /// Usage and configuration mistakes exit with `2`, I/O failures with `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io(_) => 1,
            CliError::Config(_) | CliError::Usage(_) => 2,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Config(err) => write!(f, "configuration error: {err}"),
            CliError::Usage(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(err) => Some(err),
            CliError::Config(err) => Some(err),
            CliError::Usage(_) => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let io = CliError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(io.exit_code(), 1);
        assert_eq!(CliError::Usage("bad".to_string()).exit_code(), 2);

        let config = CliError::from(ConfigError::UnknownDateOrder("qq".to_string()));
        assert_eq!(config.exit_code(), 2);
        assert!(config.to_string().contains("qq"));
    }
}
