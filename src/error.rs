use std::error::Error as StdError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidArgument {
        value: String,
        source: Option<String>,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> core::result::Result<(), std::fmt::Error> {
        match self {
            Error::InvalidArgument { value, source } => {
                if let Some(source) = source {
                    write!(
                        f,
                        "InvalidArgument {:?} from {}: must be a non-negative integer",
                        value, source
                    )
                } else {
                    write!(f, "InvalidArgument {:?}: must be a non-negative integer", value)
                }
            }
        }
    }
}

impl StdError for Error {}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_argument(value: String) -> Self {
        Error::InvalidArgument {
            value,
            source: None,
        }
    }

    pub fn invalid_argument_with_source(value: String, source: String) -> Self {
        Error::InvalidArgument {
            value,
            source: Some(source),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }

    /// Attaches the name of the failing operation, keeping any existing one.
    pub(crate) fn with_source(self, source: &str) -> Self {
        match self {
            Error::InvalidArgument {
                value,
                source: None,
            } => Error::invalid_argument_with_source(value, source.to_string()),
            other => other,
        }
    }
}
