use derive_more::From;

/// Error types that can occur while generating option-parsing code.
#[derive(Debug, From)]
pub enum Error {
    /// No spec tokens were given.
    MissingSpecs,

    /// A spec token failed to parse.
    #[from]
    Spec(bashopts_core::Error),

    /// An I/O error occurred while writing the output.
    #[from]
    Io(std::io::Error),

    /// The parsed specs could not be serialized.
    #[from]
    Json(serde_json::Error),
}

/// The Result type for the bashopts-codegen crate.
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::MissingSpecs => write!(f, "No spec arguments specified"),
            Error::Spec(e) => write!(f, "{e}"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Json(e) => write!(f, "Failed to serialize specs: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MissingSpecs => None,
            Error::Spec(e) => std::error::Error::source(e),
            Error::Io(e) => Some(e),
            Error::Json(e) => Some(e),
        }
    }
}
