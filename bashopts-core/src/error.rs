/// The Error type for the bashopts-core crate.
///
/// Every variant carries the offending spec token, as given by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The kind after `=` is not one of `s`, `i`, `s@` or `i@`.
    UnknownKind(String),
    /// The default after `;` is not valid for the declared kind.
    InvalidDefault(String),
    /// The name or one of the aliases is empty, starts with `-`, contains characters outside
    /// `[A-Za-z0-9_-]` or repeats another spelling.
    InvalidName(String),
}

/// The Result type for the bashopts-core crate.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// The spec token that failed to parse.
    pub fn token(&self) -> &str {
        match self {
            Error::UnknownKind(token) | Error::InvalidDefault(token) | Error::InvalidName(token) => {
                token
            }
        }
    }
}

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::UnknownKind(token) => write!(f, "unknown kind in {token}"),
            Error::InvalidDefault(token) => write!(f, "invalid default in {token}"),
            Error::InvalidName(token) => write!(f, "invalid name in {token}"),
        }
    }
}
