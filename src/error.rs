/// Failure taxonomy of the statistics API, mirroring its status-code
/// envelope: `Ok` stands for code 0, every variant here is nonzero.
///
/// `Display` gives the envelope message; for `Internal` the underlying
/// cause stays reachable through [`std::error::Error::source`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Code 1: transport failure or a body that could not be decoded.
    #[error("Internal error.")]
    Internal(#[from] InternalError),

    /// Code 2: a player search resolved no current identifier.
    #[error("Unknown player.")]
    UnknownPlayer,

    /// Code 3: a faction search resolved no current identifier.
    #[error("Unknown faction.")]
    UnknownFaction,
}

impl Error {
    /// Numeric status code of this failure (successful calls never carry
    /// one; code 0 is implicit in `Ok`).
    pub fn status_code(&self) -> u8 {
        match self {
            Error::Internal(_) => 1,
            Error::UnknownPlayer => 2,
            Error::UnknownFaction => 3,
        }
    }
}

/// Causes folded into [`Error::Internal`].
#[derive(thiserror::Error, Debug)]
pub enum InternalError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("ranking indirection did not resolve after {0} redirects")]
    RankingIndirection(usize),
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Internal(source.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Internal(source.into())
    }
}
