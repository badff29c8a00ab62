use thiserror::Error;

/// Everything that can go wrong while turning modification names into hooks
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HackError {
    /// A parametrized modification got a value outside its range
    #[error("invalid parameter '{value}' for modification '{modification}'")]
    InvalidParameter { modification: String, value: String },

    #[error("unknown game '{0}'")]
    UnknownGame(String),

    /// A RAM dump could not be parsed
    #[error("bad RAM dump: {0}")]
    BadRamDump(String),
}
