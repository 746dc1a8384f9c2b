use std::{num::ParseIntError, path::PathBuf, str::Utf8Error};

use thiserror::Error;

/// Why a single token couldn't be read as an integer.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error(transparent)]
    Int(#[from] ParseIntError),
    #[error("not valid UTF-8")]
    Utf8(#[from] Utf8Error),
}

/// A token that isn't a base-10 integer.
///
/// Owns every integer parsed before the bad token.
#[derive(Debug, Error)]
#[error("line {line}: invalid integer {token:?}")]
pub struct ParseError {
    line: usize,
    token: String,
    parsed: Vec<i64>,
    #[source]
    source: TokenError,
}

impl ParseError {
    pub(crate) fn new(line: usize, token: String, parsed: Vec<i64>, source: TokenError) -> Self {
        ParseError {
            line,
            token,
            parsed,
            source,
        }
    }

    /// 1-based line the bad token was found on.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The bad token, lossily decoded if it wasn't UTF-8.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The integers read before the bad token, in input order.
    pub fn parsed(&self) -> &[i64] {
        &self.parsed
    }

    pub fn cause(&self) -> &TokenError {
        &self.source
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    /// The file couldn't be opened, or a read failed partway through.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Rendered as `<path>:<line>: invalid integer "<token>": <cause>`.
    #[error(
        "{}:{}: invalid integer {:?}: {}",
        path.display(),
        error.line(),
        error.token(),
        error.cause()
    )]
    Parse { path: PathBuf, error: ParseError },
}

impl LoadError {
    /// The integers read before the failure. Always empty for I/O errors.
    pub fn parsed(&self) -> &[i64] {
        match self {
            LoadError::Io { .. } => &[],
            LoadError::Parse { error, .. } => error.parsed(),
        }
    }
}
