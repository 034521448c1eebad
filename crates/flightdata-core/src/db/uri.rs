//! Database URI parsing.

use std::path::PathBuf;

use crate::error::{FlightDataError, Result};

const SQLITE_SCHEME: &str = "sqlite://";
const FILE_SCHEME: &str = "file:";

/// Where the SQLite store lives, as resolved from a connection URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// A filesystem path.
    Path(PathBuf),
    /// A SQLite `file:` URI, passed to the driver untouched.
    Uri(String),
}

impl DatabaseLocation {
    /// Parses a connection string.
    ///
    /// Accepts `sqlite:///relative/path`, `sqlite:////absolute/path`,
    /// `file:` URIs and bare paths. Other schemes, and `sqlite://` URIs that
    /// name a host or no file at all, are rejected.
    pub fn parse(uri: &str) -> Result<Self> {
        let trimmed = uri.trim();
        if trimmed.is_empty() {
            return Err(FlightDataError::connection(uri, "empty database URI").build());
        }

        if let Some(rest) = trimmed.strip_prefix(SQLITE_SCHEME) {
            let Some(path) = rest.strip_prefix('/') else {
                return Err(FlightDataError::connection(
                    uri,
                    "sqlite URIs take no host; expected sqlite:///path",
                )
                .build());
            };
            if path.is_empty() {
                return Err(
                    FlightDataError::connection(uri, "sqlite URI does not name a file").build(),
                );
            }
            return Ok(Self::Path(PathBuf::from(path)));
        }

        if trimmed.starts_with(FILE_SCHEME) {
            return Ok(Self::Uri(trimmed.to_string()));
        }

        if let Some((scheme, _)) = trimmed.split_once("://") {
            return Err(FlightDataError::connection(
                uri,
                format!("unsupported scheme '{scheme}', only sqlite is available"),
            )
            .build());
        }

        Ok(Self::Path(PathBuf::from(trimmed)))
    }
}
