//! Service settings loaded via OrthoConfig.
//!
//! Values come from `NOTES_*` environment variables, command-line flags or a
//! configuration file, with the accessors below supplying defaults for
//! anything left unset.

use std::net::{IpAddr, SocketAddr};

use actix_web::http::header::{HeaderName, InvalidHeaderName};
use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::inbound::http::response_shape::ResponseShaping;

const DEFAULT_MARKER_HEADER: &str = "X-Full-Note";
const DEFAULT_PREVIEW_LENGTH: usize = 20;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Errors raised while turning raw settings into runtime values.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The marker header is not a valid HTTP header name.
    #[error("invalid marker header name {name:?}: {source}")]
    InvalidMarkerHeader {
        /// The configured value.
        name: String,
        /// Parser failure.
        #[source]
        source: InvalidHeaderName,
    },
    /// The host is not an IP address.
    #[error("invalid bind host {host:?}: {source}")]
    InvalidHost {
        /// The configured value.
        host: String,
        /// Parser failure.
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Settings for the notes service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "NOTES")]
pub struct NotesSettings {
    /// Header whose presence selects full JSON note responses.
    pub marker_header: Option<String>,
    /// Maximum number of characters in a plain-text preview.
    pub preview_length: Option<usize>,
    /// Interface address to listen on.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
}

impl NotesSettings {
    /// Return the validated marker header name.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidMarkerHeader`] when the configured
    /// name contains characters not permitted in header names.
    pub fn marker_header(&self) -> Result<HeaderName, SettingsError> {
        let name = self
            .marker_header
            .as_deref()
            .unwrap_or(DEFAULT_MARKER_HEADER)
            .trim();
        HeaderName::try_from(name).map_err(|source| SettingsError::InvalidMarkerHeader {
            name: name.to_owned(),
            source,
        })
    }

    /// Return the configured preview length, falling back to the default.
    pub fn preview_length(&self) -> usize {
        self.preview_length.unwrap_or(DEFAULT_PREVIEW_LENGTH)
    }

    /// Return the socket address to bind.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST).trim();
        let ip: IpAddr = host.parse().map_err(|source| SettingsError::InvalidHost {
            host: host.to_owned(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Build the response shaping rules for the HTTP adapter.
    ///
    /// # Errors
    /// Propagates marker header validation failures.
    pub fn response_shaping(&self) -> Result<ResponseShaping, SettingsError> {
        Ok(ResponseShaping::new(
            self.marker_header()?,
            self.preview_length(),
        ))
    }
}
