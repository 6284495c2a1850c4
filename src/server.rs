use serde::{Deserialize, Serialize};

use crate::error::{PlexError, PlexResult};

pub const DEFAULT_SCHEME: &str = "http";
pub const DEFAULT_PORT: u16 = 32400;

/// Connection details for a remote Plex Media Server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlexServer {
    pub name: String,
    pub scheme: String,
    pub address: String,
    pub port: u16,
    /// Access token for this server, when it differs from the account token.
    pub token: Option<String>,
}

impl PlexServer {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scheme: DEFAULT_SCHEME.to_string(),
            address: address.into(),
            port: DEFAULT_PORT,
            token: None,
        }
    }

    pub fn url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.address, self.port)
    }

    pub fn serialize(&self) -> PlexResult<Vec<u8>> {
        bincode::serialize(self).map_err(PlexError::Serialize)
    }

    pub fn deserialize(bytes: &[u8]) -> PlexResult<Self> {
        bincode::deserialize(bytes).map_err(PlexError::Deserialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_uses_scheme_address_and_port() {
        let mut server = PlexServer::new("living-room", "192.168.1.20");
        assert_eq!(server.url(), "http://192.168.1.20:32400");

        server.scheme = "https".to_string();
        server.port = 443;
        assert_eq!(server.url(), "https://192.168.1.20:443");
    }

    #[test]
    fn serialized_form_is_lossless() {
        let mut server = PlexServer::new("nas", "plex.example.org");
        server.token = Some("server-token".to_string());

        let bytes = server.serialize().unwrap();
        assert_eq!(PlexServer::deserialize(&bytes).unwrap(), server);
    }

    #[test]
    fn truncated_bytes_fail_to_deserialize() {
        let bytes = PlexServer::new("nas", "10.0.0.2").serialize().unwrap();
        let err = PlexServer::deserialize(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, PlexError::Deserialize(_)));
    }
}
