//! Startup orchestration.
//!
//! # Responsibilities
//! - Resolve the configured bind address
//! - Bind the TCP listener and report the actual local address

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for startup operations.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid bind address {address:?}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Bind a TCP listener to the configured address.
pub async fn bind_listener(config: &ListenerConfig) -> Result<TcpListener, StartupError> {
    let address: SocketAddr =
        config
            .bind_address
            .parse()
            .map_err(|source| StartupError::InvalidAddress {
                address: config.bind_address.clone(),
                source,
            })?;

    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    if let Ok(local_addr) = listener.local_addr() {
        tracing::info!(address = %local_addr, "Listener bound");
    }

    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn binds_ephemeral_port() {
        let config = ListenerConfig {
            bind_address: "127.0.0.1:0".into(),
        };
        let listener = bind_listener(&config).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn rejects_bad_address() {
        let config = ListenerConfig {
            bind_address: "nowhere".into(),
        };
        let err = bind_listener(&config).await.unwrap_err();
        assert!(matches!(err, StartupError::InvalidAddress { .. }));
    }

    #[tokio::test]
    async fn reports_port_in_use() {
        let first = bind_listener(&ListenerConfig {
            bind_address: "127.0.0.1:0".into(),
        })
        .await
        .unwrap();
        let taken = first.local_addr().unwrap().to_string();

        let err = bind_listener(&ListenerConfig { bind_address: taken })
            .await
            .unwrap_err();
        assert!(matches!(err, StartupError::Bind { .. }));
    }
}
