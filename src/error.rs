use std::net::SocketAddr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Couldn't load site configuration: {0}")]
    Config(String),
    #[error("Couldn't bind to {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Server stopped unexpectedly")]
    Serve(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_bind_error_keeps_source() {
        let err = SiteError::Bind {
            addr: "127.0.0.1:3000".parse().unwrap(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use"),
        };
        assert_eq!(err.to_string(), "Couldn't bind to 127.0.0.1:3000");
        assert_eq!(err.source().unwrap().to_string(), "in use");
    }

    #[test]
    fn test_config_error_message() {
        let err = SiteError::Config("missing [package.metadata.leptos]".to_string());
        assert_eq!(
            err.to_string(),
            "Couldn't load site configuration: missing [package.metadata.leptos]"
        );
    }
}
