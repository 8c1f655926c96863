//! Error types for scrollproxy

use thiserror::Error;

use crate::container::ListenerOwner;
use crate::id::ProxyId;

/// Errors reported by scroll proxy operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScrollProxyError {
    /// The container's scroll listener slot already belongs to another owner
    #[error("scroll container already has a scroll listener owned by {owner}")]
    ForeignListener { owner: ListenerOwner },

    /// The proxy is still bound to a different, live scroll container
    #[error("scroll proxy {proxy} is already bound to a different scroll container")]
    AlreadyBound { proxy: ProxyId },

    /// No rectangle has been registered for the requested region
    #[error("region {0} not found, make sure the view is registered with the scroll proxy")]
    RegionNotFound(String),

    /// An alignment name outside the supported set
    #[error("unknown alignment: {0}")]
    UnknownAlignment(String),

    /// Configuration could not be parsed
    #[error("invalid scroll proxy config: {0}")]
    Config(String),
}

impl From<toml::de::Error> for ScrollProxyError {
    fn from(err: toml::de::Error) -> Self {
        ScrollProxyError::Config(err.to_string())
    }
}

/// Result type for scrollproxy operations
pub type Result<T> = std::result::Result<T, ScrollProxyError>;
