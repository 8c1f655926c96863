//! Per-instance identity for scroll proxies.
//!
//! Every proxy mints a [`ProxyId`] when it is constructed. The same id names the
//! proxy's private coordinate space (so geometry reports from sibling or nested
//! proxies never mix) and identifies the proxy as the owner of a container's
//! scroll listener slot.

use std::fmt;

use uuid::Uuid;

/// Unique identifier for one scroll proxy instance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProxyId(Uuid);

impl ProxyId {
    /// Mint a fresh, random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Name of the coordinate space owned by this proxy.
    ///
    /// Hosts that name coordinate spaces with strings (for example a
    /// `coordinate_space("...")` view modifier) should use this name when
    /// measuring regions for the proxy.
    pub fn space_name(&self) -> String {
        format!("scroll-proxy:{}", self.0)
    }
}

impl Default for ProxyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProxyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A named coordinate space private to one proxy
///
/// Rectangles are only comparable when they were measured in the same space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoordinateSpace(ProxyId);

impl CoordinateSpace {
    pub(crate) fn of(proxy: ProxyId) -> Self {
        Self(proxy)
    }

    /// The proxy that owns this space
    pub fn owner(&self) -> ProxyId {
        self.0
    }

    /// String name of the space
    pub fn name(&self) -> String {
        self.0.space_name()
    }
}

impl fmt::Display for CoordinateSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
