//! KNXnet/IP service identifiers for the connection-lifecycle frames.
//!
//! The outer envelope carries one of these to tell the receiver which body
//! decoder to run. Building and dispatching that envelope is left to the
//! session layer.

use std::fmt;

/// 16-bit service type identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceId(pub u16);

/// Connection request.
pub const CONN_REQ: ServiceId = ServiceId(0x0205);

/// Connection response.
pub const CONN_RES: ServiceId = ServiceId(0x0206);

/// Connection state request (heartbeat).
pub const CONN_STATE_REQ: ServiceId = ServiceId(0x0207);

/// Connection state response.
pub const CONN_STATE_RES: ServiceId = ServiceId(0x0208);

/// Disconnect request.
pub const DISC_REQ: ServiceId = ServiceId(0x0209);

/// Disconnect response.
pub const DISC_RES: ServiceId = ServiceId(0x020A);

/// Returns a stable name for a service identifier.
pub fn service_name(id: ServiceId) -> &'static str {
    match id {
        CONN_REQ => "CONN_REQ",
        CONN_RES => "CONN_RES",
        CONN_STATE_REQ => "CONN_STATE_REQ",
        CONN_STATE_RES => "CONN_STATE_RES",
        DISC_REQ => "DISC_REQ",
        DISC_RES => "DISC_RES",
        _ => "UNKNOWN",
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:#06x})", service_name(*self), self.0)
    }
}

impl From<u16> for ServiceId {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<ServiceId> for u16 {
    fn from(id: ServiceId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_known_services() {
        assert_eq!(service_name(CONN_REQ), "CONN_REQ");
        assert_eq!(service_name(DISC_RES), "DISC_RES");
        assert_eq!(service_name(ServiceId(0x0420)), "UNKNOWN");
    }

    #[test]
    fn display_includes_raw_value() {
        assert_eq!(CONN_STATE_RES.to_string(), "CONN_STATE_RES (0x0208)");
    }
}
