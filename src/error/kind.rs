//! Failure classification at the resolver boundary.

use strum::{Display, EnumString};

/// Why the remote path did not produce a reply.
///
/// Every kind ends in a local fallback reply; the distinction only drives
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum FailureKind {
    /// No credential (or unusable configuration). Not logged as an error.
    ConfigurationAbsent,
    /// Network unreachable, connection reset, timeout.
    TransportFailure,
    /// The service answered with a non-2xx status.
    ProtocolFailure,
    /// 2xx status, but the body did not have the expected shape.
    MalformedResponse,
}

impl FailureKind {
    /// Whether this kind should be reported as a warning.
    pub fn is_diagnostic(&self) -> bool {
        !matches!(self, Self::ConfigurationAbsent)
    }
}
