use std::net::IpAddr;

/// Reverse lookup of an IP address to a host name.
///
/// `Ok(None)` means the resolver answered but had no name for the address.
/// Callers treat `Err` as best-effort and never surface it.
pub trait HostnameResolver: Send + Sync {
    fn resolve_hostname(&self, ip: IpAddr) -> std::io::Result<Option<String>>;
}

/// Resolver used when host-name enrichment is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHostnameResolver;

impl HostnameResolver for NullHostnameResolver {
    fn resolve_hostname(&self, _ip: IpAddr) -> std::io::Result<Option<String>> {
        Ok(None)
    }
}
