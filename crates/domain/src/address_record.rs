use crate::hostname::HostnameResolver;
use std::cell::OnceCell;
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// A MAC/IP pair read from the neighbor table, with a host name that is
/// resolved on first access and then kept for the lifetime of the record.
///
/// The cached host name lives in a `OnceCell` with no lock around it, so a
/// record is `Send` but not `Sync`: it can be handed to another thread, but
/// two threads can never race on the lazy lookup of the same instance.
/// Clones carry the cached outcome with them.
#[derive(Clone)]
pub struct AddressRecord {
    mac_address: Arc<str>,
    ip_address: Arc<str>,
    host_name: OnceCell<Option<Arc<str>>>,
    resolver: Arc<dyn HostnameResolver>,
}

impl AddressRecord {
    pub fn new(
        mac_address: impl Into<Arc<str>>,
        ip_address: impl Into<Arc<str>>,
        resolver: Arc<dyn HostnameResolver>,
    ) -> Self {
        Self {
            mac_address: mac_address.into(),
            ip_address: ip_address.into(),
            host_name: OnceCell::new(),
            resolver,
        }
    }

    pub fn mac_address(&self) -> &str {
        &self.mac_address
    }

    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }

    /// Case-insensitive MAC comparison; no format normalisation beyond case.
    pub fn matches_mac(&self, mac_address: &str) -> bool {
        self.mac_address.to_lowercase() == mac_address.to_lowercase()
    }

    /// Host name for this record's IP, resolved at most once.
    ///
    /// Resolution failures are cached as `None` and never retried.
    pub fn host_name(&self) -> Option<&str> {
        self.host_name
            .get_or_init(|| self.resolve_host_name())
            .as_deref()
    }

    /// Whether `host_name` has already been evaluated for this record.
    pub fn is_host_name_resolved(&self) -> bool {
        self.host_name.get().is_some()
    }

    fn resolve_host_name(&self) -> Option<Arc<str>> {
        if self.ip_address.is_empty() {
            return None;
        }

        let ip: IpAddr = match self.ip_address.parse() {
            Ok(ip) => ip,
            Err(e) => {
                debug!(ip = %self.ip_address, error = %e, "Not an IP address, skipping reverse lookup");
                return None;
            }
        };

        match self.resolver.resolve_hostname(ip) {
            Ok(Some(hostname)) if !hostname.is_empty() && hostname.as_str() != &*self.ip_address => {
                debug!(ip = %ip, hostname = %hostname, "Reverse lookup successful");
                Some(Arc::from(hostname))
            }
            Ok(_) => {
                debug!(ip = %ip, "Reverse lookup returned no name");
                None
            }
            Err(e) => {
                debug!(ip = %ip, error = %e, "Reverse lookup failed");
                None
            }
        }
    }
}

impl PartialEq for AddressRecord {
    fn eq(&self, other: &Self) -> bool {
        self.mac_address == other.mac_address && self.ip_address == other.ip_address
    }
}

impl Eq for AddressRecord {}

impl fmt::Debug for AddressRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressRecord")
            .field("mac_address", &self.mac_address)
            .field("ip_address", &self.ip_address)
            .field("host_name", &self.host_name.get())
            .finish()
    }
}
