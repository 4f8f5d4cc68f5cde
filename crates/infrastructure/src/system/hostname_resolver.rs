use dns_lookup::lookup_addr;
use neighbor_lookup_application::ports::HostnameResolver;
use std::io;
use std::net::IpAddr;
use tracing::debug;

/// Reverse lookups through the operating system resolver (`getnameinfo`).
///
/// Blocks until the system resolver answers; there is no timeout of our own.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHostnameResolver;

impl SystemHostnameResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn ip_to_reverse_domain(ip: &IpAddr) -> String {
        match ip {
            IpAddr::V4(ipv4) => {
                let octets = ipv4.octets();
                format!(
                    "{}.{}.{}.{}.in-addr.arpa",
                    octets[3], octets[2], octets[1], octets[0]
                )
            }
            IpAddr::V6(ipv6) => {
                let mut nibbles = Vec::with_capacity(32);
                for byte in ipv6.octets().iter().rev() {
                    nibbles.push(format!("{:x}", byte & 0x0f));
                    nibbles.push(format!("{:x}", (byte >> 4) & 0x0f));
                }
                format!("{}.ip6.arpa", nibbles.join("."))
            }
        }
    }
}

impl HostnameResolver for SystemHostnameResolver {
    fn resolve_hostname(&self, ip: IpAddr) -> io::Result<Option<String>> {
        debug!(
            ip = %ip,
            reverse_domain = %Self::ip_to_reverse_domain(&ip),
            "Performing PTR lookup"
        );

        let hostname = lookup_addr(&ip)?;

        // getnameinfo falls back to the numeric form when no PTR record exists
        if hostname.parse::<IpAddr>().is_ok() {
            debug!(ip = %ip, "PTR lookup returned no records");
            return Ok(None);
        }

        Ok(Some(hostname))
    }
}
