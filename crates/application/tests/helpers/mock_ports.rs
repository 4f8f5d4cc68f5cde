use neighbor_lookup_application::ports::{
    HostnameResolver, NeighborTableFetcher, NeighborTableParser,
};
use neighbor_lookup_domain::{AddressRecord, LookupError, TableFormatError};
use std::collections::HashMap;
use std::io;
use std::net::IpAddr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

pub struct MockNeighborTableFetcher {
    output: RwLock<String>,
    call_count: AtomicU64,
    should_fail: AtomicBool,
}

impl MockNeighborTableFetcher {
    pub fn new() -> Self {
        Self::with_output("")
    }

    pub fn with_output(output: &str) -> Self {
        Self {
            output: RwLock::new(output.to_string()),
            call_count: AtomicU64::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }

    pub fn set_output(&self, output: &str) {
        *self.output.write().unwrap() = output.to_string();
    }
}

impl NeighborTableFetcher for MockNeighborTableFetcher {
    fn fetch_neighbor_table(&self) -> Result<String, LookupError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(LookupError::external_tool(
                "arp -a",
                io::Error::new(io::ErrorKind::NotFound, "arp: command not found"),
            ));
        }
        Ok(self.output.read().unwrap().clone())
    }
}

/// Reads `ip mac` pairs, one per line, attaching the given resolver.
pub struct MockNeighborTableParser {
    resolver: Arc<dyn HostnameResolver>,
    call_count: AtomicU64,
    should_fail: AtomicBool,
}

impl MockNeighborTableParser {
    pub fn new(resolver: Arc<dyn HostnameResolver>) -> Self {
        Self {
            resolver,
            call_count: AtomicU64::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }
}

impl NeighborTableParser for MockNeighborTableParser {
    fn parse_records(&self, raw: &str) -> Result<Vec<AddressRecord>, LookupError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(TableFormatError::EmptyRow.into());
        }
        Ok(raw
            .lines()
            .filter_map(|line| {
                let mut tokens = line.split_whitespace();
                let ip = tokens.next()?;
                let mac = tokens.next()?;
                Some(AddressRecord::new(mac, ip, self.resolver.clone()))
            })
            .collect())
    }
}

pub struct MockHostnameResolver {
    responses: RwLock<HashMap<IpAddr, Option<String>>>,
    call_count: AtomicU64,
    should_fail: AtomicBool,
}

impl MockHostnameResolver {
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            call_count: AtomicU64::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_response(&self, ip: &str, hostname: Option<&str>) {
        self.responses
            .write()
            .unwrap()
            .insert(ip.parse().unwrap(), hostname.map(|h| h.to_string()));
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }
}

impl HostnameResolver for MockHostnameResolver {
    fn resolve_hostname(&self, ip: IpAddr) -> io::Result<Option<String>> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(io::Error::new(io::ErrorKind::TimedOut, "resolver timed out"));
        }
        Ok(self.responses.read().unwrap().get(&ip).cloned().flatten())
    }
}
