use crate::system::{ArpCommandFetcher, SystemHostnameResolver, WhitespaceTableParser};
use neighbor_lookup_application::ports::{
    HostnameResolver, NeighborTableFetcher, NeighborTableParser,
};
use neighbor_lookup_application::use_cases::{FindByMacUseCase, ListAddressRecordsUseCase};
use neighbor_lookup_domain::{
    AddressRecord, ConfigError, LookupConfig, LookupError, NullHostnameResolver,
};
use std::sync::Arc;

/// Entry point for MAC to IP / host name lookups against the local neighbor table.
///
/// Every call takes a fresh dump of the table; nothing is cached between calls.
pub struct NeighborLookup {
    list_all: Arc<ListAddressRecordsUseCase>,
    find_by_mac: FindByMacUseCase,
}

impl NeighborLookup {
    pub fn from_config(config: &LookupConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Platform default table command with reverse DNS enabled.
    pub fn system_default() -> Self {
        Self::build(&LookupConfig::default())
    }

    pub fn with_ports(
        fetcher: Arc<dyn NeighborTableFetcher>,
        parser: Arc<dyn NeighborTableParser>,
    ) -> Self {
        let list_all = Arc::new(ListAddressRecordsUseCase::new(fetcher, parser));
        let find_by_mac = FindByMacUseCase::new(list_all.clone());
        Self {
            list_all,
            find_by_mac,
        }
    }

    fn build(config: &LookupConfig) -> Self {
        let resolver: Arc<dyn HostnameResolver> = if config.hostnames.enabled {
            Arc::new(SystemHostnameResolver::new())
        } else {
            Arc::new(NullHostnameResolver)
        };

        let fetcher = Arc::new(ArpCommandFetcher::new(config.table.clone()));
        let parser = Arc::new(WhitespaceTableParser::new(config.table.layout, resolver));
        Self::with_ports(fetcher, parser)
    }

    pub fn list_all(&self) -> Result<Vec<AddressRecord>, LookupError> {
        self.list_all.execute()
    }

    pub fn find_by_mac(&self, mac_address: &str) -> Result<Option<AddressRecord>, LookupError> {
        self.find_by_mac.execute(mac_address)
    }
}

impl Default for NeighborLookup {
    fn default() -> Self {
        Self::system_default()
    }
}
