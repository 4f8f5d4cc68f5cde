use super::ListAddressRecordsUseCase;
use neighbor_lookup_domain::{AddressRecord, LookupError};
use std::sync::Arc;
use tracing::debug;

/// Use case: find the neighbor table entry for a MAC address
pub struct FindByMacUseCase {
    list: Arc<ListAddressRecordsUseCase>,
}

impl FindByMacUseCase {
    pub fn new(list: Arc<ListAddressRecordsUseCase>) -> Self {
        Self { list }
    }

    /// First entry in table order whose MAC matches, ignoring case.
    /// `Ok(None)` when the table has no such entry.
    pub fn execute(&self, mac_address: &str) -> Result<Option<AddressRecord>, LookupError> {
        let record = self
            .list
            .execute()?
            .into_iter()
            .find(|record| record.matches_mac(mac_address));

        match &record {
            Some(found) => debug!(mac = mac_address, ip = found.ip_address(), "MAC found in neighbor table"),
            None => debug!(mac = mac_address, "MAC not present in neighbor table"),
        }

        Ok(record)
    }
}
