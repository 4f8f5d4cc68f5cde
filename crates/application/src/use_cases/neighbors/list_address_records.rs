use crate::ports::{NeighborTableFetcher, NeighborTableParser};
use neighbor_lookup_domain::{AddressRecord, LookupError};
use std::sync::Arc;
use tracing::debug;

/// Use case: read every entry of the neighbor table
/// Fetches a fresh dump on every call; nothing is cached between calls.
pub struct ListAddressRecordsUseCase {
    fetcher: Arc<dyn NeighborTableFetcher>,
    parser: Arc<dyn NeighborTableParser>,
}

impl ListAddressRecordsUseCase {
    pub fn new(
        fetcher: Arc<dyn NeighborTableFetcher>,
        parser: Arc<dyn NeighborTableParser>,
    ) -> Self {
        Self { fetcher, parser }
    }

    pub fn execute(&self) -> Result<Vec<AddressRecord>, LookupError> {
        debug!("Reading neighbor table");

        let raw = self.fetcher.fetch_neighbor_table()?;
        let records = self.parser.parse_records(&raw)?;

        debug!(entries = records.len(), "Neighbor table read successfully");
        Ok(records)
    }
}
