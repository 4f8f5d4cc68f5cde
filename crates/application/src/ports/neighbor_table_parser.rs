use neighbor_lookup_domain::{AddressRecord, LookupError};

/// Turns a raw neighbor table dump into address records, in table order.
pub trait NeighborTableParser: Send + Sync {
    fn parse_records(&self, raw: &str) -> Result<Vec<AddressRecord>, LookupError>;
}
