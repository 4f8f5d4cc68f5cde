use neighbor_lookup_domain::LookupError;

/// Produces the raw text dump of the operating system's neighbor table.
pub trait NeighborTableFetcher: Send + Sync {
    fn fetch_neighbor_table(&self) -> Result<String, LookupError>;
}
