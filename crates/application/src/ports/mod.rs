mod neighbor_table_fetcher;
mod neighbor_table_parser;

pub use neighbor_table_fetcher::NeighborTableFetcher;
pub use neighbor_table_parser::NeighborTableParser;

// Re-export for convenience
pub use neighbor_lookup_domain::HostnameResolver;
