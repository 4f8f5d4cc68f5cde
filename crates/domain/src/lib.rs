//! Neighbor Lookup Domain Layer
pub mod address_record;
pub mod config;
pub mod errors;
pub mod hostname;

pub use address_record::AddressRecord;
pub use config::{ColumnLayout, ConfigError, HostnameConfig, LookupConfig, NeighborTableConfig};
pub use errors::{LookupError, TableFormatError};
pub use hostname::{HostnameResolver, NullHostnameResolver};
