pub mod errors;
pub mod hostnames;
pub mod root;
pub mod table;

pub use errors::ConfigError;
pub use hostnames::HostnameConfig;
pub use root::LookupConfig;
pub use table::{ColumnLayout, NeighborTableConfig};
