pub mod arp_command;
pub mod hostname_resolver;
pub mod table_parser;

pub use arp_command::ArpCommandFetcher;
pub use hostname_resolver::SystemHostnameResolver;
pub use table_parser::WhitespaceTableParser;
