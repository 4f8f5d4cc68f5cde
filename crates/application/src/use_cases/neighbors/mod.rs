pub mod find_by_mac;
pub mod list_address_records;

pub use find_by_mac::FindByMacUseCase;
pub use list_address_records::ListAddressRecordsUseCase;
