pub mod dig_command;
pub mod lookup_records;

pub use dig_command::{DigCommand, DigCommandUseCase};
pub use lookup_records::LookupRecordsUseCase;
