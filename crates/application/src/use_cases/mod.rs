pub mod lookup;

pub use lookup::{DigCommand, DigCommandUseCase, LookupRecordsUseCase};
