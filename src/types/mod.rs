pub mod error;
pub mod identifiers;
pub mod record;

pub use error::{SeedingError, StoreOperation};
pub use identifiers::{CalendarDate, SeedHex, UserId};
pub use record::SeedRecord;
