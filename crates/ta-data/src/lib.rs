//! Daily price history sources.

mod csv_source;
mod symbol;

pub use csv_source::CsvPriceSource;
pub use symbol::normalize_symbol;
