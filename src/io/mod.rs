pub mod csv_store;
pub mod error;
pub mod seed;

pub use csv_store::{write_table, CsvStore};
pub use error::StoreError;
