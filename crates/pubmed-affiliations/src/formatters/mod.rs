//! Output formatters for CSV files and console printing.

mod console;
mod csv_file;

pub use console::{OutputFormat, format_record_text, print_records};
pub use csv_file::{read_csv, read_csv_from, to_csv_string, write_csv, write_csv_to};
