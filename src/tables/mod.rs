//! Loading the roster and the per-day timetables from CSV files.

pub mod encoding;
pub mod loader;
pub mod memory;
pub mod source;

pub use loader::{load_roster, load_session_table};
pub use memory::StaticTableSource;
pub use source::{FsTableSource, TableSource};
