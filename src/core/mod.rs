pub mod clock;
pub mod indexer;
pub mod lookup;
pub mod matcher;
pub mod week;

pub use clock::{Clock, FixedClock, SystemClock};
pub use lookup::{Locator, handle_lookup};
pub use week::SchoolWeek;
