//! Records exchanged with the content API.

mod record;
mod stats;

pub use record::Record;
pub use stats::{format_marker, CountUp, Stats, STATS_PATH};
