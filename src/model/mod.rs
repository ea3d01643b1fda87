mod catalogue;
mod entry;
mod live;
mod standings;
mod stats;

pub use catalogue::*;
pub use entry::*;
pub use live::*;
pub use standings::*;
pub use stats::*;
