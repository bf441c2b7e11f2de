pub mod error;
pub mod metric;
pub mod dataset;

// Convenience re-exports
pub use error::{RmseError, RmseResult};
pub use metric::rmse::{rmse, Rmse};
pub use metric::report::RmseReport;
pub use dataset::reference::reference_pair;
