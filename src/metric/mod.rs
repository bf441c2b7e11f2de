pub mod rmse;
pub mod report;

pub use rmse::{rmse, Rmse};
pub use report::RmseReport;
