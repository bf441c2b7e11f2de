pub mod reference;

pub use reference::{reference_pair, PREDICTIONS, TRUE_VALUES};
