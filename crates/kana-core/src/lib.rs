pub mod combining;
pub mod preprocess;
pub mod settings;
pub mod unicode;

pub use combining::{process, Direction};
