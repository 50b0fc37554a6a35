pub mod kind;

pub use acram_error::Error;
