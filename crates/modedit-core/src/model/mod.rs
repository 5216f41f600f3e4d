pub mod mode;

pub use mode::{ModeRecord, SchemaError};
