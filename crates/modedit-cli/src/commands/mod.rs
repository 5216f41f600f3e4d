pub mod serve;
pub mod sources;
