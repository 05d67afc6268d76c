pub mod client;
pub mod generator;
pub mod types;
