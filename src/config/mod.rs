pub mod builder;
pub mod types;
