pub mod aggregate;
pub mod config;
pub mod error;
pub mod figure;
pub mod pipeline;
pub mod rate;
pub mod states;
pub mod summary;
pub mod warehouse;
// cmd and reports belong to the binary.
