pub mod catalog;
mod dependencies;
pub mod rental;

pub use dependencies::ServiceDependencies;
