pub mod container;
pub mod store;
