//! Driven adapters implementing the domain's storage port.

pub mod memory;

pub use memory::InMemoryUserStore;
