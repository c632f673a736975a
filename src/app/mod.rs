//! Application Layer
//!
//! Startup wiring, the root state container, and the store registry.

pub mod bootstrap;
pub mod container;
pub mod stores;

pub use bootstrap::*;
pub use container::*;
pub use stores::*;
