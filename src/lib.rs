//! Clef Client Core Library
//!
//! This crate provides the application core for Clef, a native client for
//! collaborative music score editing: the state modules, the store
//! registry that exposes them, and the HTTP/backend client singletons.
//! The UI shell links against this crate, calls
//! [`app::bootstrap`](crate::app::bootstrap) once at startup, and reads
//! everything else through the returned
//! [`StoreRegistry`](crate::app::StoreRegistry).

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod helpers;
pub mod services;
pub mod state;
pub mod utils;
