//! Service Layer
//!
//! The service layer provides abstraction over external endpoints (the
//! record backend and plain HTTP) and the tokio bridge used to drive
//! them from the synchronous UI shell.
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │                 Service Layer                  │
//! │  ┌──────────────┐  ┌─────────────────────────┐ │
//! │  │  HttpClient  │  │      BackendClient      │ │
//! │  │  (plain GET/ │  │  (auth + record CRUD)   │ │
//! │  │   POST JSON) │  │                         │ │
//! │  └──────────────┘  └─────────────────────────┘ │
//! └────────────────────────────────────────────────┘
//!                       │
//!                       ▼ AppEvent
//! ┌────────────────────────────────────────────────┐
//! │                  State Layer                   │
//! │        (AuthState, ScoreState, etc.)           │
//! └────────────────────────────────────────────────┘
//! ```

mod backend;
mod http;
mod runtime;

pub use backend::*;
pub use http::*;
pub use runtime::*;
