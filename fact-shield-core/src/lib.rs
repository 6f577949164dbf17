//! Client-side state and backend access for the Fact Shield browser UI.
//!
//! Everything here is independent of the browser: the UI crate plugs a
//! `fetch`-backed [`api::Transport`] into [`api::ApiClient`] and drives the
//! state holders from its reactive signals.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod queue;
pub mod session;
pub mod signin;

pub use api::{ApiClient, HttpRequest, HttpResponse, Method, Transport};
pub use config::ClientConfig;
pub use error::ApiError;
pub use model::{Claim, ClaimStatus, SignInResponse, UserProfile, Vote};
