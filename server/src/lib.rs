pub use auth::*;
pub use config::*;
pub use host::*;
pub use metrics::*;

mod auth;
mod config;
mod host;
mod metrics;
