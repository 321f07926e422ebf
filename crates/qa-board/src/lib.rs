//! Q&A board backend.
//!
//! A small HTTP service: GitHub OAuth login issuing signed session
//! tokens, questions with embedded answers, and plain-text title search.
//!
//! # Features
//!
//! - **GitHub sign-in**: OAuth code exchange, create-on-first-login users
//! - **Signed sessions**: HS256 tokens carrying the GitHub id, one-year expiry
//! - **Questions**: create, list, search, fetch by id, append answers
//!
//! # Example
//!
//! ```no_run
//! use qa_board::{config::Config, server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     server::run(config, 3000).await
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod store;

pub use config::Config;
pub use error::{ApiError, ApiResult};
