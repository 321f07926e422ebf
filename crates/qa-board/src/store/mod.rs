//! In-memory document stores.
//!
//! Both stores are cheap-to-clone handles over `Arc<RwLock<HashMap>>`,
//! shared across request handlers.

pub mod questions;
pub mod users;

pub use questions::QuestionStore;
pub use users::UserStore;
