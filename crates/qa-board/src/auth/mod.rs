//! Authentication: session token codec, bearer-token extraction, and
//! the GitHub OAuth login flow.

pub mod extract;
pub mod github;
pub mod token;

pub use extract::AuthUser;
pub use token::TokenCodec;
