//! Data model for the Q&A board.
//!
//! Wire names are camelCase to match the public JSON contract
//! (`profileUrl`, `creatorId`, ...).

pub mod inputs;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user, created on first GitHub login.
///
/// Unique by `github_id`; never mutated or deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Display name from the GitHub profile.
    pub name: String,

    /// URL of the GitHub profile page.
    pub profile_url: String,

    /// Stable numeric id issued by GitHub; the join key between
    /// users and session tokens.
    pub github_id: i64,
}

/// An answer embedded in a question.
///
/// Answers have no identity of their own; they are append-only and keep
/// their append order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// Display name of the answering user.
    pub answerer: String,

    /// Answer text.
    pub value: String,
}

/// A question document with its embedded answers.
///
/// Mutated only by appending answers; never deleted or edited in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique question id.
    pub id: Uuid,

    /// Question title (10-35 characters, enforced at write time).
    pub title: String,

    /// Question body (50-500 characters, enforced at write time).
    pub body: String,

    /// GitHub id of the creating user. Always taken from the
    /// authenticated caller, never from client input.
    pub creator_id: i64,

    /// Display name of the creating user at creation time.
    pub creator_name: String,

    /// Creation time in epoch milliseconds.
    pub timestamp: i64,

    /// Embedded answers in append order.
    pub answers: Vec<Answer>,
}

impl Question {
    /// Build a new question for an authenticated creator, stamped with
    /// the current time and no answers yet.
    #[must_use]
    pub fn new(title: String, body: String, creator: &User) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            body,
            creator_id: creator.github_id,
            creator_name: creator.name.clone(),
            timestamp: Utc::now().timestamp_millis(),
            answers: Vec::new(),
        }
    }
}
