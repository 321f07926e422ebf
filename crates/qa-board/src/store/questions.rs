//! Question store with embedded answers.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Answer, Question};

/// In-memory question store.
///
/// Questions are append-only documents: they are inserted once and then
/// only grow their embedded answer list.
#[derive(Clone, Default)]
pub struct QuestionStore {
    questions: Arc<RwLock<HashMap<Uuid, Question>>>,
}

impl QuestionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new question.
    pub async fn insert(&self, question: Question) {
        self.questions.write().await.insert(question.id, question);
    }

    /// All questions, newest first.
    pub async fn all(&self) -> Vec<Question> {
        let questions = self.questions.read().await;
        sorted_desc(questions.values().cloned().collect())
    }

    /// Questions created by one user, newest first.
    pub async fn by_creator(&self, creator_id: i64) -> Vec<Question> {
        let questions = self.questions.read().await;
        sorted_desc(
            questions.values().filter(|q| q.creator_id == creator_id).cloned().collect(),
        )
    }

    /// Case-insensitive substring search on titles, newest first.
    /// An empty query matches everything.
    pub async fn search(&self, query: &str) -> Vec<Question> {
        let needle = query.to_lowercase();
        let questions = self.questions.read().await;
        sorted_desc(
            questions
                .values()
                .filter(|q| q.title.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
        )
    }

    /// Look up a question by id.
    pub async fn get(&self, id: Uuid) -> Option<Question> {
        self.questions.read().await.get(&id).cloned()
    }

    /// Append an answer to a question.
    ///
    /// The write lock covers the whole read-modify-write, so concurrent
    /// appends to the same question cannot lose updates. Returns `None`
    /// when the question does not exist.
    pub async fn append_answer(&self, id: Uuid, answer: Answer) -> Option<()> {
        let mut questions = self.questions.write().await;
        let question = questions.get_mut(&id)?;
        question.answers.push(answer);
        Some(())
    }
}

fn sorted_desc(mut questions: Vec<Question>) -> Vec<Question> {
    questions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    questions
}

impl std::fmt::Debug for QuestionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuestionStore").finish()
    }
}
