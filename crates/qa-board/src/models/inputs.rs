//! Request payloads for the question endpoints.
//!
//! Presence and length checks live here so every handler maps a bad
//! payload to the same partial-success outcome. Bounds are inclusive
//! and counted in characters, not bytes.

use serde::Deserialize;

use crate::error::ApiError;

/// Minimum title length for a new question.
pub const TITLE_MIN: usize = 10;
/// Maximum title length for a new question.
pub const TITLE_MAX: usize = 35;
/// Minimum body length for a new question.
pub const BODY_MIN: usize = 50;
/// Maximum body length for a new question.
pub const BODY_MAX: usize = 500;
/// Minimum answer length. Shares the question body's range.
pub const ANSWER_MIN: usize = 50;
/// Maximum answer length. Shares the question body's range.
pub const ANSWER_MAX: usize = 500;

/// Body of `POST /search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    /// Plain-text query matched against titles. Empty matches all.
    #[serde(default)]
    pub query: String,
}

/// Body of `POST /question`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionByIdRequest {
    /// Id of the question to fetch.
    #[serde(default)]
    pub id: Option<String>,
}

/// Body of `POST /new-question`.
///
/// Fields are optional at the serde level so a missing field produces a
/// partial-success response instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct NewQuestionRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub body: Option<String>,
}

impl NewQuestionRequest {
    /// Validate presence and length bounds, returning the title and body.
    pub fn validate(self) -> Result<(String, String), ApiError> {
        let (Some(title), Some(body)) = (self.title, self.body) else {
            return Err(ApiError::validation("Please fill all the information"));
        };
        if title.is_empty() || body.is_empty() {
            return Err(ApiError::validation("Please fill all the information"));
        }

        let title_len = title.chars().count();
        if !(TITLE_MIN..=TITLE_MAX).contains(&title_len) {
            return Err(ApiError::validation(format!(
                "Title's length must be between {TITLE_MIN} and {TITLE_MAX} characters"
            )));
        }

        let body_len = body.chars().count();
        if !(BODY_MIN..=BODY_MAX).contains(&body_len) {
            return Err(ApiError::validation(format!(
                "Body's length must be between {BODY_MIN} and {BODY_MAX} characters"
            )));
        }

        Ok((title, body))
    }
}

/// Body of `POST /answer-question`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub value: Option<String>,
}

impl AnswerRequest {
    /// Validate presence and length bounds, returning the id and value.
    pub fn validate(self) -> Result<(String, String), ApiError> {
        let Some(id) = self.id.filter(|id| !id.is_empty()) else {
            return Err(ApiError::validation("Please provide an id"));
        };
        let Some(value) = self.value.filter(|value| !value.is_empty()) else {
            return Err(ApiError::validation("Please provide a value"));
        };

        let value_len = value.chars().count();
        if !(ANSWER_MIN..=ANSWER_MAX).contains(&value_len) {
            return Err(ApiError::validation(format!(
                "Value must be between {ANSWER_MIN} and {ANSWER_MAX} characters"
            )));
        }

        Ok((id, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(title: &str, body: &str) -> NewQuestionRequest {
        NewQuestionRequest { title: Some(title.into()), body: Some(body.into()) }
    }

    #[test]
    fn test_new_question_valid_bounds() {
        for title_len in [TITLE_MIN, TITLE_MAX] {
            for body_len in [BODY_MIN, BODY_MAX] {
                let req = new_question(&"t".repeat(title_len), &"b".repeat(body_len));
                assert!(req.validate().is_ok(), "title {title_len} body {body_len}");
            }
        }
    }

    #[test]
    fn test_new_question_title_out_of_bounds() {
        let body = "b".repeat(BODY_MIN);
        for title_len in [TITLE_MIN - 1, TITLE_MAX + 1] {
            let req = new_question(&"t".repeat(title_len), &body);
            let err = req.validate().unwrap_err();
            assert!(matches!(err, ApiError::Validation { .. }), "title {title_len}");
        }
    }

    #[test]
    fn test_new_question_body_out_of_bounds() {
        let title = "t".repeat(TITLE_MIN);
        for body_len in [BODY_MIN - 1, BODY_MAX + 1] {
            let req = new_question(&title, &"b".repeat(body_len));
            assert!(req.validate().is_err(), "body {body_len}");
        }
    }

    #[test]
    fn test_new_question_missing_fields() {
        let req = NewQuestionRequest { title: None, body: Some("b".repeat(50)) };
        assert!(req.validate().is_err());

        let req = NewQuestionRequest { title: Some("a valid title!".into()), body: None };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_new_question_length_counts_chars_not_bytes() {
        // 10 multibyte characters are a valid title even though the
        // byte length is well past the maximum times three.
        let req = new_question(&"\u{e9}".repeat(TITLE_MIN), &"b".repeat(BODY_MIN));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_answer_boundaries_inclusive() {
        for (len, ok) in [(ANSWER_MIN - 1, false), (ANSWER_MIN, true), (ANSWER_MAX, true), (ANSWER_MAX + 1, false)] {
            let req = AnswerRequest { id: Some("some-id".into()), value: Some("v".repeat(len)) };
            assert_eq!(req.validate().is_ok(), ok, "value length {len}");
        }
    }

    #[test]
    fn test_answer_missing_fields() {
        let req = AnswerRequest { id: None, value: Some("v".repeat(50)) };
        assert!(req.validate().is_err());

        let req = AnswerRequest { id: Some("some-id".into()), value: None };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_search_query_defaults_to_empty() {
        let req: SearchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.query, "");
    }
}
