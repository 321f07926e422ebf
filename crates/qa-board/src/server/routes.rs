//! Router and request handlers.
//!
//! Each handler validates its input, performs one store operation, and
//! maps the result onto the wire. Every failure path produces an
//! explicit response via `ApiError`.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use super::AppState;
use crate::auth::{AuthUser, github};
use crate::error::{ApiError, ApiResult};
use crate::models::inputs::{
    AnswerRequest, NewQuestionRequest, QuestionByIdRequest, SearchRequest,
};
use crate::models::{Answer, Question};

/// Create the HTTP router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/auth/github", get(github::login))
        .route("/auth/github/callback", get(github::callback))
        .route("/me", get(me))
        .route("/my-questions", get(my_questions))
        .route("/getQuestions", get(get_questions))
        .route("/search", post(search))
        .route("/question", post(question_by_id))
        .route("/answer-question", post(answer_question))
        .route("/new-question", post(new_question))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "qa-board",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// `GET /me`
///
/// The authenticated caller's stored profile.
async fn me(AuthUser(user): AuthUser) -> impl IntoResponse {
    Json(user)
}

/// `GET /my-questions`
///
/// The caller's questions, newest first.
async fn my_questions(
    AuthUser(user): AuthUser,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    Json(state.questions.by_creator(user.github_id).await)
}

/// `GET /getQuestions`
///
/// All questions, newest first.
async fn get_questions(
    _user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    Json(state.questions.all().await)
}

/// `POST /search`
///
/// Case-insensitive title search; an empty query matches everything.
async fn search(
    _user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> impl IntoResponse {
    Json(state.questions.search(&req.query).await)
}

/// `POST /question`
///
/// Fetch one question by id. An unknown or unparseable id is a
/// partial-success "not found", not a hard error.
async fn question_by_id(
    _user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(req): Json<QuestionByIdRequest>,
) -> ApiResult<Json<Question>> {
    let id = parse_question_id(req.id.as_deref())?;
    let question = state.questions.get(id).await.ok_or(ApiError::QuestionNotFound)?;
    Ok(Json(question))
}

/// `POST /answer-question`
///
/// Append an answer to a question. The answerer is always the
/// authenticated caller.
async fn answer_question(
    AuthUser(user): AuthUser,
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnswerRequest>,
) -> ApiResult<impl IntoResponse> {
    let (id, value) = req.validate()?;
    let id = parse_question_id(Some(id.as_str()))?;

    let answer = Answer { answerer: user.name.clone(), value };
    state.questions.append_answer(id, answer).await.ok_or(ApiError::QuestionNotFound)?;

    tracing::info!(question_id = %id, "Answer appended");

    Ok(Json(serde_json::json!({ "name": user.name })))
}

/// `POST /new-question`
///
/// Create a question. Creator identity comes from the authenticated
/// caller, never from the request body.
async fn new_question(
    AuthUser(user): AuthUser,
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewQuestionRequest>,
) -> ApiResult<impl IntoResponse> {
    let (title, body) = req.validate()?;

    let question = Question::new(title, body, &user);
    state.questions.insert(question.clone()).await;

    tracing::info!(question_id = %question.id, creator_id = user.github_id, "Question created");

    Ok(Json(serde_json::json!({
        "status": "success",
        "question": question
    })))
}

/// Map an optional id string onto a question id. Anything that does not
/// parse cannot name a stored question, so it reports as not found.
fn parse_question_id(id: Option<&str>) -> ApiResult<Uuid> {
    id.and_then(|id| Uuid::parse_str(id).ok()).ok_or(ApiError::QuestionNotFound)
}
