use std::{collections::HashSet, sync::Arc};

use axum::{
    Json,
    body::Bytes,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use bank::{NewQuestion, QuizScope, select_question};
use tracing::info;

use crate::{
    error::AppError::{self, MalformedPayload, MethodNotAllowed, NotFound},
    payloads::{
        Categories, Created, Deleted, PageQuery, QuestionList, QuestionPage, QuizQuestion,
        QuizRequest, SearchRequest, category_map,
    },
    state::AppState,
    utils::{parse_json, validate_new_question, validate_page},
};

type Shared = State<Arc<AppState>>;

pub async fn categories_handler(State(state): Shared) -> Result<Json<Categories>, AppError> {
    let categories = state.store()?.categories()?;

    Ok(Json(Categories {
        success: true,
        categories: category_map(categories),
    }))
}

pub async fn questions_handler(
    State(state): Shared,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionPage>, AppError> {
    let Query(query) = query.map_err(|_| MalformedPayload)?;
    let page = validate_page(query.page)?;

    let store = state.store()?;
    let (questions, total_questions) =
        store.questions_page(page, state.config.questions_per_page)?;

    if questions.is_empty() && page > 1 {
        return Err(NotFound);
    }

    Ok(Json(QuestionPage {
        success: true,
        questions,
        total_questions,
        categories: category_map(store.categories()?),
        current_category: None,
    }))
}

pub async fn category_questions_handler(
    State(state): Shared,
    category_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<QuestionList>, AppError> {
    let Path(category_id) = category_id.map_err(|_| NotFound)?;

    let store = state.store()?;
    if store.category(category_id)?.is_none() {
        return Err(NotFound);
    }

    let questions = store.questions(QuizScope::Category(category_id))?;

    Ok(Json(QuestionList {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: Some(category_id),
    }))
}

pub async fn search_handler(
    State(state): Shared,
    body: Bytes,
) -> Result<Json<QuestionList>, AppError> {
    let request: SearchRequest = parse_json(&body)?;
    let questions = state.store()?.search(request.search_term.trim())?;

    Ok(Json(QuestionList {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}

pub async fn create_question_handler(
    State(state): Shared,
    body: Bytes,
) -> Result<(StatusCode, Json<Created>), AppError> {
    let question: NewQuestion = parse_json(&body)?;

    let store = state.store()?;
    validate_new_question(&store, &question)?;
    let created = store.insert_question(&question)?;

    info!("Created question {created} in category {}", question.category);

    Ok((
        StatusCode::CREATED,
        Json(Created {
            success: true,
            created,
        }),
    ))
}

pub async fn delete_question_handler(
    State(state): Shared,
    question_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Deleted>, AppError> {
    let Path(question_id) = question_id.map_err(|_| NotFound)?;

    if !state.store()?.delete_question(question_id)? {
        return Err(NotFound);
    }

    info!("Deleted question {question_id}");

    Ok(Json(Deleted {
        success: true,
        deleted: question_id,
    }))
}

pub async fn quizzes_handler(
    State(state): Shared,
    body: Bytes,
) -> Result<Json<QuizQuestion>, AppError> {
    let request: QuizRequest = parse_json(&body)?;
    let scope = QuizScope::from_payload(request.quiz_category.as_ref())?;
    let previous: HashSet<i64> = request.previous_questions.into_iter().collect();

    let store = state.store()?;
    if let Some(category_id) = scope.category_id()
        && store.category(category_id)?.is_none()
    {
        return Err(NotFound);
    }

    let pool = store.questions(scope)?;
    drop(store);

    let question = select_question(&pool, &previous, &mut rand::thread_rng())
        .question()
        .cloned();

    #[cfg(feature = "verbose")]
    info!(
        "Quiz {:?}: {} candidates, {} previous, picked {:?}",
        scope,
        pool.len(),
        previous.len(),
        question.as_ref().map(|q| q.id)
    );

    Ok(Json(QuizQuestion {
        success: true,
        question,
    }))
}

pub async fn not_found_handler() -> AppError {
    NotFound
}

pub async fn method_not_allowed_handler() -> AppError {
    MethodNotAllowed
}
