//! User API endpoints

pub mod types;

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use qparser::Options;

use crate::api::types::{ApiError, FilteredResponse};
use crate::core::config::QueryConfig;
use crate::data::SqliteService;
use crate::data::sqlite::repositories;

use types::{UserDto, UserQuery};

/// Shared state for Users API endpoints
#[derive(Clone)]
pub struct UsersApiState {
    pub database: Arc<SqliteService>,
    pub query: QueryConfig,
}

/// Build Users API routes
pub fn routes(database: Arc<SqliteService>, query: QueryConfig) -> Router<()> {
    let state = UsersApiState { database, query };

    Router::new()
        .route("/", get(list_users))
        .with_state(state)
}

/// List users filtered by `operator:value` query parameters
pub async fn list_users(
    State(state): State<UsersApiState>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> Result<Json<FilteredResponse<UserDto>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::bad_request("INVALID_QUERY", e.body_text()))?;

    let mut options = Options::from_record(&query)?;
    options.set_limit(state.query.effective_limit(options.limit()));

    let users = repositories::list_users(state.database.pool(), &options)
        .await
        .map_err(ApiError::from_sqlite)?;

    tracing::debug!(
        filters = options.len(),
        limit = options.limit(),
        offset = options.offset(),
        rows = users.len(),
        "Listed users"
    );

    Ok(Json(FilteredResponse {
        data: users.into_iter().map(UserDto::from).collect(),
        filters: options.entries().to_vec(),
        limit: options.limit(),
        offset: options.offset(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    async fn app() -> Router {
        let database = Arc::new(SqliteService::init("sqlite::memory:").await.unwrap());
        Router::new().nest("/api/v1/users", routes(database, QueryConfig::default()))
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .await
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn names(body: &serde_json::Value) -> Vec<String> {
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["name"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_list_without_filters_uses_default_limit() {
        let (status, body) = get_json("/api/v1/users").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 6);
        assert_eq!(body["limit"], 50);
        assert_eq!(body["offset"], 0);
        assert!(body["filters"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_like_filter_with_exact_bool() {
        let (status, body) = get_json("/api/v1/users?name=like:jo&active=true").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), ["John Smith", "Joanna Reyes", "Nina Joseph"]);

        let filters = body["filters"].as_array().unwrap();
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0]["name"], "name");
        assert_eq!(filters[0]["operator"], "like");
        assert_eq!(filters[0]["value"], "%jo%");
        assert_eq!(filters[1]["operator"], "eq");
        assert_eq!(filters[1]["value"], "true");
    }

    #[tokio::test]
    async fn test_range_filter() {
        let (status, body) =
            get_json("/api/v1/users?created_at=rng:2021-01-01%20to%202021-12-31").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), ["John Smith", "Joanna Reyes"]);
        assert_eq!(body["filters"][0]["value"]["low"], "2021-01-01");
        assert_eq!(body["filters"][0]["value"]["high"], "2021-12-31");
    }

    #[tokio::test]
    async fn test_pagination() {
        let (status, body) = get_json("/api/v1/users?age=gt:30&limit=2&offset=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), ["John Smith", "Joanna Reyes"]);
        assert_eq!(body["limit"], 2);
        assert_eq!(body["offset"], 1);
    }

    #[tokio::test]
    async fn test_limit_clamped_to_max() {
        let (status, body) = get_json("/api/v1/users?limit=100000").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["limit"], 500);
    }

    #[tokio::test]
    async fn test_malformed_token_rejected() {
        let (status, body) = get_json("/api/v1/users?age=gt30").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MALFORMED_QUERY");
    }

    #[tokio::test]
    async fn test_unknown_operator_rejected() {
        let (status, body) = get_json("/api/v1/users?age=zz:30").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "UNKNOWN_OPERATOR");
    }

    #[tokio::test]
    async fn test_bad_range_rejected() {
        let (status, body) = get_json("/api/v1/users?created_at=rng:2021-01-01").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_RANGE_FORMAT");
    }

    #[tokio::test]
    async fn test_negative_limit_rejected() {
        let (status, body) = get_json("/api/v1/users?limit=-1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_PAGINATION");
    }

    #[tokio::test]
    async fn test_invalid_bool_rejected() {
        let (status, body) = get_json("/api/v1/users?active=maybe").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_QUERY");
    }
}
