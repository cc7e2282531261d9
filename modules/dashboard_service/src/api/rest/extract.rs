//! Body and query extractors with envelope-shaped rejections

use super::error::ApiError;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// JSON request body where every field is optional.
///
/// An empty body yields `T::default()`. The Content-Type header is not
/// checked. Malformed JSON is rejected with a 400 error envelope.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::new(rejection.status(), rejection.body_text()))?;
        parse_body(&bytes).map(JsonBody)
    }
}

fn parse_body<T: DeserializeOwned + Default>(bytes: &[u8]) -> Result<T, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(bytes).map_err(|e| {
        tracing::debug!(error = %e, "Rejected request body");
        ApiError::bad_request(format!("Invalid request body: {e}"))
    })
}

/// Query string filters.
///
/// A repeated key keeps its last value instead of failing the request.
/// Rejections use the error envelope.
#[derive(Debug, Clone, Default)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::new(rejection.status(), rejection.body_text()))?;
        parse_query(pairs).map(QueryParams)
    }
}

fn parse_query<T: DeserializeOwned>(pairs: Vec<(String, String)>) -> Result<T, ApiError> {
    let params: Map<String, Value> = pairs
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect();
    serde_json::from_value(Value::Object(params)).map_err(|e| {
        tracing::debug!(error = %e, "Rejected query string");
        ApiError::bad_request(format!("Invalid query string: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::rest::dto::{SalesPointsQuery, UpdateNotificationsRequest, WeeklyReportQuery};
    use axum::http::StatusCode;

    #[test]
    fn test_empty_body_is_default() {
        let req: UpdateNotificationsRequest = parse_body(b"").unwrap();
        assert!(req.email.is_none() && req.push.is_none() && req.frequency.is_none());
        assert!(parse_body::<UpdateNotificationsRequest>(b"  \n").is_ok());
    }

    #[test]
    fn test_wrong_type_is_bad_request() {
        let err = parse_body::<UpdateNotificationsRequest>(br#"{"email":"yes"}"#).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.starts_with("Invalid request body"));
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_repeated_query_key_keeps_last() {
        let query: SalesPointsQuery =
            parse_query(pairs(&[("wilaya", "Wilaya 1"), ("type", "basic"), ("wilaya", "Wilaya 2")]))
                .unwrap();
        assert_eq!(query.wilaya.as_deref(), Some("Wilaya 2"));
        assert_eq!(query.point_type.as_deref(), Some("basic"));
    }

    #[test]
    fn test_query_renames_and_unknown_keys() {
        let query: WeeklyReportQuery =
            parse_query(pairs(&[("startDate", "2024-01-01"), ("foo", "bar")])).unwrap();
        assert_eq!(query.start_date.as_deref(), Some("2024-01-01"));

        let empty: SalesPointsQuery = parse_query(Vec::new()).unwrap();
        assert!(empty.wilaya.is_none() && empty.point_type.is_none());
    }
}
