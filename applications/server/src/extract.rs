//! Request extraction for user routes

use crate::error::ServerError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts},
};
use roster_core::types::UserId;
use serde::Deserialize;
use serde_json::Value;
use std::convert::Infallible;
use std::fmt;

/// `:id` path segment read as its leading integer
///
/// Never rejects: a segment without leading digits, or one that does not
/// decode at all, carries no id and so matches no user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestedId(Option<UserId>);

impl RequestedId {
    pub fn parse(raw: &str) -> Self {
        Self(UserId::parse_leading(raw))
    }

    pub fn id(&self) -> Option<UserId> {
        self.0
    }
}

impl fmt::Display for RequestedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{}", id),
            None => write!(f, "NaN"),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestedId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => Ok(Self::parse(&raw)),
            Err(rejection) => {
                tracing::debug!("Unreadable id segment: {}", rejection);
                Ok(Self(None))
            }
        }
    }
}

/// `name`/`email` as submitted, before the presence check
///
/// Accepts `application/json` and `application/x-www-form-urlencoded`.
/// An empty body, or one with any other content type, yields an empty payload.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
}

enum BodyKind {
    Json,
    Form,
    Other,
}

impl BodyKind {
    fn of(request: &Request) -> Self {
        let Some(content_type) = request
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
        else {
            return BodyKind::Other;
        };

        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if mime == "application/json" || mime.ends_with("+json") {
            BodyKind::Json
        } else if mime == "application/x-www-form-urlencoded" {
            BodyKind::Form
        } else {
            BodyKind::Other
        }
    }
}

/// Missing, `null`, `false`, zero and `""` all count as not provided
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(flag)) => !flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v == 0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => false,
    }
}

impl UserPayload {
    /// Both fields as strings
    ///
    /// A blank field is reported as missing before the types are looked at;
    /// a provided field that is not a string makes the body invalid.
    pub fn into_fields(self) -> Result<(String, String), ServerError> {
        if is_blank(self.name.as_ref()) || is_blank(self.email.as_ref()) {
            return Err(ServerError::BadRequest(
                "Name and email are required".to_string(),
            ));
        }

        match (self.name, self.email) {
            (Some(Value::String(name)), Some(Value::String(email))) => Ok((name, email)),
            _ => Err(invalid_body()),
        }
    }
}

#[async_trait]
impl<S> FromRequest<S> for UserPayload
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match BodyKind::of(&req) {
            BodyKind::Form => {
                let axum::Form(payload) = axum::Form::<Self>::from_request(req, state)
                    .await
                    .map_err(|rejection| {
                        tracing::debug!("Rejected form body: {}", rejection);
                        invalid_body()
                    })?;
                Ok(payload)
            }
            BodyKind::Json => {
                let bytes = read_body(req, state).await?;
                if bytes.is_empty() {
                    return Ok(Self::default());
                }
                serde_json::from_slice(&bytes).map_err(|e| {
                    tracing::debug!("Rejected JSON body: {}", e);
                    invalid_body()
                })
            }
            BodyKind::Other => Ok(Self::default()),
        }
    }
}

async fn read_body<S>(req: Request, state: &S) -> Result<Bytes, ServerError>
where
    S: Send + Sync,
{
    Bytes::from_request(req, state).await.map_err(|rejection| {
        tracing::debug!("Failed to read request body: {}", rejection);
        invalid_body()
    })
}

fn invalid_body() -> ServerError {
    ServerError::BadRequest("Invalid request body".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde_json::json;

    async fn extract(
        content_type: Option<&str>,
        body: &'static str,
    ) -> Result<UserPayload, ServerError> {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(Body::from(body)).unwrap();
        UserPayload::from_request(request, &()).await
    }

    fn payload(name: Value, email: Value) -> UserPayload {
        UserPayload {
            name: Some(name),
            email: Some(email),
        }
    }

    fn bad_request_message(result: Result<(String, String), ServerError>) -> String {
        match result {
            Err(ServerError::BadRequest(msg)) => msg,
            other => panic!("expected bad request, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_json_body() {
        let payload = extract(
            Some("application/json; charset=utf-8"),
            r#"{"name":"A","email":"a@x.com"}"#,
        )
        .await
        .unwrap();

        assert_eq!(payload.name, Some(json!("A")));
        assert_eq!(payload.email, Some(json!("a@x.com")));
    }

    #[tokio::test]
    async fn test_form_body() {
        let payload = extract(
            Some("application/x-www-form-urlencoded"),
            "name=Jo+Ann&email=jo%40x.com",
        )
        .await
        .unwrap();

        assert_eq!(
            payload.into_fields().unwrap(),
            ("Jo Ann".to_string(), "jo@x.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_empty_and_unknown_bodies_are_empty_payloads() {
        assert_eq!(
            extract(Some("application/json"), "").await.unwrap(),
            UserPayload::default()
        );
        assert_eq!(
            extract(Some("text/plain"), "name=A").await.unwrap(),
            UserPayload::default()
        );
        assert_eq!(extract(None, "").await.unwrap(), UserPayload::default());
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let err = extract(Some("application/json"), "{not json")
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::BadRequest(ref msg) if msg == "Invalid request body"));
    }

    #[test]
    fn test_presence_check() {
        assert!(payload(json!("A"), json!("a@x.com")).into_fields().is_ok());
        assert!(payload(json!(""), json!("a@x.com")).into_fields().is_err());
        assert!(UserPayload::default().into_fields().is_err());
    }

    #[test]
    fn test_falsy_values_count_as_missing() {
        for blank in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert_eq!(
                bad_request_message(payload(blank, json!("a@x.com")).into_fields()),
                "Name and email are required"
            );
        }
    }

    #[test]
    fn test_truthy_non_strings_are_invalid() {
        for value in [json!(5), json!(true), json!(["A"]), json!({ "first": "A" })] {
            assert_eq!(
                bad_request_message(payload(json!("A"), value).into_fields()),
                "Invalid request body"
            );
        }
    }

    #[test]
    fn test_blank_wins_over_wrong_type() {
        assert_eq!(
            bad_request_message(payload(json!(5), json!(0)).into_fields()),
            "Name and email are required"
        );
    }

    #[test]
    fn test_requested_id_reads_leading_integer() {
        assert_eq!(RequestedId::parse("42").id(), Some(UserId::new(42)));
        assert_eq!(RequestedId::parse("1abc").id(), Some(UserId::new(1)));
        assert_eq!(RequestedId::parse("007").to_string(), "7");
    }

    #[test]
    fn test_requested_id_without_digits_is_nan() {
        let requested = RequestedId::parse("abc");
        assert_eq!(requested.id(), None);
        assert_eq!(requested.to_string(), "NaN");
    }
}
