//! JSON body extractor that validates before the handler runs

use axum::{
    extract::{FromRequest, Request},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::error::ApiError;

/// Deserializes a JSON body and runs its `Validate` rules.
///
/// Every rejection, whether malformed JSON, a missing field, a wrong content
/// type or a rule violation, becomes a 400 [`ApiError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => value,
            Err(rejection) => {
                return Err(ApiError::bad_request(format_rejection_message(&rejection)));
            }
        };

        value.validate().map_err(|errors| ApiError::validation(&errors))?;

        Ok(Self(value))
    }
}

/// Format the rejection message to be more user-friendly
fn format_rejection_message(rejection: &axum::extract::rejection::JsonRejection) -> String {
    use axum::extract::rejection::JsonRejection::*;

    match rejection {
        JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
        JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err.body_text()),
        MissingJsonContentType(_) => {
            "Missing Content-Type header. Expected 'application/json'.".to_string()
        }
        BytesRejection(err) => format!("Failed to read request body: {}", err.body_text()),
        _ => "Invalid JSON request".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, StatusCode};

    use crate::domain::UserRequest;

    fn json_request(body: &str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/user")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_accepts_valid_body() {
        let req = json_request(r#"{"name":"Kamran","surname":"Babayev","age":24}"#);

        let ValidatedJson(request) = ValidatedJson::<UserRequest>::from_request(req, &())
            .await
            .unwrap();

        assert_eq!(request, UserRequest::new("Kamran", "Babayev", 24));
    }

    #[tokio::test]
    async fn test_rule_violation_is_bad_request() {
        let req = json_request(r#"{"name":"Kamran","surname":"Babayev","age":9}"#);

        let err = ValidatedJson::<UserRequest>::from_request(req, &())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.response.errors.unwrap().contains_key("age"));
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let req = json_request(r#"{"name":"Kamran","surname":"Babayev"}"#);

        let err = ValidatedJson::<UserRequest>::from_request(req, &())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.response.message.starts_with("Invalid JSON data"));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/user")
            .body(Body::from(r#"{"name":"Kamran","surname":"Babayev","age":24}"#))
            .unwrap();

        let err = ValidatedJson::<UserRequest>::from_request(req, &())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
