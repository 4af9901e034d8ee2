use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    pub fn to_response(&self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }

    pub fn not_found(message: impl Into<String>) -> HttpResponse {
        Self::new(message).to_response(StatusCode::NOT_FOUND)
    }

    pub fn internal(message: impl Into<String>) -> HttpResponse {
        Self::new(message).to_response(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_has_a_single_error_field() {
        let body = serde_json::to_string(&ErrorResponse::new("Fundraiser not found")).unwrap();

        assert_eq!(body, r#"{"error":"Fundraiser not found"}"#);
    }

    #[test]
    fn response_carries_the_status() {
        assert_eq!(
            ErrorResponse::not_found("missing").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorResponse::internal("broken").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
