//! Shared request/response types used by API-facing crates.
//!
//! Request fields are `Option` so that a missing field reaches the handler and
//! is answered with a 400 message instead of a deserialization rejection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
}

impl HealthCheckResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Body of every acknowledgement and error response: `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `POST /companies/approve` and `POST /companies/reject`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyActionRequest {
    #[serde(default)]
    pub company_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterCompanyRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyResponse {
    pub id: i32,
    pub name: String,
    pub approved: bool,
}

/// Username/password pair used to provision admins and register users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportProblemRequest {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemResponse {
    pub id: i32,
    pub user_id: i32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemWithAuthorResponse {
    pub id: i32,
    pub user_id: i32,
    pub username: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewProblemRequest {
    #[serde(default)]
    pub response: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub id: i32,
    pub problem_id: i32,
    pub response: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_check_ok_payload() {
        let response = HealthCheckResponse::ok();
        assert_eq!(response.status, "ok");
    }

    #[test]
    fn message_response_serializes_as_single_field() {
        let json = serde_json::to_string(&MessageResponse::new("Company not found"))
            .expect("serialize message response");

        assert_eq!(json, r#"{"message":"Company not found"}"#);
    }

    #[test]
    fn credentials_request_tolerates_missing_fields() {
        let request: CredentialsRequest =
            serde_json::from_str(r#"{"username":"alice"}"#).expect("deserialize credentials");

        assert_eq!(request.username.as_deref(), Some("alice"));
        assert!(request.password.is_none());
    }

    #[test]
    fn company_action_request_accepts_empty_object() {
        let request: CompanyActionRequest =
            serde_json::from_str("{}").expect("deserialize company action");

        assert_eq!(request, CompanyActionRequest::default());
    }

    #[test]
    fn review_response_keeps_null_response() {
        let json = serde_json::to_value(ReviewResponse {
            id: 1,
            problem_id: 7,
            response: None,
        })
        .expect("serialize review");

        assert_eq!(json["response"], serde_json::Value::Null);
    }
}
