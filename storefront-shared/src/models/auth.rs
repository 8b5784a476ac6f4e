use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Key the server uses for errors not tied to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Credentials submitted by the login form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's username.
    pub username: String,

    /// The user's password.
    pub password: String,
}

/// Fields submitted by the signup form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Desired username.
    pub username: String,

    /// Contact email address.
    pub email: String,

    /// Chosen password.
    pub password: String,

    /// Password confirmation.
    pub password2: String,
}

/// Public details of an account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    /// The user's username.
    pub username: String,

    /// The user's email address, when the server shares it.
    #[serde(default)]
    pub email: Option<String>,
}

/// Successful login or registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Token to store for subsequent authenticated requests.
    pub token: String,

    #[serde(default)]
    pub user: Option<UserSummary>,

    #[serde(default)]
    pub message: Option<String>,
}

/// Response of the profile endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileResponse {
    /// The authenticated user.
    pub user: UserSummary,
}

/// Response of the username availability check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsernameAvailability {
    /// Whether the username is free.
    #[serde(default)]
    pub available: bool,

    /// Human readable verdict from the server.
    #[serde(default)]
    pub message: String,
}

/// Error body returned by the accounts API on a 4xx.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub errors: FieldErrors,
}

/// A single field's validation messages.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name, or [`NON_FIELD_ERRORS`].
    pub field: String,

    /// Messages in server order, never empty when deserialized.
    pub messages: Vec<String>,
}

impl FieldError {
    /// The message shown to the user: the first one the server reported.
    #[must_use]
    pub fn first_message(&self) -> Option<&str> {
        self.messages.first().map(String::as_str)
    }
}

/// Field errors in the order the server listed them.
///
/// Each value may be a single string or a list of strings.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up the errors for one field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|error| error.field == field)
    }

    /// Iterate in server order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'de> Deserialize<'de> for FieldErrors {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Messages {
            One(String),
            Many(Vec<String>),
        }

        struct FieldErrorsVisitor;

        impl<'de> Visitor<'de> for FieldErrorsVisitor {
            type Value = FieldErrors;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to error messages")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut errors = Vec::new();
                while let Some((field, messages)) = map.next_entry::<String, Messages>()? {
                    let messages = match messages {
                        Messages::One(message) => vec![message],
                        Messages::Many(messages) => messages,
                    };
                    if !messages.is_empty() {
                        errors.push(FieldError { field, messages });
                    }
                }
                Ok(FieldErrors(errors))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(FieldErrors::default())
            }
        }

        deserializer.deserialize_any(FieldErrorsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_keep_server_order() {
        let json = r#"{"errors":{"username":["taken","too short"],"email":["invalid"]}}"#;
        let body: ApiErrorResponse = serde_json::from_str(json).unwrap();
        let fields: Vec<_> = body.errors.iter().map(|e| e.field.as_str()).collect();

        assert_eq!(fields, vec!["username", "email"]);
        assert_eq!(body.errors.get("username").unwrap().first_message(), Some("taken"));

        let mut messages = 0;
        for error in &body.errors {
            messages += error.messages.len();
        }
        assert_eq!(messages, 3);
    }

    #[test]
    fn test_field_errors_accept_plain_strings() {
        let json = r#"{"errors":{"password":"too common"}}"#;
        let body: ApiErrorResponse = serde_json::from_str(json).unwrap();
        let error = body.errors.get("password").unwrap();

        assert_eq!(error.messages, vec!["too common".to_string()]);
    }

    #[test]
    fn test_field_errors_skip_empty_lists() {
        let json = r#"{"errors":{"email":[]}}"#;
        let body: ApiErrorResponse = serde_json::from_str(json).unwrap();
        assert!(body.errors.is_empty());
    }

    #[test]
    fn test_missing_and_null_errors() {
        let body: ApiErrorResponse = serde_json::from_str(r#"{"message":"nope"}"#).unwrap();
        assert!(body.errors.is_empty());
        assert_eq!(body.message.as_deref(), Some("nope"));

        let body: ApiErrorResponse = serde_json::from_str(r#"{"errors":null}"#).unwrap();
        assert!(body.errors.is_empty());
    }

    #[test]
    fn test_auth_response_minimal() {
        let body: AuthResponse = serde_json::from_str(r#"{"token":"abc123"}"#).unwrap();
        assert_eq!(body.token, "abc123");
        assert!(body.user.is_none());
    }

    #[test]
    fn test_profile_response() {
        let json = r#"{"success":true,"user":{"id":4,"username":"ana","email":"ana@example.com"}}"#;
        let body: ProfileResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.user.username, "ana");
        assert_eq!(body.user.email.as_deref(), Some("ana@example.com"));
    }

    #[test]
    fn test_register_request_serialization() {
        let request = RegisterRequest {
            username: "a".to_string(),
            email: "bad".to_string(),
            password: "x".to_string(),
            password2: "x".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["username"], "a");
        assert_eq!(json["password2"], "x");
    }
}
