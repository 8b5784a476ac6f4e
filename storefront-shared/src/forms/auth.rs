//! Submission state of the login and signup forms.
//!
//! Both forms follow the same lifecycle: the submit button is disabled with a
//! busy label while the request runs, and re-enabled with its idle label in a
//! final step whatever the outcome. Only the failure rendering differs.

use crate::errors::ClientError;
use crate::models::{FieldErrors, NON_FIELD_ERRORS};

/// Which accounts form is being submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFormKind {
    Login,
    Signup,
}

impl AuthFormKind {
    /// Translation key of the submit label while idle.
    #[must_use]
    pub const fn idle_label_key(self) -> &'static str {
        match self {
            Self::Login => "auth.login.submit",
            Self::Signup => "auth.signup.submit",
        }
    }

    /// Translation key of the submit label while the request runs.
    #[must_use]
    pub const fn busy_label_key(self) -> &'static str {
        match self {
            Self::Login => "auth.login.submitting",
            Self::Signup => "auth.signup.submitting",
        }
    }

    /// Map a failed submission to what the error panel shows.
    #[must_use]
    pub fn failure(self, error: &ClientError) -> FormError {
        match (self, error) {
            (Self::Signup, ClientError::Validation { errors, message }) => {
                let items = field_error_items(errors);
                if items.is_empty() {
                    message
                        .clone()
                        .map_or(FormError::Rejected, FormError::Message)
                } else {
                    FormError::Fields(items)
                }
            }
            (Self::Login, ClientError::Validation { errors, .. }) => errors
                .get(NON_FIELD_ERRORS)
                .and_then(|error| error.first_message())
                .map_or(FormError::Rejected, |message| {
                    FormError::Message(message.to_string())
                }),
            (_, ClientError::Network { .. } | ClientError::Decode { .. }) => FormError::Network,
            _ => FormError::Rejected,
        }
    }
}

/// One `field: message` line per field, using the first message of each.
#[must_use]
pub fn field_error_items(errors: &FieldErrors) -> Vec<String> {
    errors
        .iter()
        .filter_map(|error| {
            error
                .first_message()
                .map(|message| format!("{}: {message}", error.field))
        })
        .collect()
}

/// What the error panel under a form shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Signup validation failures, rendered as a list.
    Fields(Vec<String>),
    /// A single message from the server.
    Message(String),
    /// Rejected without a usable message; the generic fallback is shown.
    Rejected,
    /// The request did not complete; the connectivity message is shown.
    Network,
}

/// Lifecycle of a form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthFormState {
    submitting: bool,
    error: Option<FormError>,
}

impl AuthFormState {
    /// Start a submission: hide the previous error and disable the button.
    /// Returns `false` when a submission is already running.
    pub fn begin(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.error = None;
        true
    }

    /// Final step of every submission, successful or not.
    pub fn finish(&mut self, error: Option<FormError>) {
        self.submitting = false;
        self.error = error;
    }

    #[must_use]
    pub const fn submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub const fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    /// Translation key for the submit label in the current state.
    #[must_use]
    pub const fn label_key(&self, kind: AuthFormKind) -> &'static str {
        if self.submitting {
            kind.busy_label_key()
        } else {
            kind.idle_label_key()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApiErrorResponse;

    fn validation(json: &str) -> ClientError {
        let body: ApiErrorResponse = serde_json::from_str(json).unwrap();
        ClientError::Validation {
            errors: body.errors,
            message: body.message,
        }
    }

    #[test]
    fn test_signup_invalid_email_example() {
        let mut state = AuthFormState::default();
        assert!(state.begin());
        assert_eq!(state.label_key(AuthFormKind::Signup), "auth.signup.submitting");

        let error = validation(r#"{"errors":{"email":["invalid"]}}"#);
        state.finish(Some(AuthFormKind::Signup.failure(&error)));

        assert_eq!(
            state.error(),
            Some(&FormError::Fields(vec!["email: invalid".to_string()]))
        );
        assert!(!state.submitting());
        assert_eq!(state.label_key(AuthFormKind::Signup), "auth.signup.submit");
    }

    #[test]
    fn test_signup_uses_first_message_per_field() {
        let error = validation(
            r#"{"errors":{"username":["Ya existe","Muy corto"],"password":"Muy común"}}"#,
        );
        assert_eq!(
            AuthFormKind::Signup.failure(&error),
            FormError::Fields(vec![
                "username: Ya existe".to_string(),
                "password: Muy común".to_string()
            ])
        );
    }

    #[test]
    fn test_signup_without_field_errors_uses_message() {
        let error = validation(r#"{"message":"Error en el registro","errors":{}}"#);
        assert_eq!(
            AuthFormKind::Signup.failure(&error),
            FormError::Message("Error en el registro".to_string())
        );
        assert_eq!(
            AuthFormKind::Signup.failure(&validation("{}")),
            FormError::Rejected
        );
    }

    #[test]
    fn test_login_shows_non_field_error() {
        let error = validation(
            r#"{"errors":{"non_field_errors":["Credenciales inválidas","otra"]}}"#,
        );
        assert_eq!(
            AuthFormKind::Login.failure(&error),
            FormError::Message("Credenciales inválidas".to_string())
        );
    }

    #[test]
    fn test_login_falls_back_without_server_message() {
        let error = validation(r#"{"errors":{"username":["requerido"]}}"#);
        assert_eq!(AuthFormKind::Login.failure(&error), FormError::Rejected);

        let error = ClientError::Http {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(AuthFormKind::Login.failure(&error), FormError::Rejected);
    }

    #[test]
    fn test_network_errors_are_distinct() {
        for kind in [AuthFormKind::Login, AuthFormKind::Signup] {
            assert_eq!(
                kind.failure(&ClientError::network("offline")),
                FormError::Network
            );
            assert_eq!(
                kind.failure(&ClientError::decode("not json")),
                FormError::Network
            );
        }
    }

    #[test]
    fn test_double_submit_is_refused() {
        let mut state = AuthFormState::default();
        assert!(state.begin());
        assert!(!state.begin());
        state.finish(None);
        assert!(state.begin());
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut state = AuthFormState::default();
        state.begin();
        state.finish(Some(FormError::Network));
        state.begin();
        assert_eq!(state.error(), None);
    }
}
