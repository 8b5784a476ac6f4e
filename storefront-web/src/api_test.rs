//! Tests for the API client functionality
//!
//! Covers request construction and the mapping of backend responses onto
//! client errors.

#[cfg(test)]
mod tests {
    use crate::api::{
        StorefrontClient, authorization_value, delete_outcome, error_for_status, probe_outcome,
    };
    use shared::errors::ClientError;
    use shared::forms::{AuthFormKind, FormError};
    use shared::models::{ProfileResponse, UserSummary};
    use shared::session::{AuthState, MemoryTokenStore, ProbeOutcome, Session};

    #[test]
    fn test_api_client_creation() {
        let client = StorefrontClient::new("https://tienda.example.com/");
        assert!(format!("{client:?}").contains("https://tienda.example.com"));
    }

    #[test]
    fn test_authorization_header_uses_token_scheme() {
        assert_eq!(authorization_value("abc123"), "Token abc123");
    }

    #[test]
    fn test_rejected_profile_is_unauthorized() {
        assert_eq!(
            error_for_status(401, r#"{"detail":"Invalid token."}"#),
            ClientError::Unauthorized { status: 401 }
        );
        assert_eq!(
            error_for_status(403, ""),
            ClientError::Unauthorized { status: 403 }
        );
    }

    #[test]
    fn test_validation_body_is_parsed() {
        let error = error_for_status(400, r#"{"errors":{"email":["invalid"]}}"#);
        assert_eq!(
            AuthFormKind::Signup.failure(&error),
            FormError::Fields(vec!["email: invalid".to_string()])
        );
    }

    #[test]
    fn test_login_non_field_error_is_parsed() {
        let error = error_for_status(
            400,
            r#"{"success":false,"errors":{"non_field_errors":["Usuario o contraseña incorrectos"]}}"#,
        );
        assert_eq!(
            AuthFormKind::Login.failure(&error),
            FormError::Message("Usuario o contraseña incorrectos".to_string())
        );
    }

    #[test]
    fn test_unstructured_failure_is_http() {
        assert_eq!(
            error_for_status(500, "<h1>Server Error</h1>\n"),
            ClientError::Http {
                status: 500,
                message: "<h1>Server Error</h1>".to_string()
            }
        );
    }

    #[test]
    fn test_delete_success_message() {
        assert_eq!(
            delete_outcome(200, true, r#"{"success":true,"message":"Producto borrado"}"#),
            Ok("Producto borrado".to_string())
        );
        assert_eq!(delete_outcome(200, true, "{}"), Ok("Producto eliminado".to_string()));
    }

    #[test]
    fn test_delete_flagged_failure_with_ok_status() {
        let error = delete_outcome(200, true, r#"{"ok":false,"error":"No autorizado"}"#)
            .unwrap_err();
        assert_eq!(error.user_message(), "No autorizado");
    }

    #[test]
    fn test_delete_ok_status_with_html_body_is_not_confirmed() {
        let login_page = "<!DOCTYPE html><html><body><form id=\"login-form\"></form></body></html>";
        let error = delete_outcome(200, true, login_page).unwrap_err();
        assert!(matches!(error, ClientError::Decode { .. }));

        let error = delete_outcome(200, true, "").unwrap_err();
        assert!(matches!(error, ClientError::Decode { .. }));
    }

    #[test]
    fn test_delete_failure_without_body() {
        let error = delete_outcome(500, false, "Internal Server Error").unwrap_err();
        assert_eq!(error.status(), Some(500));
        assert_eq!(error.user_message(), "Error desconocido del servidor.");
    }

    #[test]
    fn test_accepted_profile_authenticates() {
        let profile = ProfileResponse {
            user: UserSummary {
                username: "ana".to_string(),
                email: None,
            },
        };
        let session = Session::new(MemoryTokenStore::with_token("t0k3n"));
        let state = session.resolve_probe(probe_outcome(Ok(profile)));
        assert_eq!(
            state,
            AuthState::Authenticated {
                username: "ana".to_string()
            }
        );
        assert_eq!(session.token().as_deref(), Some("t0k3n"));
    }

    #[test]
    fn test_rejected_profile_removes_token() {
        let session = Session::new(MemoryTokenStore::with_token("expired"));
        let outcome = probe_outcome(Err(error_for_status(401, "")));
        assert_eq!(outcome, ProbeOutcome::Rejected { status: 401 });
        assert_eq!(session.resolve_probe(outcome), AuthState::Guest);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_unreachable_profile_keeps_token() {
        let session = Session::new(MemoryTokenStore::with_token("kept"));
        let outcome = probe_outcome(Err(ClientError::network("offline")));
        assert!(matches!(outcome, ProbeOutcome::NetworkFailure { .. }));
        assert_eq!(session.resolve_probe(outcome), AuthState::Guest);
        assert_eq!(session.token().as_deref(), Some("kept"));
    }
}
