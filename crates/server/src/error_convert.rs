use dioxus::prelude::ServerFnError;
use shared_types::AppError;

/// Convert a transport-level reqwest failure into an AppError.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        tracing::error!("auth API timed out: {err}");
    } else {
        tracing::error!("auth API unreachable: {err}");
    }
    AppError::upstream("Authentication service unavailable")
}

/// Convert an AppError into a ServerFnError by serializing as JSON.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        reqwest_to_app_error(self)
    }
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}

/// Trait for validating request DTOs before processing.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AppErrorKind, LoginRequest};

    #[test]
    fn server_fn_error_carries_app_error_json() {
        let err = AppError::unauthorized("Invalid email or password").into_server_fn_error();
        let parsed = AppError::from_server_error(&err.to_string()).unwrap();
        assert_eq!(parsed.kind, AppErrorKind::Unauthorized);
        assert_eq!(parsed.message, "Invalid email or password");
    }

    #[test]
    fn invalid_login_request_reports_fields() {
        let req = LoginRequest {
            email: "not-an-email".into(),
            password: String::new(),
        };
        let err = req.validate_request().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field_errors.contains_key("email"));
        assert!(err.field_errors.contains_key("password"));
    }

    #[test]
    fn valid_login_request_passes() {
        let req = LoginRequest {
            email: "nurse.joy@clinic.example".into(),
            password: "hunter2".into(),
        };
        assert!(req.validate_request().is_ok());
    }
}
