use pretty_assertions::assert_eq;
use shared_types::{AppError, AppErrorKind};

// Server functions share one process-wide limiter (5 attempts per 60s by
// default), so each test uses its own addresses.
async fn attempt(email: &str) -> Option<AppErrorKind> {
    match server::api::login(email.to_string(), "not-the-password".to_string()).await {
        Ok(_) => None,
        Err(e) => AppError::from_server_error(&e.to_string()).map(|err| err.kind),
    }
}

#[tokio::test]
async fn server_fn_login_is_limited_per_normalised_email() {
    let spellings = [
        "limit.case@clinic.test",
        "Limit.Case@clinic.test",
        "  limit.case@clinic.test",
        "LIMIT.CASE@CLINIC.TEST ",
        "limit.case@Clinic.Test",
    ];
    for (n, email) in spellings.iter().enumerate() {
        let kind = attempt(email).await;
        assert_ne!(
            kind,
            Some(AppErrorKind::RateLimited),
            "attempt {} should not be limited yet",
            n + 1
        );
    }

    let sixth = attempt(" Limit.CASE@clinic.test ").await;
    assert_eq!(sixth, Some(AppErrorKind::RateLimited));

    let other = attempt("someone.else@clinic.test").await;
    assert_ne!(other, Some(AppErrorKind::RateLimited), "other emails keep their own window");
}

#[tokio::test]
async fn invalid_email_is_rejected_before_the_limiter() {
    for _ in 0..7 {
        assert_eq!(attempt("not-an-email").await, Some(AppErrorKind::ValidationError));
    }
}
