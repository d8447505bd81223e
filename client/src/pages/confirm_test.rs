use super::*;

#[test]
fn missing_or_blank_token_fails_without_request() {
    let failed = ConfirmOutcome::Failed(MISSING_TOKEN.to_owned());
    assert_eq!(confirm_token(None), Err(failed.clone()));
    assert_eq!(confirm_token(Some("  ".to_owned())), Err(failed));
}

#[test]
fn token_is_trimmed() {
    assert_eq!(confirm_token(Some(" abc ".to_owned())), Ok("abc".to_owned()));
}

#[test]
fn server_message_is_preferred() {
    let result: Result<(), ApiError> =
        Err(ApiError::Status { status: 400, message: Some("Token already used".to_owned()) });
    assert_eq!(
        ConfirmOutcome::from_result(&result),
        ConfirmOutcome::Failed("Token already used".to_owned())
    );
}

#[test]
fn network_failure_uses_fallback() {
    let result: Result<(), ApiError> = Err(ApiError::Network("offline".to_owned()));
    assert_eq!(ConfirmOutcome::from_result(&result), ConfirmOutcome::Failed(CONFIRM_FALLBACK.to_owned()));
    assert_eq!(ConfirmOutcome::from_result(&Ok::<(), ApiError>(())), ConfirmOutcome::Confirmed);
}
