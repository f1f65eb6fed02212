use super::*;

/// Tests the matching bearer token is accepted.
///
/// Expected: Ok(())
#[test]
fn accepts_matching_token() {
    let result = guard().require(&headers_with("Bearer test-token"));

    assert_eq!(result, Ok(()));
}

/// Tests the scheme is matched case-insensitively.
///
/// Expected: Ok(()) for lower and upper case schemes
#[test]
fn accepts_any_scheme_case() {
    assert_eq!(guard().require(&headers_with("bearer test-token")), Ok(()));
    assert_eq!(guard().require(&headers_with("BEARER test-token")), Ok(()));
}

/// Tests a request without an Authorization header is rejected.
///
/// Expected: Err(AuthError::MissingHeader)
#[test]
fn rejects_missing_header() {
    let result = guard().require(&HeaderMap::new());

    assert_eq!(result, Err(AuthError::MissingHeader));
}

/// Tests a different token is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_wrong_token() {
    let result = guard().require(&headers_with("Bearer wrong"));

    assert_eq!(result, Err(AuthError::InvalidToken));
}

/// Tests a token that only shares a prefix with the secret is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_token_prefix() {
    let result = guard().require(&headers_with("Bearer test-token-extra"));

    assert_eq!(result, Err(AuthError::InvalidToken));
}

/// Tests values that are not a bearer credential are rejected as malformed.
///
/// Expected: Err(AuthError::MalformedHeader)
#[test]
fn rejects_malformed_header() {
    for value in ["test-token", "Basic dGVzdDp0ZXN0", "Bearer", "Bearer    ", "Token test-token"] {
        let result = guard().require(&headers_with(value));

        assert_eq!(result, Err(AuthError::MalformedHeader), "value: {:?}", value);
    }
}

/// Tests a header value with non-visible ASCII bytes is rejected as malformed.
///
/// Expected: Err(AuthError::MalformedHeader)
#[test]
fn rejects_non_ascii_header() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_bytes(b"Bearer t\xe9st-token").unwrap(),
    );

    let result = guard().require(&headers);

    assert_eq!(result, Err(AuthError::MalformedHeader));
}
