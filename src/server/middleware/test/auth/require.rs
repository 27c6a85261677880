use super::*;

/// Tests a request carrying a token the verifier accepts.
///
/// Verifies the guard strips the `Bearer ` prefix and hands back the
/// verifier's principal.
///
/// Expected: Ok(Principal) with the verifier's subject
#[tokio::test]
async fn accepts_verified_bearer_token() {
    let state = state_accepting("good-token", "auth0|captain").await;
    let headers = authorization("Bearer good-token");

    let principal = AuthGuard::new(&state, &headers).require().await.unwrap();

    assert_eq!(principal.sub, "auth0|captain");
}

/// Tests a request with no `Authorization` header at all.
///
/// Expected: Err(AuthError::MissingBearer), verifier never consulted
#[tokio::test]
async fn rejects_missing_header() {
    let state = state_accepting("good-token", "auth0|captain").await;
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&state, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::Auth(AuthError::MissingBearer))
    ));
}

/// Tests an `Authorization` header using a non-bearer scheme.
///
/// Expected: Err(AuthError::MissingBearer)
#[tokio::test]
async fn rejects_non_bearer_scheme() {
    let state = state_accepting("good-token", "auth0|captain").await;
    let headers = authorization("Basic Z29vZC10b2tlbg==");

    let result = AuthGuard::new(&state, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::Auth(AuthError::MissingBearer))
    ));
}

/// Tests a bearer token the verifier turns away.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_unverified_token() {
    let state = state_accepting("good-token", "auth0|captain").await;
    let headers = authorization("Bearer forged-token");

    let result = AuthGuard::new(&state, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::Auth(AuthError::InvalidToken))
    ));
}

/// Tests that the scheme comparison is exact, including case.
///
/// `bearer good-token` is not a `Bearer ` prefix; the guard treats it as a
/// missing token rather than guessing at the caller's intent.
///
/// Expected: Err(AuthError::MissingBearer)
#[tokio::test]
async fn rejects_lowercase_scheme() {
    let state = state_accepting("good-token", "auth0|captain").await;
    let headers = authorization("bearer good-token");

    let result = AuthGuard::new(&state, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::Auth(AuthError::MissingBearer))
    ));
}
