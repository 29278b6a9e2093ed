// ============================================================================
// Token Issuer Endpoint Tests
// ============================================================================
//
// Exercises POST /api/Authenticate end to end: whitelist checks, the
// precondition failure statuses, and the shape of the issued cookie. Tests
// mutate process environment variables, so they run under #[serial].
//
// ============================================================================

use reqwest::header::SET_COOKIE;
use serial_test::serial;

use test_utils::{configure_issuer_env, reset_env, spawn_app, TEST_AUDIENCE, TEST_ORIGIN, TEST_SECRET};

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

async fn post_authenticate(address: &str, referrer: Option<&str>) -> reqwest::Response {
    let mut request = client().post(format!("http://{address}/api/Authenticate"));
    if let Some(referrer) = referrer {
        request = request.header("Referrer", referrer);
    }
    request.send().await.unwrap()
}

#[tokio::test]
#[serial]
async fn issues_cookie_for_whitelisted_origin() {
    reset_env();
    configure_issuer_env();
    let app = spawn_app().await;

    let response = post_authenticate(&app.address, Some("https://WWW.Example.NET/contact?x=1")).await;
    assert_eq!(response.status(), 200);

    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("Set-Cookie missing")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("authCookie="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Path=/api/"));
    assert!(cookie.contains("SameSite=Strict"));
    // Development environment: no Secure attribute.
    assert!(!cookie.contains("Secure"));

    let token = cookie
        .split(';')
        .next()
        .unwrap()
        .strip_prefix("authCookie=")
        .unwrap()
        .to_string();
    let claims = contact_gateway::token::verify(&token, TEST_SECRET).unwrap();
    assert_eq!(claims.iss, TEST_ORIGIN);
    assert_eq!(claims.aud, TEST_AUDIENCE);
    assert_eq!(claims.exp - claims.iat, 3 * 3600);

    assert_eq!(response.text().await.unwrap(), "");
}

#[tokio::test]
#[serial]
async fn cookie_is_secure_outside_development() {
    reset_env();
    configure_issuer_env();
    std::env::set_var("AZURE_FUNCTIONS_ENVIRONMENT", "Production");
    let app = spawn_app().await;

    let response = post_authenticate(&app.address, Some(TEST_ORIGIN)).await;
    assert_eq!(response.status(), 200);

    let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.ends_with("; Secure"));
}

#[tokio::test]
#[serial]
async fn whitelist_comparison_is_case_insensitive() {
    reset_env();
    configure_issuer_env();
    std::env::set_var("DOMAIN_WHITELIST", "HTTPS://WWW.EXAMPLE.NET");
    let app = spawn_app().await;

    let response = post_authenticate(&app.address, Some(TEST_ORIGIN)).await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[serial]
async fn rejects_origin_outside_the_whitelist() {
    reset_env();
    configure_issuer_env();
    let app = spawn_app().await;

    let response = post_authenticate(&app.address, Some("https://evil.example.org/page")).await;
    assert_eq!(response.status(), 400);

    let body = response.text().await.unwrap();
    assert!(body.contains("https://evil.example.org"));
    assert!(body.contains("is not in the domain whitelist"));
}

#[tokio::test]
#[serial]
async fn rejects_missing_referrer() {
    reset_env();
    configure_issuer_env();
    let app = spawn_app().await;

    let response = post_authenticate(&app.address, None).await;
    assert_eq!(response.status(), 400);
    assert_eq!(
        response.text().await.unwrap(),
        "Referrer header was not supplied"
    );
}

#[tokio::test]
#[serial]
async fn missing_secret_is_a_client_error() {
    reset_env();
    configure_issuer_env();
    std::env::remove_var("JwtSecret");
    let app = spawn_app().await;

    let response = post_authenticate(&app.address, Some(TEST_ORIGIN)).await;
    assert_eq!(response.status(), 400);
    assert_eq!(response.text().await.unwrap(), "JwtSecret setting is empty");
}

#[tokio::test]
#[serial]
async fn missing_audience_is_a_client_error() {
    reset_env();
    configure_issuer_env();
    std::env::remove_var("JwtAudience");
    let app = spawn_app().await;

    let response = post_authenticate(&app.address, Some(TEST_ORIGIN)).await;
    assert_eq!(response.status(), 400);
    assert_eq!(response.text().await.unwrap(), "JwtAudience setting is empty");
}

#[tokio::test]
#[serial]
async fn missing_whitelist_is_a_server_error() {
    reset_env();
    configure_issuer_env();
    std::env::remove_var("DOMAIN_WHITELIST");
    let app = spawn_app().await;

    let response = post_authenticate(&app.address, Some(TEST_ORIGIN)).await;
    assert_eq!(response.status(), 500);
    assert_eq!(
        response.text().await.unwrap(),
        "Domain Whitelist setting is empty"
    );
}

#[tokio::test]
#[serial]
async fn rejects_the_literal_contenttype_header() {
    reset_env();
    configure_issuer_env();
    let app = spawn_app().await;

    let response = client()
        .post(format!("http://{}/api/Authenticate", app.address))
        .header("Referrer", TEST_ORIGIN)
        .header("ContentType", "application/json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    assert_eq!(
        response.text().await.unwrap(),
        "ContentType header is not allowed"
    );
}

#[tokio::test]
#[serial]
async fn a_real_content_type_header_is_allowed() {
    reset_env();
    configure_issuer_env();
    let app = spawn_app().await;

    // Only the header literally named `ContentType` is disallowed.
    let response = client()
        .post(format!("http://{}/api/Authenticate", app.address))
        .header("Referrer", TEST_ORIGIN)
        .header("Content-Type", "application/json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}
