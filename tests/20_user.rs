mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn user_routes_require_a_token() -> Result<()> {
    let Some(server) = common::ensure_server().await else {
        return Ok(());
    };
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/user", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .get(format!("{}/user", server.base_url))
        .bearer_auth("not-a-real-token")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .put(format!("{}/user", server.base_url))
        .header("authorization", "Basic dXNlcjpwYXNz")
        .json(&json!({ "firstName": "Ada" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn get_user_returns_the_authenticated_account() -> Result<()> {
    let Some(server) = common::ensure_server().await else {
        return Ok(());
    };
    let client = reqwest::Client::new();
    let email = common::unique_email("whoami");
    let token = common::register_and_login(&server.base_url, &email, "12345").await?;

    let res = client
        .get(format!("{}/user", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["email"], email.as_str());
    assert!(body.get("passwordHash").is_none());
    assert!(body.get("password_hash").is_none());
    Ok(())
}

#[tokio::test]
async fn profile_update_is_partial() -> Result<()> {
    let Some(server) = common::ensure_server().await else {
        return Ok(());
    };
    let client = reqwest::Client::new();
    let email = common::unique_email("profile");
    let token = common::register_and_login(&server.base_url, &email, "12345").await?;

    let res = client
        .put(format!("{}/user", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "firstName": "Ada" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["firstName"], "Ada");
    assert_eq!(body["email"], email.as_str());

    // A second partial update leaves the first field alone
    let res = client
        .put(format!("{}/user", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "lastName": "Lovelace" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["firstName"], "Ada");
    assert_eq!(body["lastName"], "Lovelace");
    assert_eq!(body["email"], email.as_str());

    Ok(())
}

#[tokio::test]
async fn profile_update_cannot_take_anothers_email() -> Result<()> {
    let Some(server) = common::ensure_server().await else {
        return Ok(());
    };
    let client = reqwest::Client::new();

    let taken = common::unique_email("taken");
    common::register_and_login(&server.base_url, &taken, "12345").await?;

    let email = common::unique_email("wants-taken");
    let token = common::register_and_login(&server.base_url, &email, "12345").await?;

    let res = client
        .put(format!("{}/user", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "email": taken }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "CREDENTIAL_TAKEN");
    Ok(())
}

#[tokio::test]
async fn profile_update_rejects_malformed_email() -> Result<()> {
    let Some(server) = common::ensure_server().await else {
        return Ok(());
    };
    let client = reqwest::Client::new();
    let email = common::unique_email("badmail");
    let token = common::register_and_login(&server.base_url, &email, "12345").await?;

    let res = client
        .put(format!("{}/user", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "email": "nope" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
