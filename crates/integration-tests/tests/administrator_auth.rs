//! End-to-end tests for registration, login and the employee listing.
//!
//! These tests require:
//! - A migrated `PostgreSQL` database (emp-cli migrate)
//! - The web server running (cargo run -p emp-management-web)
//!
//! Run with: cargo test -p emp-management-integration-tests -- --ignored

#![allow(clippy::unwrap_used)]

use emp_management_integration_tests::{base_url, client, unique_mail_address};
use reqwest::{Client, StatusCode, header};

const PASSWORD: &str = "correct horse battery";

async fn register(client: &Client, name: &str, mail_address: &str) -> reqwest::Response {
    client
        .post(format!("{}/insert", base_url()))
        .form(&[
            ("name", name),
            ("mail_address", mail_address),
            ("password", PASSWORD),
            ("repassword", PASSWORD),
        ])
        .send()
        .await
        .unwrap()
}

async fn login(client: &Client, mail_address: &str, password: &str) -> reqwest::Response {
    client
        .post(format!("{}/login", base_url()))
        .form(&[("mail_address", mail_address), ("password", password)])
        .send()
        .await
        .unwrap()
}

fn location(resp: &reqwest::Response) -> Option<&str> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_health() {
    let client = client().unwrap();
    let resp = client
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_register_then_login_shows_employee_list() {
    let client = client().unwrap();
    let mail_address = unique_mail_address("register");

    let resp = register(&client, "Integration Admin", &mail_address).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/"));

    let resp = login(&client, &mail_address, PASSWORD).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Employee List"));
    assert!(body.contains("Integration Admin"));

    let resp = client
        .get(format!("{}/employee/showList", base_url()))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_duplicate_registration_is_rejected() {
    let client = client().unwrap();
    let mail_address = unique_mail_address("duplicate");

    let first = register(&client, "First", &mail_address).await;
    assert_eq!(first.status(), StatusCode::SEE_OTHER);

    let second = register(&client, "Second", &mail_address).await;
    assert_eq!(second.status(), StatusCode::OK);
    let body = second.text().await.unwrap();
    assert!(body.contains("This mail address is already registered"));
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_wrong_password_is_rejected() {
    let client = client().unwrap();
    let mail_address = unique_mail_address("wrong-password");
    register(&client, "Admin", &mail_address).await;

    let resp = login(&client, &mail_address, "not the password").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Mail address or password is invalid"));
    assert!(!body.contains("Employee List"));
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_employee_list_requires_login() {
    let client = client().unwrap();
    let resp = client
        .get(format!("{}/employee/showList", base_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/"));
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_logout_ends_session() {
    let client = client().unwrap();
    let mail_address = unique_mail_address("logout");
    register(&client, "Admin", &mail_address).await;
    assert_eq!(login(&client, &mail_address, PASSWORD).await.status(), StatusCode::OK);

    let resp = client
        .get(format!("{}/logout", base_url()))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/"));

    let resp = client
        .get(format!("{}/employee/showList", base_url()))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}
