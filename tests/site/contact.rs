use hyper::{Method, StatusCode};

use crate::{get, send, server};

#[tokio::test]
async fn given_contact_page_when_requested_then_empty_form_renders() {
    let response = get(&server(), "/contact").await;
    let html = response.text();

    assert_eq!(response.status, StatusCode::OK);
    assert!(html.contains(r#"method="post" action="/contact""#));
    assert!(html.contains("owner@example.org"));
}

#[tokio::test(start_paused = true)]
async fn given_valid_post_when_submitting_then_submitted_view_refreshes_back() {
    let response = send(
        &server(),
        Method::POST,
        "/contact",
        "name=Visitor&email=visitor%40example.org&subject=Hello&message=Hi+there",
    )
    .await;
    let html = response.text();

    assert_eq!(response.status, StatusCode::OK);
    assert!(html.contains("Pesan Terkirim!"));
    assert!(html.contains("Terima kasih, Visitor."));
    assert!(html.contains(r#"content="3;url=/contact""#));
}

#[tokio::test(start_paused = true)]
async fn given_invalid_post_when_submitting_then_unprocessable_with_field_errors() {
    let response = send(
        &server(),
        Method::POST,
        "/contact",
        "name=&email=bad&subject=Hello&message=Hi",
    )
    .await;
    let html = response.text();

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains("name is required"));
    assert!(html.contains("email address is invalid"));
    assert!(html.contains(r#"value="Hello""#));
    assert!(!html.contains("Pesan Terkirim!"));
}
