//! End-to-end tests driving the HTTP router.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use counterframe_protocol::{SigningKey, State, TokenSigner};
use counterframe_server::{FrameServer, ServerConfig};
use counterframe_testkit::prelude::*;
use tower::ServiceExt;

async fn send(router: Router, method: Method, body: String) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri("/api/count")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn returned_state(html: &str) -> State {
    let token = meta_content(html, "fc:frame:state").expect("frame carries a token");
    fixture_signer()
        .verify_state(&token)
        .expect("returned token verifies")
}

#[tokio::test]
async fn golden_scenarios_over_http() {
    let server = fixture_server();

    for scenario in golden_scenarios() {
        let token = scenario.incoming.as_ref().map(token_for);
        let body = frame_body(scenario.button_index, token.as_deref());
        let (status, html) = send(server.router(), Method::POST, body).await;

        assert_eq!(status, StatusCode::OK, "{}", scenario.id);
        assert_eq!(returned_state(&html), scenario.expected, "{}", scenario.id);
        assert_eq!(button_labels(&html), scenario.expected_buttons, "{}", scenario.id);
    }
}

#[tokio::test]
async fn first_interaction_document() {
    let (status, html) = send(fixture_server().router(), Method::POST, frame_body(Some(1), None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(returned_state(&html), State::new(1, 1, 0, 1));
    assert_eq!(meta_content(&html, "fc:frame").as_deref(), Some("vNext"));
    assert_eq!(
        meta_content(&html, "fc:frame:post_url").as_deref(),
        Some("https://frame.example/api/count")
    );

    let image = meta_content(&html, "fc:frame:image").unwrap();
    assert_eq!(
        image,
        "https://frame.example/api/images/count?state=\
         %7B%22count%22%3A1%2C%22incs%22%3A1%2C%22decs%22%3A0%2C%22clicks%22%3A1%7D"
    );
    assert!(html.contains(&format!(r#"<meta property="og:image" content="{image}" />"#)));
}

#[tokio::test]
async fn get_and_post_behave_the_same() {
    let server = fixture_server();
    let token = token_for(&State::new(3, 3, 0, 3));
    let body = frame_body(Some(2), Some(&token));

    let (get_status, get_html) = send(server.router(), Method::GET, body.clone()).await;
    let (post_status, post_html) = send(server.router(), Method::POST, body).await;

    assert_eq!(get_status, post_status);
    assert_eq!(returned_state(&get_html), State::new(2, 3, 1, 4));
    assert_eq!(returned_state(&get_html), returned_state(&post_html));
}

#[tokio::test]
async fn get_without_body_starts_from_zero() {
    let (status, html) = send(fixture_server().router(), Method::GET, String::new()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(returned_state(&html), State::new(1, 1, 0, 1));
}

#[tokio::test]
async fn out_of_range_button_index_increments() {
    let server = fixture_server();
    let token = token_for(&State::new(5, 5, 0, 5));

    for index in ["-1", "4294967296"] {
        let body = format!(r#"{{"untrustedData":{{"buttonIndex":{index},"state":"{token}"}}}}"#);
        let (status, html) = send(server.router(), Method::POST, body).await;

        assert_eq!(status, StatusCode::OK, "{index}");
        assert_eq!(returned_state(&html), State::new(6, 6, 0, 6), "{index}");
    }
}

#[tokio::test]
async fn walk_down_to_floor_and_past_it() {
    let server = fixture_server();
    let mut token: Option<String> = None;

    for (index, expected) in [
        (1, State::new(1, 1, 0, 1)),
        (1, State::new(2, 2, 0, 2)),
        (2, State::new(1, 2, 1, 3)),
        (2, State::new(0, 2, 2, 4)),
        (2, State::new(1, 3, 2, 5)),
    ] {
        let body = frame_body(Some(index), token.as_deref());
        let (status, html) = send(server.router(), Method::POST, body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(returned_state(&html), expected);
        token = meta_content(&html, "fc:frame:state");
    }
}

#[tokio::test]
async fn token_from_another_key_is_rejected() {
    let foreign = TokenSigner::new(SigningKey::generate())
        .sign_state(&State::new(9, 9, 0, 9))
        .unwrap();
    let body = frame_body(Some(1), Some(&foreign));
    let (status, text) = send(fixture_server().router(), Method::POST, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "Invalid state");
}

#[tokio::test]
async fn tampered_token_is_rejected() {
    let mut token = token_for(&State::new(1, 1, 0, 1)).into_bytes();
    let middle = token.len() / 2;
    token[middle] ^= 0x01;
    let token = String::from_utf8(token).unwrap();

    let body = frame_body(Some(1), Some(&token));
    let (status, text) = send(fixture_server().router(), Method::POST, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(text, "Invalid state");
}

#[tokio::test]
async fn signed_payload_missing_field_is_internal_error() {
    let token = fixture_signer()
        .sign(br#"{"count":1,"incs":1,"decs":0,"nonce":"x"}"#)
        .unwrap();
    let body = frame_body(Some(1), Some(&token));
    let (status, text) = send(fixture_server().router(), Method::POST, body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(text, "Internal server error");
    assert!(!text.contains("clicks"));
}

#[tokio::test]
async fn oversized_body_is_refused() {
    let key = SigningKey::from_hex(FIXTURE_SECRET_HEX).unwrap();
    let config = ServerConfig::new(FIXTURE_HOST, key)
        .unwrap()
        .with_max_body_bytes(16);
    let server = FrameServer::new(config);

    let (status, _) = send(server.router(), Method::POST, frame_body(Some(1), None)).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn concurrent_requests_with_same_token_derive_independently() {
    let server = fixture_server();
    let token = token_for(&State::new(4, 4, 0, 4));

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let router = server.router();
            let body = frame_body(Some(2), Some(&token));
            tokio::spawn(async move { send(router, Method::POST, body).await })
        })
        .collect();

    let mut tokens = Vec::new();
    for task in tasks {
        let (status, html) = task.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(returned_state(&html), State::new(3, 4, 1, 5));
        tokens.push(meta_content(&html, "fc:frame:state").unwrap());
    }

    tokens.sort();
    tokens.dedup();
    assert_eq!(tokens.len(), 16);
}
