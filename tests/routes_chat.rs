//! Chat route integration tests
//!
//! Drives the real route table against a wiremock chat provider.

mod common;

use actix_web::{App, test};
use habla_gateway::server::routes;
use habla_gateway::server::routes::chat::SYSTEM_PROMPT;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "model": "test-model",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }
        ],
        "usage": {"prompt_tokens": 12, "completion_tokens": 9, "total_tokens": 21}
    })
}

macro_rules! app {
    ($server:expr) => {{
        let uri = $server.uri();
        let state = common::test_state(&uri, &uri, &uri, &uri);
        test::init_service(App::new().app_data(state).configure(routes::configure)).await
    }};
}

#[actix_web::test]
async fn chat_single_message_issues_one_upstream_call() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("¡Hola!")))
        .expect(1)
        .mount(&provider)
        .await;

    let app = app!(provider);

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(json!({"message": "hola"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    // Completion content comes back unchanged
    assert_eq!(body["response"], "¡Hola!");

    // Exactly one upstream call, with a one-element user-role history
    // after the system instruction
    let requests = provider.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let sent: Value = requests[0].body_json().unwrap();
    assert_eq!(sent["model"], "test-model");

    let messages = sent["messages"].as_array().unwrap();
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[0]["content"], SYSTEM_PROMPT);

    let user_messages: Vec<&Value> = messages.iter().filter(|m| m["role"] == "user").collect();
    assert_eq!(user_messages.len(), 1);
    assert_eq!(user_messages[0]["content"], "hola");
}

#[actix_web::test]
async fn chat_empty_message_rejected_without_upstream_call() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("unreachable")))
        .expect(0)
        .mount(&provider)
        .await;

    let app = app!(provider);

    for body in [json!({"message": ""}), json!({"messages": []}), json!({})] {
        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let error: Value = test::read_body_json(resp).await;
        assert!(error["error"].is_string());
    }
}

#[actix_web::test]
async fn chat_rejects_body_with_both_shapes() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("unreachable")))
        .expect(0)
        .mount(&provider)
        .await;

    let app = app!(provider);

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(json!({
            "message": "hola",
            "messages": [{"role": "user", "content": "adios"}]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let error: Value = test::read_body_json(resp).await;
    assert!(error["error"].is_string());
}

#[actix_web::test]
async fn chat_malformed_json_gets_error_envelope() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("unreachable")))
        .expect(0)
        .mount(&provider)
        .await;

    let app = app!(provider);

    let req = test::TestRequest::post()
        .uri("/chat")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"message\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let error: Value = test::read_body_json(resp).await;
    assert!(error["error"].is_string());
}

#[actix_web::test]
async fn chat_history_must_end_with_user_message() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("unreachable")))
        .expect(0)
        .mount(&provider)
        .await;

    let app = app!(provider);

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(json!({"messages": [
            {"role": "user", "content": "hola"},
            {"role": "assistant", "content": "¡Hola!"}
        ]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn chat_forwards_full_history_after_system_prompt() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Son las tres.")))
        .expect(1)
        .mount(&provider)
        .await;

    let app = app!(provider);

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(json!({"messages": [
            {"role": "user", "content": "hola"},
            {"role": "assistant", "content": "¡Hola! ¿En qué puedo ayudarte?"},
            {"role": "user", "content": "¿qué hora es?"}
        ]}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["response"], "Son las tres.");

    let requests = provider.received_requests().await.unwrap();
    let sent: Value = requests[0].body_json().unwrap();
    let messages = sent["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[3]["content"], "¿qué hora es?");
}

#[actix_web::test]
async fn chat_provider_failure_surfaces_as_error_payload() {
    let provider = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&provider)
        .await;

    let app = app!(provider);

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(json!({"message": "hola"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let error: Value = test::read_body_json(resp).await;
    assert!(error["error"].as_str().unwrap().contains("upstream unavailable"));
}
