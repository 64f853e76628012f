use anyhow::{anyhow, Result};
use quizgate_core::{ApiError, ApiGateway};
use reqwest::Method;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn success_response_is_passed_through_untouched() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/quiz-info"))
        .respond_with(
            ResponseTemplate::new(203)
                .insert_header("x-quiz-version", "7")
                .set_body_string(r#"{"size": 3, "scores": []}"#),
        )
        .mount(&server)
        .await;

    let gateway = ApiGateway::new(server.uri())?;
    let response = gateway.call(Method::GET, "quiz-info", None, None).await?;

    assert_eq!(response.status().as_u16(), 203);
    assert_eq!(response.headers().get("x-quiz-version").unwrap(), "7");
    assert_eq!(response.text().await?, r#"{"size": 3, "scores": []}"#);
    Ok(())
}

#[tokio::test]
async fn content_type_always_set_and_no_token_means_no_authorization() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/questions/all"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = ApiGateway::new(server.uri())?;
    gateway.call(Method::DELETE, "questions/all", None, None).await?;

    let requests = server
        .received_requests()
        .await
        .ok_or_else(|| anyhow!("request recording disabled"))?;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].headers.get("content-type").unwrap(), "application/json");
    assert!(requests[0].headers.get("authorization").is_none());
    Ok(())
}

#[tokio::test]
async fn token_is_sent_as_bearer_with_json_body() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/questions/5"))
        .and(header("authorization", "Bearer tok.en.value"))
        .and(body_json(json!({"title": "T"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = ApiGateway::new(server.uri())?;
    let body = json!({"title": "T"});
    let response = gateway
        .call(Method::PUT, "/questions/5", Some(&body), Some("tok.en.value"))
        .await?;
    assert_eq!(response.status().as_u16(), 204);
    Ok(())
}

#[tokio::test]
async fn unauthorized_is_tagged_not_navigated() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/questions/42"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "expired"})))
        .mount(&server)
        .await;

    let gateway = ApiGateway::new(server.uri())?;
    let err = gateway
        .call(Method::DELETE, "questions/42", None, Some("stale"))
        .await
        .err()
        .ok_or_else(|| anyhow!("expected error"))?;
    assert!(matches!(err, ApiError::Unauthorized));
    Ok(())
}

#[tokio::test]
async fn other_statuses_are_rejected_with_body() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/questions/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Question 99 not found"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/participations"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Incorrect number of answers"))
        .mount(&server)
        .await;

    let gateway = ApiGateway::new(server.uri())?;

    let err = gateway
        .call(Method::GET, "questions/99", None, None)
        .await
        .err()
        .ok_or_else(|| anyhow!("expected error"))?;
    assert!(matches!(err, ApiError::NotFound(ref body) if body.contains("99")));

    let err = gateway
        .call(Method::POST, "participations", Some(&json!({})), None)
        .await
        .err()
        .ok_or_else(|| anyhow!("expected error"))?;
    assert!(err.to_string().contains("Incorrect number of answers"));
    Ok(())
}

#[tokio::test]
async fn transport_failure_is_network_error() -> Result<()> {
    // Nothing listens on the port once the listener is dropped
    let port = std::net::TcpListener::bind("127.0.0.1:0")?.local_addr()?.port();

    let gateway = ApiGateway::new(format!("http://127.0.0.1:{}", port))?;
    let err = gateway
        .call(Method::GET, "quiz-info", None, None)
        .await
        .err()
        .ok_or_else(|| anyhow!("expected error"))?;
    assert!(matches!(err, ApiError::Network(_)));
    Ok(())
}

#[tokio::test]
async fn login_posts_password_without_token() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "a.b.c"})))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = ApiGateway::new(server.uri())?;
    let response = gateway.login("hunter2").await?;
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["token"], "a.b.c");

    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests[0].headers.get("authorization").is_none());
    Ok(())
}
