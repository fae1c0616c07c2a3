use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Port nothing listens on.
const DEAD_BACKEND: &str = "http://127.0.0.1:1";

fn temp_nori_home() -> TempDir {
    TempDir::new().expect("create temp nori home")
}

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

#[tokio::test]
async fn test_ask_prints_answer() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_nori_home();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({
            "message": "혈압 관리 방법 알려주세요",
            "category": "health",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "규칙적인 운동과 싱겁게 먹는 습관이 도움이 됩니다.",
            "category": "health",
        })))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("nori")
        .env("NORI_HOME", home.path())
        .env_remove("NORI_BACKEND_URL")
        .args(["--backend", &server.uri(), "ask", "  혈압 관리 방법 알려주세요  "])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "규칙적인 운동과 싱겁게 먹는 습관이 도움이 됩니다.",
        ));
}

#[tokio::test]
async fn test_ask_sends_chosen_category() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_nori_home();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({ "category": "travel" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "제주도를 추천해요.",
        })))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("nori")
        .env("NORI_HOME", home.path())
        .env("NORI_BACKEND_URL", server.uri())
        .args(["ask", "--category", "travel", "어디로 갈까요?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("제주도를 추천해요."));
}

#[tokio::test]
async fn test_ask_empty_response_prints_fallback() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_nori_home();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    cargo_bin_cmd!("nori")
        .env("NORI_HOME", home.path())
        .args(["--backend", &server.uri(), "ask", "안녕"])
        .assert()
        .success()
        .stdout(predicate::str::contains("응답을 받지 못했습니다"));
}

#[tokio::test]
async fn test_ask_server_error_prints_generic_fallback() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_nori_home();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .mount(&server)
        .await;

    cargo_bin_cmd!("nori")
        .env("NORI_HOME", home.path())
        .args(["--backend", &server.uri(), "ask", "안녕"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("일시적인 오류가 발생했습니다"));
}

#[test]
fn test_ask_unreachable_backend_prints_network_fallback() {
    let home = temp_nori_home();

    cargo_bin_cmd!("nori")
        .env("NORI_HOME", home.path())
        .args(["--backend", DEAD_BACKEND, "ask", "안녕"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("백엔드 서버에 연결할 수 없습니다"));
}

#[test]
fn test_ask_rejects_blank_message() {
    let home = temp_nori_home();

    cargo_bin_cmd!("nori")
        .env("NORI_HOME", home.path())
        .args(["--backend", DEAD_BACKEND, "ask", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Message is empty"));
}

#[test]
fn test_ask_rejects_unknown_category() {
    let home = temp_nori_home();

    cargo_bin_cmd!("nori")
        .env("NORI_HOME", home.path())
        .args(["--backend", DEAD_BACKEND, "ask", "-c", "cooking", "안녕"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category 'cooking'"));
}

#[tokio::test]
async fn test_piped_stdin_is_sent_as_message() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_nori_home();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({ "message": "파이프 질문" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "파이프 답변",
        })))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("nori")
        .env("NORI_HOME", home.path())
        .args(["--backend", &server.uri()])
        .write_stdin("파이프 질문\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("파이프 답변"));
}

#[tokio::test]
async fn test_health_reports_model() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_nori_home();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "model": "qwen2.5-3b",
        })))
        .mount(&server)
        .await;

    cargo_bin_cmd!("nori")
        .env("NORI_HOME", home.path())
        .args(["--backend", &server.uri(), "health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("qwen2.5-3b"))
        .stdout(predicate::str::contains("healthy"));
}

#[tokio::test]
async fn test_health_not_ready() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_nori_home();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    cargo_bin_cmd!("nori")
        .env("NORI_HOME", home.path())
        .args(["--backend", &server.uri(), "health"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not ready"));
}

#[tokio::test]
async fn test_model_info_describes_model() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_nori_home();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/model-info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model_info": {
                "name": "gemma-2b",
                "status": "loaded",
                "available_models": [],
            }
        })))
        .mount(&server)
        .await;

    cargo_bin_cmd!("nori")
        .env("NORI_HOME", home.path())
        .args(["--backend", &server.uri(), "model-info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gemma-2b"))
        .stdout(predicate::str::contains("로드됨"));
}

#[tokio::test]
async fn test_recommend_prints_table() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_nori_home();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recommend"))
        .and(body_partial_json(json!({ "limit": 2 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recommendations": [
                { "question": "What is a good budget for Jeju?", "score": 0.91 },
                { "question": "How do I file a small claim?", "score": 0.42 },
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("nori")
        .env("NORI_HOME", home.path())
        .args(["--backend", &server.uri(), "recommend", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("What is a good budget for Jeju?"))
        .stdout(predicate::str::contains("0.91"));
}
