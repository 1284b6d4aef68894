mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use serde_json::json;

#[tokio::test]
async fn test_joined_participant_create_flow() {
    println!("\n\n[+] Running test: test_joined_participant_create_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let seminar = client.create_test_seminar("Signup Target", "2025-11-21").await;
    println!("[+] Seeded seminar {}.", seminar.id);

    println!("[>] Sending POST request to /joined-participants/");
    let req = test::TestRequest::post()
        .uri("/joined-participants/")
        .set_json(json!({
            "seminar": seminar.id,
            "participant_email": "signup@x.com",
            "participant_name": "Sam Signup",
            "metadata": { "source": "landing-page" }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["participant_email"], "signup@x.com");
    assert_eq!(body["participant_name"], "Sam Signup");
    // signing up is not attending
    assert_eq!(body["present"], false);
    assert!(body["check_in"].is_null());
    assert!(body["joined_at"].is_string());
    println!("[/] Test passed: Direct signup created a non-present join row.");
}

#[tokio::test]
async fn test_joined_participant_duplicate_conflict() {
    println!("\n\n[+] Running test: test_joined_participant_duplicate_conflict");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let seminar = client.create_test_seminar("Signup Target", "2025-11-21").await;
    let payload = json!({
        "seminar": seminar.id,
        "participant_email": "dup@x.com"
    });

    println!("[>] Sending first POST request to /joined-participants/");
    let req = test::TestRequest::post()
        .uri("/joined-participants/")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    println!("[>] Sending duplicate POST request for the same pair.");
    let req = test::TestRequest::post()
        .uri("/joined-participants/")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "record already exists");
    assert_eq!(
        ctx.db.list_joined_participants(Some(seminar.id)).await.unwrap().len(),
        1
    );
    println!("[/] Test passed: Duplicate signup answered with a conflict.");
}

#[tokio::test]
async fn test_evaluation_create_and_duplicate() {
    println!("\n\n[+] Running test: test_evaluation_create_and_duplicate");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let seminar = client.create_test_seminar("Evaluated Seminar", "2025-11-21").await;
    let payload = json!({
        "seminar": seminar.id,
        "participant_email": "eval@x.com",
        "answers": { "1": "Very relevant", "2": "Yes" }
    });

    println!("[>] Sending POST request to /evaluations/");
    let req = test::TestRequest::post()
        .uri("/evaluations/")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["answers"]["1"], "Very relevant");

    println!("[>] Sending duplicate POST request for the same pair.");
    let req = test::TestRequest::post()
        .uri("/evaluations/")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ctx.db.list_evaluations(Some(seminar.id)).await.unwrap().len(), 1);
    println!("[/] Test passed: One evaluation per pair, duplicates rejected.");
}

#[tokio::test]
async fn test_certificate_duplicate_pair_conflict() {
    println!("\n\n[+] Running test: test_certificate_duplicate_pair_conflict");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let seminar = client.create_test_seminar("Certified Seminar", "2025-11-21").await;

    println!("[>] Sending first POST request to /certificates/");
    let req = test::TestRequest::post()
        .uri("/certificates/")
        .set_json(json!({
            "seminar": seminar.id,
            "participant_email": "cert@x.com",
            "participant_name": "Cara Cert",
            "file_url": "https://files.example/certs/0001.pdf",
            "certificate_number": "CERT-0001"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let first: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(first["certificate_number"], "CERT-0001");

    println!("[>] Sending duplicate POST request for the same pair.");
    let req = test::TestRequest::post()
        .uri("/certificates/")
        .set_json(json!({
            "seminar": seminar.id,
            "participant_email": "cert@x.com",
            "certificate_number": "CERT-0002"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let rows = ctx.db.list_certificates(Some(seminar.id)).await.unwrap();
    assert_eq!(rows.len(), 1);
    // no silent overwrite, the stored row still carries the first number
    assert_eq!(rows[0].certificate_number, "CERT-0001");
    println!("[/] Test passed: Duplicate certificate rejected without overwrite.");
}

#[tokio::test]
async fn test_certificate_number_reuse_conflict() {
    println!("\n\n[+] Running test: test_certificate_number_reuse_conflict");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let first = client.create_test_seminar("Seminar A", "2025-11-21").await;
    let second = client.create_test_seminar("Seminar B", "2025-11-22").await;

    println!("[>] Issuing CERT-7 in the first seminar.");
    let req = test::TestRequest::post()
        .uri("/certificates/")
        .set_json(json!({
            "seminar": first.id,
            "participant_email": "one@x.com",
            "certificate_number": "CERT-7"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    println!("[>] Reusing CERT-7 for a different seminar and participant.");
    let req = test::TestRequest::post()
        .uri("/certificates/")
        .set_json(json!({
            "seminar": second.id,
            "participant_email": "two@x.com",
            "certificate_number": "CERT-7"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(ctx.db.list_certificates(Some(second.id)).await.unwrap().is_empty());
    println!("[/] Test passed: Certificate numbers are unique across seminars.");
}

#[tokio::test]
async fn test_certificate_requires_number() {
    println!("\n\n[+] Running test: test_certificate_requires_number");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let seminar = client.create_test_seminar("Certified Seminar", "2025-11-21").await;

    println!("[>] Sending POST request without a certificate_number.");
    let req = test::TestRequest::post()
        .uri("/certificates/")
        .set_json(json!({
            "seminar": seminar.id,
            "participant_email": "cert@x.com"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["certificate_number"], "this field is required");
    println!("[/] Test passed: certificate_number is required.");
}
