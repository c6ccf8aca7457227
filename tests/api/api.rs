use crate::helpers::spawn_app;

#[tokio::test]
async fn the_sign_up_and_opt_out_scenario_maps_to_status_codes() {
    let app = spawn_app().await;
    let subscriber = serde_json::json!({"name": "Test User", "email": "user@example.com"});
    let email = serde_json::json!({"email": "user@example.com"});

    let response = app.post_api_subscriptions(&subscriber).await;
    assert_eq!(response.status().as_u16(), 201);
    let outcome: serde_json::Value = response.json().await.unwrap();
    let message = outcome["message"].as_str().unwrap();
    assert_eq!(outcome["success"], true);
    assert!(message.contains("Welcome to our newsletter"));

    let response = app.post_api_subscriptions(&subscriber).await;
    assert_eq!(response.status().as_u16(), 409);
    let outcome: serde_json::Value = response.json().await.unwrap();
    let message = outcome["message"].as_str().unwrap();
    assert_eq!(outcome["success"], false);
    assert!(message.contains("already subscribed"));

    let response = app.post_api_unsubscribe(&email).await;
    assert_eq!(response.status().as_u16(), 200);
    let outcome: serde_json::Value = response.json().await.unwrap();
    let message = outcome["message"].as_str().unwrap();
    assert!(message.contains("successfully removed"));

    let response = app.post_api_unsubscribe(&email).await;
    assert_eq!(response.status().as_u16(), 404);
    let outcome: serde_json::Value = response.json().await.unwrap();
    let message = outcome["message"].as_str().unwrap();
    assert!(message.contains("couldn't find your subscription"));
}

#[tokio::test]
async fn api_rejects_invalid_subscribers_with_400() {
    let app = spawn_app().await;
    let test_cases = vec![
        (serde_json::json!({"name": "Ursula"}), "missing the email"),
        (serde_json::json!({"email": ""}), "empty email"),
        (
            serde_json::json!({"email": "definitely-not-an-email"}),
            "invalid email",
        ),
        (
            serde_json::json!({"name": "<b>Ursula</b>", "email": "ursula@example.com"}),
            "invalid name",
        ),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = app.post_api_subscriptions(&invalid_body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload was {}.",
            error_message
        );
    }
    assert!(app.registry.is_empty());
}

#[tokio::test]
async fn api_opt_out_without_an_email_is_400() {
    let app = spawn_app().await;

    let response = app.post_api_unsubscribe(&serde_json::json!({})).await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn api_answers_a_mistyped_body_with_a_400_outcome() {
    let app = spawn_app().await;
    let test_cases = vec![
        ("/api/subscriptions", serde_json::json!({"email": 5})),
        (
            "/api/subscriptions",
            serde_json::json!({"name": ["Ursula"], "email": "u@example.com"}),
        ),
        (
            "/api/subscriptions/unsubscribe",
            serde_json::json!({"email": 5}),
        ),
    ];

    for (path, body) in test_cases {
        let response = app
            .api_client
            .post(format!("{}{}", &app.address, path))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request for {} on {}.",
            body,
            path
        );
        let outcome: serde_json::Value = response.json().await.unwrap();
        assert_eq!(outcome["success"], false);
        assert!(outcome["message"].is_string());
    }
    assert!(app.registry.is_empty());
}

#[tokio::test]
async fn the_openapi_document_describes_the_subscription_endpoints() {
    let app = spawn_app().await;

    let response = app.get("/api/openapi.json").await;

    assert_eq!(response.status().as_u16(), 200);
    let document: serde_json::Value = response.json().await.unwrap();
    assert!(document["paths"]["/api/subscriptions"]["post"].is_object());
    assert!(document["paths"]["/api/subscriptions/unsubscribe"]["post"].is_object());
    assert!(document["paths"]["/api/subscribers"]["get"].is_object());
}
