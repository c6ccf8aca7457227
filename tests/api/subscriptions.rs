use crate::helpers::{assert_is_redirect_to, spawn_app};

#[tokio::test]
async fn subscribe_redirects_home_and_welcomes_the_reader() {
    // Arrange
    let app = spawn_app().await;

    // Act - Part 1 - Submit the sign-up form
    let body = "name=Test%20User&email=user%40example.com";
    let response = app.post_subscriptions(body.into()).await;

    // Assert
    assert_is_redirect_to(&response, "/");

    // Act - Part 2 - Follow the redirect
    let html_page = app.get_html("/").await;
    assert!(html_page.contains("Welcome to our newsletter, Test User!"));

    // Act - Part 3 - Reload the home page
    let html_page = app.get_html("/").await;
    assert!(!html_page.contains("Welcome to our newsletter, Test User!"));
}

#[tokio::test]
async fn subscribe_registers_the_new_subscriber() {
    let app = spawn_app().await;

    app.post_subscriptions("name=le%20guin&email=ursula_le_guin%40gmail.com".into())
        .await;

    let active = app.registry.list_active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].email.as_ref(), "ursula_le_guin@gmail.com");
    assert_eq!(active[0].name.as_ref().unwrap().as_ref(), "le guin");
}

#[tokio::test]
async fn the_name_is_optional() {
    let app = spawn_app().await;

    let response = app
        .post_subscriptions("email=ursula_le_guin%40gmail.com".into())
        .await;

    assert_is_redirect_to(&response, "/");
    assert!(app.get_html("/").await.contains("Welcome to our newsletter!"));
    assert!(app.registry.is_active("ursula_le_guin@gmail.com"));
}

#[tokio::test]
async fn a_second_sign_up_with_the_same_email_is_rejected() {
    let app = spawn_app().await;
    let body = "name=Test%20User&email=user%40example.com";
    app.post_subscriptions(body.into()).await;
    app.get_html("/").await;

    // Different spelling, same address
    let response = app
        .post_subscriptions("name=Someone&email=USER%40example.com".into())
        .await;

    assert_is_redirect_to(&response, "/");
    let html_page = app.get_html("/").await;
    assert!(html_page.contains("already subscribed"));
    let active = app.registry.list_active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].name.as_ref().unwrap().as_ref(), "Test User");
}

#[tokio::test]
async fn invalid_form_data_is_reported_without_registering_anyone() {
    let app = spawn_app().await;
    let test_cases = vec![
        ("name=le%20guin", "missing the email"),
        ("", "missing both name and email"),
        ("name=Ursula&email=", "empty email"),
        ("name=Ursula&email=definitely-not-an-email", "invalid email"),
        ("name=%7BUrsula%7D&email=ursula%40example.com", "invalid name"),
    ];

    for (invalid_body, error_message) in test_cases {
        // Act
        let response = app.post_subscriptions(invalid_body.into()).await;

        // Assert
        assert_is_redirect_to(&response, "/");
        let html_page = app.get_html("/").await;
        assert!(
            html_page.contains(r#"class="flash flash-error""#),
            "The home page did not show an error when the payload was {}.",
            error_message
        );
    }
    assert!(app.registry.is_empty());
}

#[tokio::test]
async fn flash_messages_are_only_rendered_when_present() {
    let app = spawn_app().await;
    assert!(!app.get_html("/").await.contains("flash-messages"));

    app.post_subscriptions("email=a%40example.com".into()).await;

    let html_page = app.get_html("/").await;
    assert!(html_page.contains(r#"<section class="flash-messages">"#));
    assert!(html_page.contains(r#"class="flash flash-info""#));
    // Shown once only
    assert!(!app.get_html("/").await.contains("flash-messages"));
}

#[tokio::test]
async fn the_home_page_counts_active_subscribers() {
    let app = spawn_app().await;
    assert!(app.get_html("/").await.contains("Be the first to subscribe!"));

    app.post_subscriptions("email=a%40example.com".into()).await;
    app.post_subscriptions("email=b%40example.com".into()).await;

    assert!(
        app.get_html("/")
            .await
            .contains("2 readers are already subscribed.")
    );
}
