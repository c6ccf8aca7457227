use crate::helpers::spawn_app;

#[tokio::test]
async fn the_stylesheet_is_served() {
    let app = spawn_app().await;

    let response = app.get("/static/css/main.css").await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(
        response
            .headers()
            .get("Content-Type")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/css")
    );
}

#[tokio::test]
async fn a_missing_asset_is_404() {
    let app = spawn_app().await;

    let response = app.get("/static/css/missing.css").await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn pages_link_to_a_stylesheet_that_is_served() {
    let app = spawn_app().await;
    let html_page = app.get_html("/").await;

    let needle = r#"rel="stylesheet" href=""#;
    let start = html_page.find(needle).unwrap() + needle.len();
    let end = start + html_page[start..].find('"').unwrap();
    let response = app.get(&html_page[start..end]).await;

    assert_eq!(response.status().as_u16(), 200);
}
