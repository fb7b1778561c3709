use crate::helper::{get_client, spawn_app};

#[tokio::test]
async fn health_check_works() {
    let app = spawn_app().await;
    let client = get_client();

    let response = client
        .get(format!("{}/health_check", app.addr))
        .send()
        .await
        .expect("Request should succeed");

    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}

#[tokio::test]
async fn unknown_paths_render_the_not_found_page() {
    let app = spawn_app().await;
    let client = get_client();

    let response = client
        .get(format!("{}/definitely/not/here", app.addr))
        .send()
        .await
        .expect("Request should succeed");

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn the_stylesheet_is_served() {
    let app = spawn_app().await;
    let client = get_client();

    let response = client
        .get(format!("{}/assets/styles.css", app.addr))
        .send()
        .await
        .expect("Request should succeed");

    assert!(response.status().is_success());
}
