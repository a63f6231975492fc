use axum::Router;

/// Serve `router` on an ephemeral local port and return its base URL
pub(crate) async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake upstream");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("fake upstream");
    });

    format!("http://{addr}")
}

pub(crate) const TEST_KEY: &str = "test-key-0123456789abcdef";
