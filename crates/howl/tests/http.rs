use howl::{Api, Error, HttpClient};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    task::JoinHandle,
};

/// Answers a single request with a canned response and hands back the raw request.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0; 8192];
        let n = socket.read(&mut buf).await.unwrap();

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();

        String::from_utf8_lossy(&buf[..n]).to_string()
    });

    (format!("http://{addr}"), handle)
}

#[tokio::test]
async fn fetches_users_with_the_bot_token() {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"id":"200000000000000001","username":"wolf","discriminator":"0042"}"#,
    )
    .await;

    let http = HttpClient::new(base, Some("sekrit".to_string()));
    let user = http.fetch_user("200000000000000001").await.unwrap();

    assert_eq!(user.tag(), "wolf#0042");

    let request = server.await.unwrap().to_lowercase();
    assert!(request.starts_with("get /users/200000000000000001 "));
    assert!(request.contains("authorization: bot sekrit"));
}

#[tokio::test]
async fn missing_users_are_not_found() {
    let (base, server) = serve_once("404 Not Found", r#"{"message":"Unknown User"}"#).await;

    let http = HttpClient::new(base, None);

    assert!(matches!(
        http.fetch_user("200000000000000009").await,
        Err(Error::NotFound)
    ));
    assert!(!server.await.unwrap().to_lowercase().contains("authorization"));
}

#[tokio::test]
async fn other_failures_keep_the_api_message() {
    let (base, _server) = serve_once("500 Internal Server Error", r#"{"message":"boom"}"#).await;

    let http = HttpClient::new(format!("{base}/"), None);

    match http.fetch_member("100000000000000001", "200000000000000001").await {
        Err(Error::HttpError { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("unexpected {other:?}"),
    }
}
