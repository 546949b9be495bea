use std::net::SocketAddr;
use std::sync::Arc;

use puissance4::web::{router, AppState};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn spawn_server() -> anyhow::Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = router(Arc::new(AppState::new("static")));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Ok(addr)
}

/// One request per connection, HTTP/1.1 with `Connection: close` so the
/// response ends when the socket does.
async fn get(addr: SocketAddr, path: &str) -> anyhow::Result<String> {
    let mut stream = TcpStream::connect(addr).await?;
    let request = format!(
        "GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        path
    );
    stream.write_all(request.as_bytes()).await?;
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

async fn post_form(addr: SocketAddr, path: &str, body: &str) -> anyhow::Result<String> {
    let mut stream = TcpStream::connect(addr).await?;
    let request = format!(
        "POST {} HTTP/1.1\r\nHost: localhost\r\n\
         Content-Type: application/x-www-form-urlencoded\r\n\
         Content-Length: {}\r\nConnection: close\r\n\r\n{}",
        path,
        body.len(),
        body
    );
    stream.write_all(request.as_bytes()).await?;
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_home_page_over_the_wire() -> anyhow::Result<()> {
    let addr = spawn_server().await?;

    let resp = get(addr, "/").await?;
    assert!(resp.starts_with("HTTP/1.1 200"), "got: {}", resp);
    assert!(resp.contains("Puissance 4"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_play_without_game_is_400_over_the_wire() -> anyhow::Result<()> {
    let addr = spawn_server().await?;

    let resp = get(addr, "/game/play").await?;
    assert!(resp.starts_with("HTTP/1.1 400"), "got: {}", resp);
    assert!(resp.contains("No game in progress"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_init_then_play_over_the_wire() -> anyhow::Result<()> {
    let addr = spawn_server().await?;

    let body = "player1_name=Alice&player1_color=red&player2_name=Bob&player2_color=yellow";
    let resp = post_form(addr, "/game/init/traitement", body).await?;
    assert!(resp.starts_with("HTTP/1.1 303"), "got: {}", resp);
    assert!(resp.contains("location: /game/play") || resp.contains("Location: /game/play"));

    let resp = get(addr, "/game/play").await?;
    assert!(resp.starts_with("HTTP/1.1 200"), "got: {}", resp);
    assert!(resp.contains("Alice"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_init_redirects_to_error_over_the_wire() -> anyhow::Result<()> {
    let addr = spawn_server().await?;

    let body = "player1_name=x&player1_color=red&player2_name=Bob&player2_color=yellow";
    let resp = post_form(addr, "/game/init/traitement", body).await?;
    assert!(resp.starts_with("HTTP/1.1 303"), "got: {}", resp);
    assert!(resp.contains("/error?code=400"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_stylesheet_over_the_wire() -> anyhow::Result<()> {
    let addr = spawn_server().await?;

    let resp = get(addr, "/static/style.css").await?;
    assert!(resp.starts_with("HTTP/1.1 200"), "got: {}", resp);
    assert!(resp.contains("text/css"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_error_page_over_the_wire() -> anyhow::Result<()> {
    let addr = spawn_server().await?;

    let resp = get(addr, "/error?code=400&msg=column%20is%20already%20full").await?;
    assert!(resp.starts_with("HTTP/1.1 200"), "got: {}", resp);
    assert!(resp.contains("column is already full"));
    Ok(())
}
