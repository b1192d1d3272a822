//! Local HTTP server for integration tests.

#![allow(dead_code)]

use std::io::Cursor;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use tiny_http::{Response, Server};

/// A request as seen by the test server
#[derive(Debug, Clone)]
pub struct Recorded {
    pub url: String,
    pub token: Option<String>,
}

pub struct Reply {
    pub status: u16,
    pub body: Vec<u8>,
    /// Send the body chunked, without a Content-Length
    pub chunked: bool,
}

impl Reply {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
            chunked: false,
        }
    }

    pub fn chunked(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            chunked: true,
        }
    }
}

pub struct TestServer {
    pub base_url: String,
    requests: Receiver<Recorded>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    /// Serve `expected` requests, answering each with `handler(base_url, url)`.
    pub fn start<F>(expected: usize, mut handler: F) -> Self
    where
        F: FnMut(&str, &str) -> Reply + Send + 'static,
    {
        let server = Server::http("127.0.0.1:0").expect("bind test server");
        let port = server
            .server_addr()
            .to_ip()
            .expect("test server listens on an IP address")
            .port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let (tx, requests) = mpsc::channel();
        let base = base_url.clone();
        let handle = thread::spawn(move || {
            for _ in 0..expected {
                let request = match server.recv() {
                    Ok(request) => request,
                    Err(_) => break,
                };

                let url = request.url().to_string();
                let token = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("PRIVATE-TOKEN"))
                    .map(|h| h.value.as_str().to_string());
                let _ = tx.send(Recorded {
                    url: url.clone(),
                    token,
                });

                let reply = handler(&base, &url);
                let length = if reply.chunked {
                    None
                } else {
                    Some(reply.body.len())
                };
                let response = Response::new(
                    reply.status.into(),
                    vec![],
                    Cursor::new(reply.body),
                    length,
                    None,
                )
                .with_chunked_threshold(usize::MAX);
                let _ = request.respond(response);
            }
        });

        Self {
            base_url,
            requests,
            handle: Some(handle),
        }
    }

    /// Requests received so far, in arrival order.
    pub fn received(&self) -> Vec<Recorded> {
        self.requests.try_iter().collect()
    }

    /// Wait for the server thread to finish and return every request it saw.
    pub fn finish(mut self) -> Vec<Recorded> {
        if let Some(handle) = self.handle.take() {
            handle.join().expect("test server thread panicked");
        }
        self.requests.try_iter().collect()
    }
}

/// A base URL nothing listens on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

pub fn client() -> reqwest::blocking::Client {
    relget_core::HttpClientConfig::new()
        .with_timeout(std::time::Duration::from_secs(10))
        .build()
        .unwrap()
}
