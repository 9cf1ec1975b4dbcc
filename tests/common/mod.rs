//! In-process mock of the website API backend

#![allow(dead_code)]

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use website_dashboard::config::{ApiConfig, Config};
use website_dashboard::context::AppContext;

/// Canned response for one request path
#[derive(Clone)]
pub struct Route {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
    pub delay: Duration,
}

impl Route {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: "application/json",
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn text(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: "text/plain; charset=utf-8",
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Default)]
struct State {
    routes: HashMap<String, Route>,
    requests: Vec<String>,
}

/// Mock backend serving canned responses keyed by raw request path
#[derive(Clone)]
pub struct MockBackend {
    addr: SocketAddr,
    state: Arc<Mutex<State>>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = Arc::new(Mutex::new(State::default()));

        let server_state = Arc::clone(&state);
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    continue;
                };
                let state = Arc::clone(&server_state);
                tokio::spawn(async move {
                    let io = TokioIo::new(stream);
                    let service = service_fn(move |req| {
                        let state = Arc::clone(&state);
                        async move { handle(req, state).await }
                    });
                    let _ = hyper::server::conn::http1::Builder::new()
                        .serve_connection(io, service)
                        .await;
                });
            }
        });

        Self { addr, state }
    }

    /// Register (or replace) the response for `path`
    pub fn route(&self, path: &str, route: Route) {
        self.state
            .lock()
            .unwrap()
            .routes
            .insert(path.to_string(), route);
    }

    /// Raw paths requested so far, in arrival order
    pub fn requests(&self) -> Vec<String> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            origin: format!("http://{}", self.addr),
            ..ApiConfig::default()
        }
    }

    pub fn context(&self) -> AppContext {
        let config = Config {
            api: self.api_config(),
        };
        AppContext::new(config).unwrap()
    }
}

async fn handle(
    req: Request<hyper::body::Incoming>,
    state: Arc<Mutex<State>>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let path = req.uri().path().to_string();
    let route = {
        let mut state = state.lock().unwrap();
        state.requests.push(path.clone());
        state.routes.get(&path).cloned()
    };

    let Some(route) = route else {
        return Ok(Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Full::new(Bytes::from("requested resource is not found")))
            .unwrap());
    };

    if !route.delay.is_zero() {
        tokio::time::sleep(route.delay).await;
    }

    Ok(Response::builder()
        .status(route.status)
        .header("content-type", route.content_type)
        .body(Full::new(Bytes::from(route.body)))
        .unwrap())
}

/// Base URL of a port nothing listens on
pub async fn unreachable_api_config() -> ApiConfig {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    ApiConfig {
        origin: format!("http://{}", addr),
        ..ApiConfig::default()
    }
}
