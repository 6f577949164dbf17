#![allow(dead_code)]

use fact_shield_core::{
    ApiClient, ApiError, ClientConfig, HttpRequest, HttpResponse, Method, Transport,
};
use futures::channel::oneshot;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const BASE: &str = "http://api.test";

pub fn url(path: &str) -> String {
    format!("{BASE}{path}")
}

/// Answers from a fixed table keyed by method and URL, recording every request.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    routes: Rc<RefCell<HashMap<(&'static str, String), HttpResponse>>>,
    seen: Rc<RefCell<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        self.routes.borrow_mut().insert(
            (method.as_str(), url(path)),
            HttpResponse {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.seen.borrow().clone()
    }

    pub fn client(&self) -> ApiClient<ScriptedTransport> {
        ApiClient::new(ClientConfig::new(BASE), self.clone())
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let key = (request.method.as_str(), request.url.clone());
        self.seen.borrow_mut().push(request);
        let found = self.routes.borrow().get(&key).cloned();
        found.ok_or_else(|| ApiError::Transport(format!("no route for {} {}", key.0, key.1)))
    }
}

/// Holds each request open until the test releases it, so responses can be
/// delivered in any order.
#[derive(Clone, Default)]
pub struct DeferredTransport {
    pending: Rc<RefCell<HashMap<String, oneshot::Receiver<HttpResponse>>>>,
}

impl DeferredTransport {
    pub fn expect(&self, path: &str) -> oneshot::Sender<HttpResponse> {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().insert(url(path), rx);
        tx
    }

    pub fn client(&self) -> ApiClient<DeferredTransport> {
        ApiClient::new(ClientConfig::new(BASE), self.clone())
    }
}

impl Transport for DeferredTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let rx = self.pending.borrow_mut().remove(&request.url);
        let rx = rx.ok_or_else(|| ApiError::Transport(format!("unexpected {}", request.url)))?;
        rx.await
            .map_err(|_| ApiError::Transport("response dropped".into()))
    }
}

pub fn ok(body: &str) -> HttpResponse {
    HttpResponse {
        status: 200,
        body: body.to_string(),
    }
}
