// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use bytes::Bytes;
use http::{Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;
use tower::Service;

type ResponseFuture = std::pin::Pin<
    Box<dyn std::future::Future<Output = Result<Response<Body>, tower::BoxError>> + Send>,
>;

/// Path of the IntegrationSource collection in `namespace`
pub fn sources_path(namespace: &str) -> String {
    format!(
        "/apis/sources.knative.dev/v1alpha1/namespaces/{}/integrationsources",
        namespace
    )
}

fn json_response(status: u16, body: String) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body.into_bytes()))
        .unwrap()
}

/// A mock HTTP service that returns predefined responses based on request paths.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
    delay: Option<Duration>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    /// Add a response for requests with `method` matching the exact path
    pub fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    pub fn on_put(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PUT", path, status, body)
    }

    pub fn on_delete(self, path: &str, status: u16, body: &str) -> Self {
        self.on("DELETE", path, status, body)
    }

    /// Hold every response back for `delay`
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Every `(method, path)` received so far, in arrival order
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let responses = self.responses.lock().unwrap();

        // Try exact match first
        if let Some(resp) = responses.get(&(method.to_string(), path.to_string())) {
            return Some(resp.clone());
        }

        // Fall back to the longest registered prefix
        responses
            .iter()
            .filter(|((m, p), _)| m == method && path.starts_with(p.as_str()))
            .max_by_key(|((_, p), _)| p.len())
            .map(|(_, resp)| resp.clone())
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = ResponseFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        self.requests
            .lock()
            .unwrap()
            .push((method.clone(), path.clone()));
        let response = self.find_response(&method, &path);
        let delay = self.delay;

        Box::pin(async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            match response {
                Some((status, body)) => Ok(json_response(status, body)),
                // Default 404 for unmatched requests
                None => Ok(json_response(404, not_found_json("unknown", &path))),
            }
        })
    }
}

/// Stateful stand-in for the API server that keeps IntegrationSources in memory.
///
/// Stored objects are returned without `apiVersion`/`kind`, the way a
/// generated client may hand them back.
#[derive(Clone, Default)]
pub struct InMemoryApiServer {
    objects: Arc<Mutex<BTreeMap<(String, String), Value>>>,
}

impl InMemoryApiServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn parse_path(path: &str) -> Option<(String, Option<String>)> {
        let rest = path.strip_prefix("/apis/sources.knative.dev/v1alpha1/namespaces/")?;
        let mut parts = rest.split('/');
        let namespace = parts.next()?.to_string();
        if parts.next()? != "integrationsources" {
            return None;
        }
        let name = parts.next().filter(|n| !n.is_empty()).map(str::to_string);
        Some((namespace, name))
    }

    fn handle(&self, method: &str, path: &str, body: Bytes) -> (u16, String) {
        let Some((namespace, name)) = Self::parse_path(path) else {
            return (404, not_found_json("path", path));
        };
        let mut objects = self.objects.lock().unwrap();

        match (method, name) {
            ("GET", Some(name)) => match objects.get(&(namespace, name.clone())) {
                Some(obj) => (200, obj.to_string()),
                None => (404, not_found_json("integrationsources", &name)),
            },
            ("GET", None) => {
                let items: Vec<Value> = objects
                    .iter()
                    .filter(|((ns, _), _)| *ns == namespace)
                    .map(|(_, obj)| obj.clone())
                    .collect();
                (200, json!({ "metadata": {}, "items": items }).to_string())
            }
            ("POST", None) => {
                let mut obj = match serde_json::from_slice::<Value>(&body) {
                    Ok(obj) => obj,
                    Err(e) => return (400, status_json(400, "BadRequest", &e.to_string())),
                };
                let name = obj["metadata"]["name"].as_str().unwrap_or_default().to_string();
                let key = (namespace.clone(), name.clone());
                if objects.contains_key(&key) {
                    return (409, already_exists_json("integrationsources", &name));
                }
                strip_type_meta(&mut obj);
                obj["metadata"]["namespace"] = json!(namespace);
                obj["metadata"]["resourceVersion"] = json!("1");
                objects.insert(key, obj.clone());
                (201, obj.to_string())
            }
            ("PUT", Some(name)) => {
                let key = (namespace, name.clone());
                if !objects.contains_key(&key) {
                    return (404, not_found_json("integrationsources", &name));
                }
                let mut obj = match serde_json::from_slice::<Value>(&body) {
                    Ok(obj) => obj,
                    Err(e) => return (400, status_json(400, "BadRequest", &e.to_string())),
                };
                strip_type_meta(&mut obj);
                objects.insert(key, obj.clone());
                (200, obj.to_string())
            }
            ("DELETE", Some(name)) => match objects.remove(&(namespace, name.clone())) {
                Some(obj) => (200, obj.to_string()),
                None => (404, not_found_json("integrationsources", &name)),
            },
            _ => (405, status_json(405, "MethodNotAllowed", "method not allowed")),
        }
    }
}

fn strip_type_meta(obj: &mut Value) {
    if let Some(map) = obj.as_object_mut() {
        map.remove("apiVersion");
        map.remove("kind");
    }
}

impl Service<Request<Body>> for InMemoryApiServer {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = ResponseFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let server = self.clone();
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        Box::pin(async move {
            let body = req.into_body().collect().await?.to_bytes();
            let (status, body) = server.handle(&method, &path, body);
            Ok::<_, tower::BoxError>(json_response(status, body))
        })
    }
}

fn status_json(code: u16, reason: &str, message: &str) -> String {
    json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    status_json(404, "NotFound", &format!("{} \"{}\" not found", resource, name))
}

/// Create a 409 already exists response
pub fn already_exists_json(resource: &str, name: &str) -> String {
    status_json(
        409,
        "AlreadyExists",
        &format!("{} \"{}\" already exists", resource, name),
    )
}

/// Create a mock IntegrationSource JSON body without type identity
pub fn integration_source_json(name: &str, namespace: &str, sink_uri: &str) -> Value {
    json!({
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": format!("uid-{}", name)
        },
        "spec": {
            "sink": { "uri": sink_uri }
        }
    })
}
