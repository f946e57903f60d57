//! Fetch Transport
//!
//! Issues requests with `credentials: include` and maps failures onto
//! [`ApiError`].

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestCredentials, RequestInit, Response};

use crate::error::{ApiError, ApiResult};
use crate::models::MessageResponse;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const UNREACHABLE: &str = "Could not reach the server. Check your connection.";

/// `/task/<action>/<id>` with the id percent-encoded
pub fn task_path(action: &str, id: &str) -> String {
    format!("/task/{}/{}", action, utf8_percent_encode(id, SEGMENT))
}

pub(super) enum Body<'a> {
    Empty,
    Json(String),
    Form(&'a FormData),
}

impl Body<'_> {
    pub(super) fn json<T: Serialize>(value: &T) -> ApiResult<Self> {
        serde_json::to_string(value)
            .map(Body::Json)
            .map_err(|e| ApiError::Validation(format!("Could not encode request: {}", e)))
    }
}

#[derive(Debug, Clone)]
pub struct Transport {
    base_url: String,
}

impl Transport {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(super) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send("GET", path, Body::Empty).await
    }

    pub(super) async fn send<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Body<'_>,
    ) -> ApiResult<T> {
        let url = self.url(path);
        log::debug!("{} {}", method, url);

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_credentials(RequestCredentials::Include);
        match &body {
            Body::Empty => {}
            Body::Json(json) => opts.set_body(&JsValue::from_str(json)),
            Body::Form(form) => opts.set_body(form),
        }

        let request = Request::new_with_str_and_init(&url, &opts).map_err(unreachable)?;
        if let Body::Json(_) = body {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(unreachable)?;
        }

        let window = web_sys::window().ok_or_else(|| ApiError::Network("No browser window".into()))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(unreachable)?
            .dyn_into()
            .map_err(unreachable)?;

        let status = response.status();
        let payload = match response.json() {
            Ok(promise) => JsFuture::from(promise).await.ok(),
            Err(_) => None,
        };

        if !response.ok() {
            let message = payload
                .and_then(|p| serde_wasm_bindgen::from_value::<MessageResponse>(p).ok())
                .and_then(|m| m.message);
            log::warn!("{} {} failed with {}", method, path, status);
            return Err(ApiError::from_status(status, message));
        }

        let payload = payload.ok_or_else(|| {
            log::error!("{} {}: response body is not JSON", method, path);
            ApiError::Network("The server sent an unreadable response.".into())
        })?;
        serde_wasm_bindgen::from_value(payload).map_err(|e| {
            log::error!("{} {}: unexpected response shape: {}", method, path, e);
            ApiError::Network("The server sent an unexpected response.".into())
        })
    }
}

fn unreachable(err: JsValue) -> ApiError {
    log::error!("fetch failed: {:?}", err);
    ApiError::Network(UNREACHABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let transport = Transport::new("http://localhost:4000/api/v1/");
        assert_eq!(transport.url("/user/me"), "http://localhost:4000/api/v1/user/me");
    }

    #[test]
    fn test_task_path_encodes_id() {
        assert_eq!(task_path("update", "665f1c"), "/task/update/665f1c");
        assert_eq!(task_path("delete", "a/b c?"), "/task/delete/a%2Fb%20c%3F");
    }

    #[test]
    fn test_json_body() {
        let body = Body::json(&serde_json::json!({"email": "a@b.c"})).unwrap();
        assert!(matches!(body, Body::Json(ref s) if s == r#"{"email":"a@b.c"}"#));
    }
}
