use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api_error::ApiError;
use crate::endpoint::Endpoint;
use crate::models::UploadResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// The REST surface the page workflows are written against.
///
/// The browser implementation lives in the frontend crate; tests use a
/// recording in-memory backend. Every non-2xx response is an `Err`.
/// Mutation responses are not read beyond their status: pages always
/// re-fetch after a write.
#[allow(async_fn_in_trait)]
pub trait RestBackend {
    /// Whatever the platform hands us for a picked file
    type File;

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, ApiError>;

    async fn send_json<B: Serialize>(&self, method: Method, path: &str, body: &B) -> Result<(), ApiError>;

    /// A JSON request whose JSON answer is the point (searches)
    async fn exchange_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;

    /// URL-encoded form body
    async fn send_form(&self, method: Method, path: &str, fields: &[(&str, String)]) -> Result<(), ApiError>;

    async fn send_empty(&self, method: Method, path: &str) -> Result<(), ApiError>;

    /// Multipart upload, file in field `file`
    async fn upload_file(&self, path: &str, file: &Self::File) -> Result<UploadResponse, ApiError>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Call {
        pub method: Method,
        pub path: String,
        pub body: Option<String>,
    }

    /// Serves canned JSON per GET path and records every call in order.
    #[derive(Default)]
    pub struct RecordingBackend {
        responses: HashMap<String, String>,
        failures: HashMap<(Method, String), ApiError>,
        calls: RefCell<Vec<Call>>,
    }

    impl RecordingBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(mut self, path: &str, json: &str) -> Self {
            self.responses.insert(path.to_string(), json.to_string());
            self
        }

        pub fn fail(mut self, method: Method, path: &str, error: ApiError) -> Self {
            self.failures.insert((method, path.to_string()), error);
            self
        }

        pub fn calls(&self) -> Vec<(Method, String)> {
            self.calls
                .borrow()
                .iter()
                .map(|c| (c.method, c.path.clone()))
                .collect()
        }

        pub fn body_of(&self, method: Method, path: &str) -> Option<String> {
            self.calls
                .borrow()
                .iter()
                .find(|c| c.method == method && c.path == path)
                .and_then(|c| c.body.clone())
        }

        fn record(&self, method: Method, path: &str, body: Option<String>) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call {
                method,
                path: path.to_string(),
                body,
            });
            match self.failures.get(&(method, path.to_string())) {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    impl RestBackend for RecordingBackend {
        type File = String;

        async fn get_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, ApiError> {
            let path = endpoint.to_string();
            self.record(Method::Get, &path, None)?;
            let json = self
                .responses
                .get(&path)
                .ok_or_else(|| ApiError::from_error_body(404, "Not Found", ""))?;
            Ok(serde_json::from_str(json)?)
        }

        async fn send_json<B: Serialize>(&self, method: Method, path: &str, body: &B) -> Result<(), ApiError> {
            let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
            self.record(method, path, Some(body))
        }

        async fn exchange_json<B: Serialize, T: DeserializeOwned>(
            &self,
            method: Method,
            path: &str,
            body: &B,
        ) -> Result<T, ApiError> {
            self.send_json(method, path, body).await?;
            let json = self
                .responses
                .get(path)
                .ok_or_else(|| ApiError::from_error_body(404, "Not Found", ""))?;
            Ok(serde_json::from_str(json)?)
        }

        async fn send_form(&self, method: Method, path: &str, fields: &[(&str, String)]) -> Result<(), ApiError> {
            let body = fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join("&");
            self.record(method, path, Some(body))
        }

        async fn send_empty(&self, method: Method, path: &str) -> Result<(), ApiError> {
            self.record(method, path, None)
        }

        async fn upload_file(&self, path: &str, file: &String) -> Result<UploadResponse, ApiError> {
            self.record(Method::Post, path, Some(file.clone()))?;
            Ok(UploadResponse {
                url: format!("/uploads/{}", file),
            })
        }
    }
}
