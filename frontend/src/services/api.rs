use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{ApiError, Endpoint, Method, RestBackend, UploadResponse};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData, UrlSearchParams};

/// API client for the hotel backend. Every request of every page goes
/// through here, so every failure comes back as an `ApiError`.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Same-origin client; paths are sent as they are
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
    }

    fn get_builder(&self, endpoint: &Endpoint) -> RequestBuilder {
        let builder = self.builder(Method::Get, &endpoint.path);
        if endpoint.query.is_empty() {
            builder
        } else {
            builder.query(endpoint.query.iter().map(|(k, v)| (*k, v.as_str())))
        }
    }

    /// Fetch a binary body (PDF exports)
    pub async fn get_bytes(&self, endpoint: &Endpoint) -> Result<Vec<u8>, ApiError> {
        let response = self.get_builder(endpoint).send().await.map_err(network)?;
        let response = ensure_ok(response).await?;
        response
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RestBackend for ApiClient {
    type File = File;

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, ApiError> {
        let response = self
            .get_builder(endpoint)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(network)?;
        read_json(ensure_ok(response).await?).await
    }

    async fn send_json<B: Serialize>(&self, method: Method, path: &str, body: &B) -> Result<(), ApiError> {
        let response = self
            .builder(method, path)
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network)?;
        ensure_ok(response).await.map(|_| ())
    }

    async fn exchange_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .builder(method, path)
            .header("Accept", "application/json")
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network)?;
        read_json(ensure_ok(response).await?).await
    }

    async fn send_form(&self, method: Method, path: &str, fields: &[(&str, String)]) -> Result<(), ApiError> {
        let params = UrlSearchParams::new().map_err(js_encode)?;
        for (key, value) in fields {
            params.append(key, value);
        }
        let response = self
            .builder(method, path)
            .body(params)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network)?;
        ensure_ok(response).await.map(|_| ())
    }

    async fn send_empty(&self, method: Method, path: &str) -> Result<(), ApiError> {
        let response = self.builder(method, path).send().await.map_err(network)?;
        ensure_ok(response).await.map(|_| ())
    }

    async fn upload_file(&self, path: &str, file: &File) -> Result<UploadResponse, ApiError> {
        let form = FormData::new().map_err(js_encode)?;
        form.append_with_blob("file", file).map_err(js_encode)?;
        let response = self
            .builder(Method::Post, path)
            .body(form)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network)?;
        read_json(ensure_ok(response).await?).await
    }
}

fn network(err: gloo::net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn js_encode(err: JsValue) -> ApiError {
    ApiError::Encode(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Turn a non-2xx response into `ApiError::Status` carrying the backend's
/// message.
async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_error_body(
        response.status(),
        &response.status_text(),
        &body,
    ))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let content_type = response.headers().get("content-type").unwrap_or_default();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !is_json_content_type(&content_type) && !body.trim().is_empty() {
        return Err(ApiError::UnexpectedContentType(content_type));
    }
    decode_body(&body)
}

/// 204 and other empty bodies decode as JSON `null`, so `()` and `Option`
/// targets still succeed.
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(ApiError::from)
}

fn is_json_content_type(content_type: &str) -> bool {
    let content_type = content_type.to_ascii_lowercase();
    content_type.contains("application/json") || content_type.contains("+json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_prefixed() {
        let client = ApiClient::with_base_url("http://localhost:8080/".to_string());
        assert_eq!(client.url("/api/reports"), "http://localhost:8080/api/reports");
        assert_eq!(ApiClient::new().url("/api/reports"), "/api/reports");
    }

    #[test]
    fn test_json_content_types() {
        assert!(is_json_content_type("application/json;charset=UTF-8"));
        assert!(is_json_content_type("application/problem+json"));
        assert!(!is_json_content_type("text/html"));
    }

    #[test]
    fn test_empty_body_decodes_as_null() {
        let unit: Option<UploadResponse> = decode_body("").unwrap();
        assert!(unit.is_none());
        let err = decode_body::<UploadResponse>("{}").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
