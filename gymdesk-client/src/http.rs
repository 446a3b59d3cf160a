// gymdesk-client/src/http.rs
// HTTP 客户端 - 网络通信

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{ItemEnvelope, ListEnvelope, Normalize};

use crate::session::SessionHandle;
use crate::{ClientConfig, ClientError, ClientResult};

/// 服务端返回的错误响应格式
#[derive(serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiErrorResponse {
    fn into_message(self) -> Option<String> {
        self.message.or(self.error).filter(|m| !m.trim().is_empty())
    }
}

/// HTTP 客户端 trait
///
/// The four verbs are transport; the provided methods unwrap the backend's
/// list/item envelopes and run the entity normalizer so callers only ever
/// see canonical records.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;

    /// GET a collection; any envelope shape becomes `Vec<T>`
    async fn get_list<T: Normalize + Send>(&self, path: &str) -> ClientResult<Vec<T>> {
        let envelope: ListEnvelope<Value> = self.get(path).await?;
        if !envelope.is_recognized() {
            tracing::warn!(path, "Unrecognized list payload, treating as empty");
        }
        Ok(T::normalize_all(&envelope.into_vec()))
    }

    /// GET a single record
    async fn get_item<T: Normalize + Send>(&self, path: &str) -> ClientResult<T> {
        let envelope: ItemEnvelope<Value> = self.get(path).await?;
        Ok(T::normalize(&envelope.into_inner()))
    }

    /// POST and normalize the returned record
    async fn post_item<T: Normalize + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let envelope: ItemEnvelope<Value> = self.post(path, body).await?;
        Ok(T::normalize(&envelope.into_inner()))
    }

    /// PUT and normalize the returned record
    async fn put_item<T: Normalize + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let envelope: ItemEnvelope<Value> = self.put(path, body).await?;
        Ok(T::normalize(&envelope.into_inner()))
    }
}

/// 网络 HTTP 客户端
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    session: SessionHandle,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Self::with_session(config, SessionHandle::new(config.session()))
    }

    pub fn with_session(config: &ClientConfig, session: SessionHandle) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: &'static str,
        path: &str,
        mut req: reqwest::RequestBuilder,
    ) -> ClientResult<T> {
        // 过期的会话不发请求
        if let Some(auth) = self.session.authorization()? {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        tracing::debug!(method, path, "API request");
        let response = req.send().await?;
        self.handle_response(path, response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::debug!(path, status = status.as_u16(), "API request failed");
            let message = serde_json::from_str::<ApiErrorResponse>(&text)
                .ok()
                .and_then(ApiErrorResponse::into_message)
                .unwrap_or(text);
            return Err(match status {
                StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
                StatusCode::FORBIDDEN => ClientError::Forbidden(message),
                StatusCode::NOT_FOUND => ClientError::NotFound(message),
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    ClientError::Validation(message)
                }
                _ => ClientError::Api {
                    status: status.as_u16(),
                    message,
                },
            });
        }

        // 204 / empty body → JSON null
        let body = if text.trim().is_empty() { "null" } else { text.as_str() };
        Ok(serde_json::from_str(body)?)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.client.get(self.url(path));
        self.send("GET", path, req).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.client.post(self.url(path)).json(body);
        self.send("POST", path, req).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.client.put(self.url(path)).json(body);
        self.send("PUT", path, req).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.client.delete(self.url(path));
        self.send("DELETE", path, req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join_trims_slashes() {
        let client = NetworkHttpClient::new(&ClientConfig::new("http://api.test/")).unwrap();
        assert_eq!(client.base_url(), "http://api.test");
        assert_eq!(client.url("/api/leads"), "http://api.test/api/leads");
        assert_eq!(client.url("api/leads"), "http://api.test/api/leads");
    }

    #[test]
    fn test_error_body_message() {
        let parsed: ApiErrorResponse = serde_json::from_str(r#"{"error":"bad month"}"#).unwrap();
        assert_eq!(parsed.into_message().as_deref(), Some("bad month"));
        let parsed: ApiErrorResponse = serde_json::from_str(r#"{"message":"  "}"#).unwrap();
        assert_eq!(parsed.into_message(), None);
    }
}
