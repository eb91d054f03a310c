use crate::domain::model::{error_response, Route};
use crate::utils::error::{ClientError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use url::Url;

/// Thin wrapper around reqwest for the Cornerstone backend.
///
/// Every endpoint wrapper funnels through [`ApiClient::request`], which never
/// fails: transport errors, non-JSON bodies and bad URLs all come back as
/// `{"status": "error", "error_message": ...}`. HTTP status codes are not
/// inspected, so a 500 with a JSON body is returned like any other response.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self::with_client(Client::new(), Url::parse(base_url)?))
    }

    pub fn with_client(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends one request and returns the parsed JSON body, or the error shape.
    pub async fn request<B>(&self, route: &Route, method: Method, data: Option<&B>) -> Value
    where
        B: Serialize + ?Sized,
    {
        match self.try_request(route, method, data).await {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("API Error: {} {}: {}", self.base_url, route, e);
                error_response(e.to_string())
            }
        }
    }

    /// Fallible form of [`ApiClient::request`]. GET requests never carry a
    /// body, even when `data` is given.
    pub async fn try_request<B>(
        &self,
        route: &Route,
        method: Method,
        data: Option<&B>,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let request = self.build_request(route, method.clone(), data)?;
        tracing::debug!("📡 {} {}", method, route);

        let response = request.send().await.map_err(ClientError::Transport)?;
        tracing::debug!("📡 {} {} -> {}", method, route, response.status());

        response.json::<Value>().await.map_err(ClientError::Decode)
    }

    /// JSON content type on every request; a body only for non-GET methods.
    fn build_request<B>(
        &self,
        route: &Route,
        method: Method,
        data: Option<&B>,
    ) -> Result<RequestBuilder>
    where
        B: Serialize + ?Sized,
    {
        let url = route.resolve(&self.base_url)?;
        let is_get = method == Method::GET;

        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(data) = data {
            if !is_get {
                request = request.body(serde_json::to_vec(data)?);
            }
        }

        Ok(request)
    }

    pub(crate) async fn get(&self, route: Route) -> Value {
        self.request::<()>(&route, Method::GET, None).await
    }

    pub(crate) async fn post<B>(&self, route: Route, data: &B) -> Value
    where
        B: Serialize + ?Sized,
    {
        self.request(&route, Method::POST, Some(data)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_new_rejects_unparseable_base() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_get_drops_body_but_keeps_content_type() {
        let client = ApiClient::new("http://localhost:5001/api").unwrap();
        let request = client
            .build_request(
                &Route::new("/job-details"),
                Method::GET,
                Some(&json!({"x": 1})),
            )
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.url().as_str(), "http://localhost:5001/api/job-details");
        assert!(request.body().is_none());
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_post_serializes_body() {
        let client = ApiClient::new("http://localhost:5001/api").unwrap();
        let request = client
            .build_request(
                &Route::new("/close-bid"),
                Method::POST,
                Some(&json!({"job_id": "JOB_1"})),
            )
            .unwrap()
            .build()
            .unwrap();

        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(
            serde_json::from_slice::<Value>(body).unwrap(),
            json!({"job_id": "JOB_1"})
        );
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_post_with_empty_object_still_sends_body() {
        let client = ApiClient::new("http://localhost:5001/api").unwrap();
        let request = client
            .build_request(
                &Route::new("/complete-workflow-adk"),
                Method::POST,
                Some(&json!({})),
            )
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(request.body().and_then(|b| b.as_bytes()), Some(&b"{}"[..]));
    }

    #[tokio::test]
    async fn test_get_sends_json_content_type() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/job-details")
                .header("content-type", "application/json");
            then.status(200).json_body(json!({"status": "success"}));
        });

        let client = ApiClient::new(&server.url("/api")).unwrap();
        let result = client
            .request(&Route::new("/job-details"), Method::GET, Some(&json!({"x": 1})))
            .await;

        mock.assert();
        assert_eq!(result, json!({"status": "success"}));
    }

    #[tokio::test]
    async fn test_non_json_body_becomes_error_shape() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/health");
            then.status(200).body("<html>not json</html>");
        });

        let client = ApiClient::new(&server.url("/api")).unwrap();
        let result = client.get(Route::new("/health")).await;

        assert_eq!(result["status"], "error");
        assert!(!result["error_message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_try_request_reports_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/close-bid");
            then.status(200).body("");
        });

        let client = ApiClient::new(&server.url("/api")).unwrap();
        let err = client
            .try_request(&Route::new("/close-bid"), Method::POST, Some(&json!({})))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Decode(_)));
    }
}
