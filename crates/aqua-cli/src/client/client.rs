use crate::client::{CliClientResult, error::ClientError};

use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the aqua-server REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Send a request and decode the server's error envelope on failure
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let body: Value = response.json().await?;

        #[allow(clippy::collapsible_if)]
        if !status.is_success() {
            if let Some(error) = body.get("error") {
                let code = error
                    .get("code")
                    .and_then(Value::as_str)
                    .unwrap_or("UNKNOWN")
                    .to_string();
                let message = error
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("Unknown error")
                    .to_string();
                return Err(ClientError::api_error(code, message));
            }
        }

        Ok(body)
    }

    // ======================== Health ========================

    /// Check server health
    ///
    /// `/healthz` answers with a plain-text body, not JSON.
    pub async fn health(&self) -> CliClientResult<Value> {
        let response = self.request(Method::GET, "/healthz").send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::api_error("UNHEALTHY", body));
        }

        Ok(Value::String(body))
    }

    // ======================== User Operations ========================

    /// Register a new user profile
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        sex: Option<&str>,
        age: Option<i32>,
        weight_kg: Option<f64>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct RegisterRequest<'a> {
            name: &'a str,
            email: &'a str,
            password: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            sex: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            age: Option<i32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            weight_kg: Option<f64>,
        }

        let body = RegisterRequest {
            name,
            email,
            password,
            sex,
            age,
            weight_kg,
        };

        let req = self.request(Method::POST, "/api/register").json(&body);
        self.execute(req).await
    }

    /// List users with optional search and paging
    pub async fn list_users(
        &self,
        q: Option<&str>,
        limit: Option<i64>,
        offset: Option<i64>,
        order_by: Option<&str>,
        order_dir: Option<&str>,
    ) -> CliClientResult<Value> {
        let mut url = String::from("/api/admin/users");

        // Build query string
        let mut params = vec![];
        if let Some(q) = q {
            params.push(format!("q={}", q));
        }
        if let Some(limit) = limit {
            params.push(format!("limit={}", limit));
        }
        if let Some(offset) = offset {
            params.push(format!("offset={}", offset));
        }
        if let Some(order_by) = order_by {
            params.push(format!("order_by={}", order_by));
        }
        if let Some(order_dir) = order_dir {
            params.push(format!("order_dir={}", order_dir));
        }
        if !params.is_empty() {
            url.push_str(&format!("?{}", params.join("&")));
        }

        let req = self.request(Method::GET, &url);
        self.execute(req).await
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/admin/users/{}", id));
        self.execute(req).await
    }

    /// Partially update a user profile
    ///
    /// Double options distinguish "leave alone" from "clear": the outer
    /// `None` omits the key entirely, `Some(None)` sends an explicit null.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_user(
        &self,
        id: &str,
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
        sex: Option<Option<&str>>,
        age: Option<Option<i32>>,
        weight_kg: Option<Option<f64>>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct UpdateRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            email: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            password: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            sex: Option<Option<&'a str>>,
            #[serde(skip_serializing_if = "Option::is_none")]
            age: Option<Option<i32>>,
            #[serde(skip_serializing_if = "Option::is_none")]
            weight_kg: Option<Option<f64>>,
        }

        let body = UpdateRequest {
            name,
            email,
            password,
            sex,
            age,
            weight_kg,
        };

        let req = self
            .request(Method::PATCH, &format!("/api/admin/users/{}", id))
            .json(&body);
        self.execute(req).await
    }

    /// Delete a user
    pub async fn delete_user(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/api/admin/users/{}", id));
        self.execute(req).await
    }

    // ======================== Stats ========================

    /// Aggregate statistics across all users
    pub async fn stats(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/admin/users/stats");
        self.execute(req).await
    }
}
