use std::time::Duration;

use reqwest::{
    Method, StatusCode,
    blocking::{Client, Response},
};
use serde_json::Value;

use crate::{
    Error, Res,
    config::Settings,
    management::TokenManager,
    types::Token,
};

/// Builds the blocking HTTP client shared by the token manager and the API client.
pub fn build_http_client(timeout: Duration) -> Res<Client> {
    let client = Client::builder().timeout(timeout).build()?;
    Ok(client)
}

/// Authenticated access to the catalog API.
///
/// Every request carries a bearer token from the owned [`TokenManager`]. A 401
/// answer invalidates the token and the request is sent once more with a fresh
/// one; any further failure is returned as [`Error::ApiRequest`].
pub struct ApiClient {
    tokens: TokenManager,
    http: Client,
    api_url: String,
}

impl ApiClient {
    pub fn new(tokens: TokenManager, http: Client, api_url: impl Into<String>) -> Self {
        Self {
            tokens,
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Res<Self> {
        let http = build_http_client(settings.timeout)?;
        let tokens = TokenManager::new(
            settings.credentials.clone(),
            settings.token_url.clone(),
            http.clone(),
        );
        Ok(Self::new(tokens, http, settings.api_url.clone()))
    }

    pub fn get(&mut self, path: &str, query: &[(&str, String)]) -> Res<Value> {
        self.request(Method::GET, path, query)
    }

    /// Issues `method path?query` and returns the parsed JSON body.
    pub fn request(&mut self, method: Method, path: &str, query: &[(&str, String)]) -> Res<Value> {
        let token = self.tokens.get_valid_token()?;
        let mut res = self.send(&method, path, query, &token)?;

        if res.status() == StatusCode::UNAUTHORIZED {
            tracing::debug!(path, "token rejected, retrying once with a fresh token");
            self.tokens.invalidate();
            let token = self.tokens.get_valid_token()?;
            res = self.send(&method, path, query, &token)?;
        }

        let status = res.status();
        if !status.is_success() {
            return Err(Error::ApiRequest {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        let body = res.text()?;
        serde_json::from_str(&body)
            .map_err(|e| Error::MalformedResponse(format!("{path}: body is not JSON: {e}")))
    }

    pub fn tokens(&mut self) -> &mut TokenManager {
        &mut self.tokens
    }

    fn send(
        &self,
        method: &Method,
        path: &str,
        query: &[(&str, String)],
        token: &Token,
    ) -> Res<Response> {
        let url = format!("{}{}", self.api_url, path);
        tracing::debug!(%method, path, "sending request");

        let res = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(&token.access_token)
            .query(query)
            .send()?;
        Ok(res)
    }
}
