use chrono::{Duration, Utc};
use reqwest::blocking::Client;

use crate::{
    Error, Res,
    types::{Credentials, Token, TokenResponse},
};

/// Seconds subtracted from the server-side lifetime of every token.
pub const SAFETY_MARGIN_SECS: i64 = 30;

/// Lifetime assumed when the token endpoint omits `expires_in`.
const DEFAULT_EXPIRES_IN_SECS: i64 = 3600;

/// Caches the access token of the client-credentials flow.
///
/// The manager holds at most one token. [`get_valid_token`](Self::get_valid_token)
/// hands out the cached token while it is valid and performs a new exchange
/// otherwise. There is no refresh token in this flow; an expired token is
/// simply replaced.
///
/// # Expiry
///
/// The server reports a lifetime in `expires_in` seconds. The stored expiry is
/// `now + expires_in - SAFETY_MARGIN_SECS`, so a token is never sent in the
/// last seconds of its lifetime.
///
/// # Example
///
/// ```
/// let mut tokens = TokenManager::new(credentials, config::spotify_apitoken_url(), http);
/// let token = tokens.get_valid_token()?;
/// // cached, no second exchange
/// let same = tokens.get_valid_token()?;
/// assert_eq!(token, same);
/// ```
pub struct TokenManager {
    credentials: Credentials,
    token_url: String,
    http: Client,
    token: Option<Token>,
}

impl TokenManager {
    pub fn new(credentials: Credentials, token_url: impl Into<String>, http: Client) -> Self {
        TokenManager {
            credentials,
            token_url: token_url.into(),
            http,
            token: None,
        }
    }

    /// Returns the cached token while it is valid, otherwise exchanges the
    /// client credentials for a new one.
    ///
    /// # Returns
    ///
    /// - `Ok(Token)` - A token that is valid at the time of the call
    /// - `Err(Error::Authentication)` - The endpoint rejected the credentials;
    ///   carries the status and response body
    /// - `Err(Error::MalformedResponse)` - The answer was not JSON or had no
    ///   `access_token`
    /// - `Err(Error::Http)` - Transport failure or timeout
    pub fn get_valid_token(&mut self) -> Res<Token> {
        if let Some(token) = &self.token {
            if token.is_valid() {
                return Ok(token.clone());
            }
        }

        let token = self.request_token()?;
        self.token = Some(token.clone());
        Ok(token)
    }

    /// Drops the cached token so the next call performs a fresh exchange.
    pub fn invalidate(&mut self) {
        self.token = None;
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    fn request_token(&self) -> Res<Token> {
        tracing::debug!(token_url = %self.token_url, "exchanging client credentials");

        let res = self
            .http
            .post(&self.token_url)
            .basic_auth(
                self.credentials.client_id(),
                Some(self.credentials.client_secret()),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()?;

        let status = res.status();
        let body = res.text()?;
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "token exchange rejected");
            return Err(Error::Authentication {
                status: status.as_u16(),
                body,
            });
        }

        let json: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| Error::MalformedResponse(format!("token response: {e}")))?;

        let access_token = json
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::MalformedResponse("token response without access_token".into()))?;
        let expires_in = json
            .expires_in
            .unwrap_or(DEFAULT_EXPIRES_IN_SECS)
            .clamp(0, 7 * 24 * 3600);

        Ok(Token {
            access_token,
            expires_at: Utc::now() + Duration::seconds(expires_in - SAFETY_MARGIN_SECS),
        })
    }
}
