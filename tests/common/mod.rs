#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{Value, json};
use sportcli::{config::Settings, spotify::ApiClient, types::Credentials};

/// `base64("client-id:client-secret")`
pub const BASIC_AUTH: &str = "Basic Y2xpZW50LWlkOmNsaWVudC1zZWNyZXQ=";

pub fn settings_for(server: &ServerGuard) -> Settings {
    Settings::new(Credentials::new("client-id", "client-secret"))
        .with_api_url(format!("{}/v1", server.url()))
        .with_token_url(format!("{}/api/token", server.url()))
}

pub fn client_for(server: &ServerGuard) -> ApiClient {
    ApiClient::from_settings(&settings_for(server)).expect("client built")
}

/// Token endpoint answering `token-1`, `token-2`, ... on consecutive calls.
pub fn mock_token_endpoint(server: &mut ServerGuard, expires_in: i64, hits: usize) -> Mock {
    let counter = Arc::new(AtomicUsize::new(0));
    server
        .mock("POST", "/api/token")
        .match_header("authorization", BASIC_AUTH)
        .match_body(Matcher::UrlEncoded(
            "grant_type".into(),
            "client_credentials".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body_from_request(move |_| {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            json!({
                "access_token": format!("token-{n}"),
                "token_type": "Bearer",
                "expires_in": expires_in
            })
            .to_string()
            .into()
        })
        .expect(hits)
        .create()
}

pub fn artist_json(id: &str, name: &str, followers: u64, popularity: u8) -> Value {
    json!({
        "id": id,
        "name": name,
        "popularity": popularity,
        "followers": { "href": null, "total": followers },
        "genres": ["electronica"],
        "external_urls": { "spotify": format!("https://open.spotify.com/artist/{id}") }
    })
}

pub fn mock_profile(
    server: &mut ServerGuard,
    token: &str,
    artist: Value,
    hits: usize,
) -> Mock {
    let id = artist["id"].as_str().unwrap_or_default().to_string();
    server
        .mock("GET", format!("/v1/artists/{id}").as_str())
        .match_header("authorization", format!("Bearer {token}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(artist.to_string())
        .expect(hits)
        .create()
}

pub fn mock_search(server: &mut ServerGuard, query: &str, items: Vec<Value>, hits: usize) -> Mock {
    server
        .mock("GET", "/v1/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), query.into()),
            Matcher::UrlEncoded("type".into(), "artist".into()),
            Matcher::UrlEncoded("limit".into(), "5".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "artists": { "items": items } }).to_string())
        .expect(hits)
        .create()
}

pub fn mock_top_tracks(server: &mut ServerGuard, id: &str, tracks: Value, hits: usize) -> Mock {
    server
        .mock("GET", format!("/v1/artists/{id}/top-tracks").as_str())
        .match_query(Matcher::UrlEncoded("market".into(), "US".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "tracks": tracks }).to_string())
        .expect(hits)
        .create()
}
