//! # Spotify Integration Module
//!
//! This module is the integration layer between the report tool and the Spotify
//! Web API. It handles authenticated HTTP communication, the catalog endpoints
//! the tool needs, and the flattening of the loosely-typed JSON answers into
//! records.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Session)
//!          ↓
//! Spotify Integration Layer
//!     ├── Endpoints (search, artist profile, top tracks)
//!     ├── Normalization (JSON → ArtistRecord / TrackRecord)
//!     └── ApiClient (bearer auth, single 401 retry)
//!          ↓
//! TokenManager (client-credentials flow)
//!          ↓
//! HTTP Layer (reqwest, blocking)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Client
//!
//! [`client`] - Wraps every request:
//! - **Bearer Auth**: Attaches a token obtained from the owned
//!   [`TokenManager`](crate::management::TokenManager)
//! - **Single Retry**: A 401 answer invalidates the token, fetches a new one, and
//!   repeats the request exactly once
//! - **Timeouts**: Every exchange is bounded by 20 seconds
//! - **Strict Status Handling**: Any other non-2xx status is an
//!   [`ApiRequest`](crate::Error::ApiRequest) error carrying status and path
//!
//! ### Artist Endpoints
//!
//! [`artists`] - The catalog operations used by the reports:
//! - `GET /search` - Artist search (`type=artist`, single page)
//! - `GET /artists/{id}` - Artist profile
//! - `GET /artists/{id}/top-tracks` - Top tracks for a market
//!
//! ### Normalization
//!
//! [`normalize`] - Pure functions turning responses into records, with one
//! documented default for every optional field, and the best-match rule used
//! to pick an artist from search results.
//!
//! ## Error Handling Philosophy
//!
//! Nothing is retried except the one authentication recovery. There is no
//! rate-limit back-off; the tool issues only a handful of sequential calls per
//! user action. Errors propagate to the calling command, which reports them and
//! aborts only that action.
//!
//! ## Usage Patterns
//!
//! ```rust
//! let mut client = ApiClient::from_settings(&settings)?;
//! if let Some(artist) = artists::find_best_artist(&mut client, "four tet", 5)? {
//!     let tracks = artists::get_top_tracks(&mut client, &artist.id, "US")?;
//! }
//! ```

pub mod artists;
pub mod client;
pub mod normalize;

pub use client::ApiClient;
