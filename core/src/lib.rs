//! Typed async client for the Star Wars API (`https://swapi.dev/api`).
//!
//! # Overview
//! Builds endpoint URLs, GETs them through a caller-supplied `Transport`,
//! and decodes the JSON into strongly-typed records. Lists are unwrapped from
//! their `{ "results": [...] }` envelope, and several resources can be fetched
//! concurrently with their order preserved.
//!
//! # Design
//! - `SwapiClient` owns only its transport; there is no global session and no
//!   caching. The caller decides the transport's lifetime and timeouts.
//! - Fetch operations are generic over `Resource`, so every entity kind gets
//!   `fetch_one`, `fetch_list`, and `fetch_many`.
//! - Every failure surfaces as `ApiError { reason }`.
//!
//! ```no_run
//! use std::num::NonZeroU32;
//!
//! use swapi_core::{Person, ReqwestTransport, SwapiClient, TransportConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SwapiClient::new(ReqwestTransport::new(TransportConfig::default())?);
//! let indices: Vec<NonZeroU32> = [2, 3].into_iter().filter_map(NonZeroU32::new).collect();
//! let droids: Vec<Person> = client.fetch_many(&indices).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod types;

pub use client::SwapiClient;
pub use endpoint::{build_url, ResourceKind, BASE_URL};
pub use error::{ApiError, DecodeError, TransportError, UnknownKind};
pub use http::{HttpResponse, ReqwestTransport, Transport, TransportConfig};
pub use types::{Film, Page, Person, Planet, Resource, Root, Species, Starship, Vehicle};
