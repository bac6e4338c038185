//! Fetch operations: single resource, collection listing, and concurrent
//! multi-index fetch.
//!
//! # Design
//! Every operation reduces to one primitive: build a URL, GET it through the
//! injected `Transport`, check the status, decode the body. Failures from
//! either step become an `ApiError` on the way out.
//!
//! `fetch_many` launches one `fetch_one` per index and joins them with
//! `try_join_all`. Results come back in the order of `indices`, not arrival
//! order. The first failure resolves the join and drops the remaining
//! futures, which cancels their in-flight requests. Dropping the `fetch_many`
//! future itself cancels everything still outstanding.
//!
//! `fetch_list` reads only the first page of a collection and never follows
//! `next`. When the envelope does not decode it returns an empty list;
//! `fetch_list_strict` reports that case as an error instead.

use std::collections::BTreeMap;
use std::num::NonZeroU32;

use futures_util::future::try_join_all;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::endpoint::{build_url, ResourceKind};
use crate::error::{ApiError, DecodeError, TransportError};
use crate::http::{HttpResponse, Transport};
use crate::types::{Page, Resource, Root};

/// Typed client for the API, generic over its transport.
///
/// Holds nothing but the transport. There is no cache: every call is a fresh
/// round trip.
#[derive(Debug, Clone)]
pub struct SwapiClient<T> {
    transport: T,
}

impl<T: Transport> SwapiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Fetch the root document listing every collection URL.
    pub async fn fetch_root(&self) -> Result<Root, ApiError> {
        self.get_json(&build_url(ResourceKind::Root, None)).await
    }

    /// The root document as a collection-name → URL map.
    ///
    /// Built from the decoded `Root`, so it always carries the same six keys.
    pub async fn fetch_root_map(&self) -> Result<BTreeMap<String, String>, ApiError> {
        Ok(self.fetch_root().await?.to_map())
    }

    /// Fetch the resource at `index` within `R`'s collection.
    pub async fn fetch_one<R>(&self, index: NonZeroU32) -> Result<R, ApiError>
    where
        R: Resource + DeserializeOwned,
    {
        self.get_json(&build_url(R::KIND, Some(index))).await
    }

    /// Fetch the first page of `R`'s collection.
    ///
    /// An envelope that does not decode yields an empty list. Transport
    /// failures still propagate.
    pub async fn fetch_list<R>(&self) -> Result<Vec<R>, ApiError>
    where
        R: Resource + DeserializeOwned,
    {
        let url = build_url(R::KIND, None);
        let body = self.get_bytes(&url).await?;
        match decode::<Page<R>>(&body) {
            Ok(page) => Ok(page.results),
            Err(err) => {
                warn!(%url, error = %err, "Collection envelope did not decode; returning an empty list.");
                Ok(Vec::new())
            }
        }
    }

    /// Like `fetch_list`, but an undecodable envelope is an error.
    pub async fn fetch_list_strict<R>(&self) -> Result<Vec<R>, ApiError>
    where
        R: Resource + DeserializeOwned,
    {
        Ok(self.fetch_page::<R>().await?.results)
    }

    /// Fetch the first page of `R`'s collection with its paging metadata.
    pub async fn fetch_page<R>(&self) -> Result<Page<R>, ApiError>
    where
        R: Resource + DeserializeOwned,
    {
        self.get_json(&build_url(R::KIND, None)).await
    }

    /// Fetch every index concurrently. The output is in the order of
    /// `indices`; any single failure fails the whole call.
    pub async fn fetch_many<R>(&self, indices: &[NonZeroU32]) -> Result<Vec<R>, ApiError>
    where
        R: Resource + DeserializeOwned,
    {
        debug!(kind = %R::KIND, count = indices.len(), "Fetching resources concurrently.");
        try_join_all(indices.iter().map(|&index| self.fetch_one::<R>(index))).await
    }

    /// Resolve a reference string, such as a person's `homeworld`.
    pub async fn fetch_reference<R>(&self, url: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        self.get_json(url).await
    }

    /// Resolve several references concurrently, preserving their order.
    pub async fn fetch_references<R, S>(&self, urls: &[S]) -> Result<Vec<R>, ApiError>
    where
        R: DeserializeOwned,
        S: AsRef<str>,
    {
        try_join_all(urls.iter().map(|url| self.fetch_reference::<R>(url.as_ref()))).await
    }

    async fn get_json<D: DeserializeOwned>(&self, url: &str) -> Result<D, ApiError> {
        let body = self.get_bytes(url).await?;
        decode(&body).map_err(|err| {
            warn!(%url, error = %err, "Response did not decode.");
            ApiError::from(err)
        })
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        debug!(%url, "Sending request.");
        let response = self.transport.get(url).await.map_err(|err| {
            warn!(%url, error = %err, "Request failed.");
            err
        })?;
        debug!(%url, status = response.status, "Received response.");
        check_status(&response).map_err(|err| {
            warn!(%url, error = %err, "Request returned an error status.");
            err
        })?;
        Ok(response.body)
    }
}

fn decode<D: DeserializeOwned>(body: &[u8]) -> Result<D, DecodeError> {
    serde_json::from_slice(body).map_err(DecodeError::from)
}

/// Map non-2xx status codes to `TransportError::Status`.
fn check_status(response: &HttpResponse) -> Result<(), TransportError> {
    if response.is_success() {
        return Ok(());
    }
    Err(TransportError::Status {
        status: response.status,
    })
}
