//! Walk every fixture document through the fetch operations.
//!
//! Each fixture file maps a resource index to the document the API serves at
//! that index. A stub transport answers with those documents, and every record
//! decoded through `SwapiClient` must equal the document decoded directly.

use std::collections::{BTreeMap, HashMap};
use std::num::NonZeroU32;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use swapi_core::{
    build_url, Film, HttpResponse, Person, Planet, Resource, Species, Starship, SwapiClient,
    Transport, TransportError, Vehicle,
};

#[derive(Default)]
struct FixtureTransport {
    bodies: HashMap<String, String>,
}

#[async_trait]
impl Transport for FixtureTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        match self.bodies.get(url) {
            Some(body) => Ok(HttpResponse::ok(body.as_bytes())),
            None => Ok(HttpResponse {
                status: 404,
                body: Vec::new(),
            }),
        }
    }
}

/// Serve `raw` under `R`'s collection, fetch it back, and compare.
async fn check_collection<R>(raw: &str)
where
    R: Resource + DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let documents: BTreeMap<u32, serde_json::Value> = serde_json::from_str(raw).unwrap();
    let expected: BTreeMap<u32, R> = serde_json::from_str(raw).unwrap();
    let index_of = |raw: u32| NonZeroU32::new(raw).unwrap();

    let mut transport = FixtureTransport::default();
    for (index, document) in &documents {
        transport
            .bodies
            .insert(
                build_url(R::KIND, Some(index_of(*index))),
                document.to_string(),
            );
    }
    let listing = serde_json::json!({
        "count": documents.len(),
        "next": null,
        "previous": null,
        "results": documents.values().collect::<Vec<_>>(),
    });
    transport
        .bodies
        .insert(build_url(R::KIND, None), listing.to_string());
    let client = SwapiClient::new(transport);

    for (index, record) in &expected {
        let fetched: R = client.fetch_one(index_of(*index)).await.unwrap();
        assert_eq!(&fetched, record, "{}/{index}", R::KIND);
        assert_eq!(
            fetched.id(),
            documents[index]
                .get("name")
                .or_else(|| documents[index].get("title"))
                .and_then(|v| v.as_str())
                .unwrap()
        );
    }

    let indices: Vec<u32> = expected.keys().rev().copied().collect();
    let nonzero: Vec<NonZeroU32> = indices.iter().copied().map(index_of).collect();
    let many: Vec<R> = client.fetch_many(&nonzero).await.unwrap();
    let in_order: Vec<&R> = indices.iter().map(|i| &expected[i]).collect();
    assert_eq!(many.iter().collect::<Vec<_>>(), in_order, "{}", R::KIND);

    let listed: Vec<R> = client.fetch_list().await.unwrap();
    assert_eq!(listed.len(), expected.len(), "{}", R::KIND);
}

#[tokio::test]
async fn people_fixtures() {
    check_collection::<Person>(include_str!("../../fixtures/people.json")).await;
}

#[tokio::test]
async fn film_fixtures() {
    check_collection::<Film>(include_str!("../../fixtures/films.json")).await;
}

#[tokio::test]
async fn starship_fixtures() {
    check_collection::<Starship>(include_str!("../../fixtures/starships.json")).await;
}

#[tokio::test]
async fn vehicle_fixtures() {
    check_collection::<Vehicle>(include_str!("../../fixtures/vehicles.json")).await;
}

#[tokio::test]
async fn species_fixtures() {
    check_collection::<Species>(include_str!("../../fixtures/species.json")).await;
}

#[tokio::test]
async fn planet_fixtures() {
    check_collection::<Planet>(include_str!("../../fixtures/planets.json")).await;
}
