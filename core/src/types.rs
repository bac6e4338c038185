//! Entity records returned by the API.
//!
//! # Design
//! Field names match the JSON the API emits, so serde needs no renames except
//! for `MGLT` on `Starship`. Measurements such as `height` or `cost_in_credits`
//! stay `String` because the upstream data mixes numbers with sentinels like
//! `"unknown"` and `"n/a"`. Cross-references are opaque URL strings; resolving
//! one is a separate fetch (see `SwapiClient::fetch_reference`).
//!
//! Records are plain values: decoded once, owned by the caller, never mutated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::endpoint::ResourceKind;

/// An entity that lives in one of the API's collections.
///
/// The API carries no numeric id in its payloads, so each record's natural key
/// (a film's title, everything else's name) serves as its identity.
pub trait Resource {
    /// The collection this entity is fetched from.
    const KIND: ResourceKind;

    /// The natural key of this record.
    fn id(&self) -> &str;
}

/// The root document: one collection URL per resource kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Root {
    pub films: String,
    pub people: String,
    pub planets: String,
    pub species: String,
    pub starships: String,
    pub vehicles: String,
}

impl Root {
    /// Collection URL for `kind`, or `None` for `ResourceKind::Root`.
    pub fn url_for(&self, kind: ResourceKind) -> Option<&str> {
        let url = match kind {
            ResourceKind::Root => return None,
            ResourceKind::Films => &self.films,
            ResourceKind::People => &self.people,
            ResourceKind::Planets => &self.planets,
            ResourceKind::Species => &self.species,
            ResourceKind::Starships => &self.starships,
            ResourceKind::Vehicles => &self.vehicles,
        };
        Some(url)
    }

    /// The same six URLs keyed by collection name.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        ResourceKind::COLLECTIONS
            .iter()
            .filter_map(|kind| {
                self.url_for(*kind)
                    .map(|url| (kind.segment().to_string(), url.to_string()))
            })
            .collect()
    }
}

/// The envelope every collection listing is wrapped in.
///
/// Only `results` is required; the paging fields are kept so callers can see
/// whether more pages exist, but no fetch operation follows `next`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// A single film.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    pub episode_id: i64,
    pub opening_crawl: String,
    pub director: String,
    /// Comma separated when there is more than one.
    pub producer: String,
    /// ISO 8601 date of the original release.
    pub release_date: String,
    pub species: Vec<String>,
    pub starships: Vec<String>,
    pub vehicles: Vec<String>,
    /// People who appear in this film.
    pub characters: Vec<String>,
    pub planets: Vec<String>,
    pub url: String,
    pub created: String,
    pub edited: String,
}

impl Resource for Film {
    const KIND: ResourceKind = ResourceKind::Films;

    fn id(&self) -> &str {
        &self.title
    }
}

/// An individual person or character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    /// In-universe year, e.g. `"19BBY"`.
    pub birth_year: String,
    pub eye_color: String,
    pub gender: String,
    pub hair_color: String,
    #[serde(default)]
    pub skin_color: String,
    /// Centimeters, or `"unknown"`.
    pub height: String,
    /// Kilograms, or `"unknown"`.
    pub mass: String,
    /// Planet URL.
    pub homeworld: String,
    pub films: Vec<String>,
    pub species: Vec<String>,
    pub starships: Vec<String>,
    pub vehicles: Vec<String>,
    pub url: String,
    pub created: String,
    pub edited: String,
}

impl Resource for Person {
    const KIND: ResourceKind = ResourceKind::People;

    fn id(&self) -> &str {
        &self.name
    }
}

/// A transport craft with hyperdrive capability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Starship {
    pub name: String,
    pub model: String,
    pub starship_class: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
    pub length: String,
    pub crew: String,
    pub passengers: String,
    /// `"n/a"` for craft incapable of atmospheric flight.
    pub max_atmosphering_speed: String,
    pub hyperdrive_rating: String,
    /// Megalights per standard hour.
    #[serde(rename = "MGLT")]
    pub mglt: String,
    pub cargo_capacity: String,
    pub consumables: String,
    pub films: Vec<String>,
    pub pilots: Vec<String>,
    pub url: String,
    pub created: String,
    pub edited: String,
}

impl Resource for Starship {
    const KIND: ResourceKind = ResourceKind::Starships;

    fn id(&self) -> &str {
        &self.name
    }
}

/// A transport craft without hyperdrive capability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vehicle {
    pub name: String,
    pub model: String,
    pub vehicle_class: String,
    pub manufacturer: String,
    pub length: String,
    pub cost_in_credits: String,
    pub crew: String,
    pub passengers: String,
    pub max_atmosphering_speed: String,
    pub cargo_capacity: String,
    pub consumables: String,
    pub films: Vec<String>,
    pub pilots: Vec<String>,
    pub url: String,
    pub created: String,
    pub edited: String,
}

impl Resource for Vehicle {
    const KIND: ResourceKind = ResourceKind::Vehicles;

    fn id(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Species {
    pub name: String,
    pub classification: String,
    pub designation: String,
    pub average_height: String,
    pub average_lifespan: String,
    pub eye_colors: String,
    pub hair_colors: String,
    pub skin_colors: String,
    pub language: String,
    /// Planet URL; `None` when the species has no recorded homeworld.
    #[serde(default)]
    pub homeworld: Option<String>,
    pub people: Vec<String>,
    pub films: Vec<String>,
    pub url: String,
    pub created: String,
    pub edited: String,
}

impl Resource for Species {
    const KIND: ResourceKind = ResourceKind::Species;

    fn id(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    pub diameter: String,
    pub rotation_period: String,
    pub orbital_period: String,
    /// `"1 standard"` is one standard G.
    pub gravity: String,
    pub population: String,
    pub climate: String,
    pub terrain: String,
    pub surface_water: String,
    pub residents: Vec<String>,
    pub films: Vec<String>,
    pub url: String,
    pub created: String,
    pub edited: String,
}

impl Resource for Planet {
    const KIND: ResourceKind = ResourceKind::Planets;

    fn id(&self) -> &str {
        &self.name
    }
}
