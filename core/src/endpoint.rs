//! URL construction for every resource the API exposes.
//!
//! # Design
//! Scheme, host, and root path are fixed. A URL is the base followed by
//! `/<kind>` and, for a single resource, `/<index>`. Building a URL never
//! performs I/O.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::error::UnknownKind;

/// Scheme, host, and root path shared by every endpoint.
pub const BASE_URL: &str = "https://swapi.dev/api";

/// The resource collections, plus the root document that lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Root,
    People,
    Films,
    Starships,
    Vehicles,
    Species,
    Planets,
}

impl ResourceKind {
    /// The six collections, in the order the root document lists them.
    pub const COLLECTIONS: [ResourceKind; 6] = [
        ResourceKind::Films,
        ResourceKind::People,
        ResourceKind::Planets,
        ResourceKind::Species,
        ResourceKind::Starships,
        ResourceKind::Vehicles,
    ];

    /// Path segment for this kind. Empty for the root document.
    pub const fn segment(self) -> &'static str {
        match self {
            ResourceKind::Root => "",
            ResourceKind::People => "people",
            ResourceKind::Films => "films",
            ResourceKind::Starships => "starships",
            ResourceKind::Vehicles => "vehicles",
            ResourceKind::Species => "species",
            ResourceKind::Planets => "planets",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Root => write!(f, "root"),
            other => write!(f, "{}", other.segment()),
        }
    }
}

impl FromStr for ResourceKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "root" | "" => Ok(ResourceKind::Root),
            "people" => Ok(ResourceKind::People),
            "films" => Ok(ResourceKind::Films),
            "starships" => Ok(ResourceKind::Starships),
            "vehicles" => Ok(ResourceKind::Vehicles),
            "species" => Ok(ResourceKind::Species),
            "planets" => Ok(ResourceKind::Planets),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// Build the URL for a collection listing (`index == None`) or a single
/// resource within it.
///
/// Indices start at 1, which `NonZeroU32` enforces at the call site.
///
/// # Panics
/// If an index is given for `ResourceKind::Root`, which is a caller bug.
pub fn build_url(kind: ResourceKind, index: Option<NonZeroU32>) -> String {
    match index {
        None => format!("{BASE_URL}/{}", kind.segment()),
        Some(index) => {
            assert!(
                kind != ResourceKind::Root,
                "the root document has no indexed resources"
            );
            format!("{BASE_URL}/{}/{index}", kind.segment())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(raw: u32) -> Option<NonZeroU32> {
        NonZeroU32::new(raw)
    }

    #[test]
    fn collection_url() {
        assert_eq!(
            build_url(ResourceKind::People, None),
            "https://swapi.dev/api/people"
        );
        assert_eq!(
            build_url(ResourceKind::Starships, None),
            "https://swapi.dev/api/starships"
        );
    }

    #[test]
    fn single_resource_url() {
        assert_eq!(
            build_url(ResourceKind::Films, index(1)),
            "https://swapi.dev/api/films/1"
        );
        assert_eq!(
            build_url(ResourceKind::Vehicles, index(42)),
            "https://swapi.dev/api/vehicles/42"
        );
    }

    #[test]
    fn root_url() {
        assert_eq!(build_url(ResourceKind::Root, None), "https://swapi.dev/api/");
    }

    #[test]
    fn every_collection_url_has_base_and_segment() {
        for kind in ResourceKind::COLLECTIONS {
            let url = build_url(kind, index(7));
            assert!(url.starts_with("https://swapi.dev/api/"));
            assert!(url.ends_with(&format!("/{}/7", kind.segment())));
            assert_eq!(url, build_url(kind, index(7)));
        }
    }

    #[test]
    fn zero_index_addresses_the_collection() {
        // Zero has no `NonZeroU32` form, so it can only reach the builder as `None`.
        assert_eq!(index(0), None);
        assert_eq!(
            build_url(ResourceKind::People, index(0)),
            build_url(ResourceKind::People, None)
        );
    }

    #[test]
    #[should_panic(expected = "no indexed resources")]
    fn indexed_root_panics() {
        build_url(ResourceKind::Root, index(1));
    }

    #[test]
    fn kind_parses_from_segment() {
        for kind in ResourceKind::COLLECTIONS {
            assert_eq!(kind.segment().parse::<ResourceKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.segment());
        }
        assert_eq!("root".parse::<ResourceKind>().unwrap(), ResourceKind::Root);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "droids".parse::<ResourceKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown resource kind: droids");
    }
}
