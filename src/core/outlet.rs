use crate::core::geo::LatLng;
use crate::prelude::HashMap;
use serde::{Deserialize, Serialize};

/// A point-of-interest record with position and service radius.
///
/// `waze_url` keeps the wire field name of the retrieval endpoint; it is a
/// display-only external navigation link, never dereferenced by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outlet {
    pub id: u64,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    /// Service-area radius in meters
    pub radius: f64,
    #[serde(default)]
    pub waze_url: String,
}

impl Outlet {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// Source of truth for outlet records.
///
/// A stable ordered arena, replaced wholesale on each successful fetch.
/// All "find outlet by id" and "find outlet by name fragment" lookups resolve
/// against it; nothing downstream holds live references into rendered objects.
#[derive(Debug, Default)]
pub struct OutletStore {
    outlets: Vec<Outlet>,
    by_id: HashMap<u64, usize>,
}

impl OutletStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_outlets(outlets: Vec<Outlet>) -> Self {
        let mut store = Self::new();
        store.replace_all(outlets);
        store
    }

    /// Replaces the entire outlet set. There are no partial updates; a fetch
    /// either swaps in a whole new set or leaves the store untouched.
    pub fn replace_all(&mut self, outlets: Vec<Outlet>) {
        self.by_id = outlets
            .iter()
            .enumerate()
            .map(|(index, outlet)| (outlet.id, index))
            .collect();
        self.outlets = outlets;
    }

    pub fn get(&self, id: u64) -> Option<&Outlet> {
        self.by_id.get(&id).map(|&index| &self.outlets[index])
    }

    /// First outlet (in arena order) whose name contains the fragment,
    /// case-sensitive. Free-text requests from the assistant resolve here.
    pub fn find_by_name_fragment(&self, fragment: &str) -> Option<&Outlet> {
        self.outlets.iter().find(|o| o.name.contains(fragment))
    }

    pub fn outlets(&self) -> &[Outlet] {
        &self.outlets
    }

    pub fn iter(&self) -> impl Iterator<Item = &Outlet> {
        self.outlets.iter()
    }

    pub fn len(&self) -> usize {
        self.outlets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outlets.is_empty()
    }
}
