//! Region set reconciliation.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::place::Place;
use crate::region::{Region, RegionConfig};

/// Add/remove set computed by [`GeofenceRegistry::reconcile`].
///
/// The delta only takes effect once the external registrar applied it and
/// the caller called [`GeofenceRegistry::commit`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryDelta {
    /// Regions not yet registered, sorted by id.
    pub to_add: Vec<Region>,
    /// Ids of regions that no longer have a backing place, sorted.
    pub to_remove: Vec<String>,
}

impl RegistryDelta {
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Owns the currently monitored region set.
///
/// `reconcile` is a read-only diff against the committed set; `commit`
/// adopts a delta after the external registrar accepted it. Both lock the
/// same map, so a commit never interleaves with a concurrent reconcile.
pub struct GeofenceRegistry {
    config: RegionConfig,
    current: Mutex<HashMap<String, Region>>,
}

impl Default for GeofenceRegistry {
    fn default() -> Self {
        Self::with_config(RegionConfig::default())
    }
}

impl GeofenceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegionConfig) -> Self {
        Self {
            config,
            current: Mutex::new(HashMap::new()),
        }
    }

    /// Diff the full place list against the committed region set.
    ///
    /// Replace semantics: `places` is the complete desired state, not an
    /// increment. Unchanged ids appear in neither list. Duplicate place ids
    /// collapse to the first occurrence. An empty list yields a
    /// remove-everything delta, which is still a valid delta, never an
    /// error.
    pub fn reconcile(&self, places: &[Place]) -> RegistryDelta {
        let mut desired: HashMap<String, Region> = HashMap::with_capacity(places.len());
        for place in places {
            if desired.contains_key(&place.id) {
                tracing::warn!(id = %place.id, "duplicate place id, keeping first occurrence");
                continue;
            }
            desired.insert(place.id.clone(), Region::from_place(place, &self.config));
        }

        let current = self.current.lock().expect("region set mutex poisoned");

        let mut to_add: Vec<Region> = desired
            .values()
            .filter(|region| !current.contains_key(&region.id))
            .cloned()
            .collect();
        to_add.sort_by(|a, b| a.id.cmp(&b.id));

        let mut to_remove: Vec<String> = current
            .keys()
            .filter(|id| !desired.contains_key(*id))
            .cloned()
            .collect();
        to_remove.sort();

        RegistryDelta { to_add, to_remove }
    }

    /// Adopt a delta after the external registrar applied it.
    ///
    /// Not calling this after a failed registration leaves the committed
    /// set unchanged, so a later `reconcile` with the same places returns
    /// an equal delta and the caller can simply retry.
    pub fn commit(&self, delta: &RegistryDelta) {
        let mut current = self.current.lock().expect("region set mutex poisoned");
        for id in &delta.to_remove {
            current.remove(id);
        }
        for region in &delta.to_add {
            current.insert(region.id.clone(), region.clone());
        }
        tracing::debug!(
            added = delta.to_add.len(),
            removed = delta.to_remove.len(),
            total = current.len(),
            "region set committed"
        );
    }

    /// Ids of the committed regions, sorted.
    pub fn region_ids(&self) -> Vec<String> {
        let current = self.current.lock().expect("region set mutex poisoned");
        let mut ids: Vec<String> = current.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.current.lock().expect("region set mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
