//! Geometry registry for O(1) region lookups

use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use scrollproxy_core::Rect;

use crate::id::CoordinateSpace;

/// Registry mapping region IDs to their last measured frame
///
/// All frames are expressed in one [`CoordinateSpace`], the private space of
/// the proxy that owns the registry. Entries are only ever added by the
/// geometry reporter and only removed explicitly; there is no expiry.
#[derive(Debug, Clone)]
pub struct GeometryRegistry<Id> {
    space: CoordinateSpace,
    frames: FxHashMap<Id, Rect>,
}

impl<Id: Eq + Hash> GeometryRegistry<Id> {
    /// Create an empty registry keyed to `space`
    pub fn new(space: CoordinateSpace) -> Self {
        Self {
            space,
            frames: FxHashMap::default(),
        }
    }

    /// The coordinate space every stored frame is measured in
    pub fn space(&self) -> CoordinateSpace {
        self.space
    }

    /// Record the frame for `id`, replacing any previous one
    ///
    /// Returns `false` when the stored frame already equals `rect`, in which
    /// case nothing is written. Negative extents are standardized first.
    pub fn update(&mut self, id: Id, rect: Rect) -> bool {
        let rect = rect.standardized();
        match self.frames.entry(id) {
            Entry::Occupied(mut entry) => {
                if *entry.get() == rect {
                    return false;
                }
                entry.insert(rect);
                true
            }
            Entry::Vacant(entry) => {
                entry.insert(rect);
                true
            }
        }
    }

    /// Look up the last reported frame for `id`
    pub fn lookup<Q>(&self, id: &Q) -> Option<Rect>
    where
        Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.frames.get(id).copied()
    }

    /// Forget the frame for `id` (e.g., when its view is removed)
    pub fn remove<Q>(&mut self, id: &Q) -> Option<Rect>
    where
        Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.frames.remove(id)
    }

    /// Check if a frame is registered for `id`
    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        Id: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.frames.contains_key(id)
    }

    /// Get the number of registered regions
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Remove every registered frame
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Iterate over registered region IDs (unordered)
    pub fn ids(&self) -> impl Iterator<Item = &Id> {
        self.frames.keys()
    }
}
