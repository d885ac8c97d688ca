//! Lookup workloads.

use mkvtags_schema::TagRegistry;

/// First id handed out for ids that are not in the registry.
pub const UNKNOWN_ID_BASE: u64 = 0x7F00;

/// Mix of registered and unregistered ids, as a demuxer sees them.
#[derive(Debug, Clone)]
pub struct IdWorkload {
    ids: Vec<u64>,
    unknown: usize,
}

impl IdWorkload {
    /// Builds a workload from every registered id, replacing every
    /// `unknown_every`-th id with one the registry does not know.
    ///
    /// An `unknown_every` of zero keeps only registered ids.
    #[must_use]
    pub fn new(registry: &TagRegistry, unknown_every: usize) -> Self {
        let mut ids = Vec::new();
        let mut unknown = 0;
        let mut next_unknown = UNKNOWN_ID_BASE;

        for (position, tag) in registry.descriptors().enumerate() {
            if unknown_every != 0 && position % unknown_every == unknown_every - 1 {
                while registry.contains(next_unknown) {
                    next_unknown += 1;
                }
                ids.push(next_unknown);
                next_unknown += 1;
                unknown += 1;
            } else {
                ids.push(tag.id);
            }
        }
        Self { ids, unknown }
    }

    /// Returns the ids in lookup order.
    #[must_use]
    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    /// Returns how many ids are unregistered.
    #[must_use]
    pub fn unknown(&self) -> usize {
        self.unknown
    }

    /// Returns the names of all registered descriptors.
    #[must_use]
    pub fn names(registry: &TagRegistry) -> Vec<String> {
        registry.descriptors().map(|tag| tag.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mkvtags_schema::{Profile, build_registry};

    #[test]
    fn test_workload_without_unknown_ids() {
        let registry = build_registry(Profile::default()).unwrap();
        let workload = IdWorkload::new(&registry, 0);
        assert_eq!(workload.unknown(), 0);
        assert_eq!(workload.ids().len(), registry.descriptor_count());
        assert!(workload.ids().iter().all(|id| registry.contains(*id)));
    }

    #[test]
    fn test_workload_mixes_unknown_ids() {
        let registry = build_registry(Profile::default()).unwrap();
        let workload = IdWorkload::new(&registry, 4);
        let missing = workload
            .ids()
            .iter()
            .filter(|id| !registry.contains(**id))
            .count();
        assert_eq!(missing, workload.unknown());
        assert_eq!(workload.unknown(), registry.descriptor_count() / 4);
    }
}
