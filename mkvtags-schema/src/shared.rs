//! Lazily built registry shared across threads.
//!
//! The registry is built on first access under a write lock and handed out as
//! an [`Arc`] snapshot. Changing the profile builds a complete new registry
//! before swapping it in, so readers never observe a partial graph.

use crate::builder::RegistryBuilder;
use crate::catalogue::{MATROSKA_TAGS, TagRow};
use crate::error::Result;
use crate::overrides::{MATROSKA_OVERRIDES, TagOverride};
use crate::profile::Profile;
use crate::registry::TagRegistry;
use parking_lot::RwLock;
use std::sync::{Arc, LazyLock};

static GLOBAL: LazyLock<SharedRegistry> = LazyLock::new(SharedRegistry::default);

/// Returns the process-wide registry handle.
#[must_use]
pub fn global() -> &'static SharedRegistry {
    &GLOBAL
}

struct SharedState {
    profile: Profile,
    rows: &'static [TagRow],
    overrides: &'static [TagOverride],
    registry: Option<Arc<TagRegistry>>,
    builds: u64,
}

impl SharedState {
    fn build(&mut self, profile: Profile) -> Result<Arc<TagRegistry>> {
        let registry = RegistryBuilder::new()
            .profile(profile)
            .rows(self.rows)
            .overrides(self.overrides)
            .build()?;
        self.builds += 1;
        Ok(Arc::new(registry))
    }
}

/// Clonable handle to a lazily built registry.
#[derive(Clone)]
pub struct SharedRegistry {
    inner: Arc<RwLock<SharedState>>,
}

impl SharedRegistry {
    /// Creates an unbuilt handle for the Matroska catalogue.
    #[must_use]
    pub fn new(profile: Profile) -> Self {
        Self::with_tables(profile, MATROSKA_TAGS, MATROSKA_OVERRIDES)
    }

    /// Creates an unbuilt handle for custom tables.
    #[must_use]
    pub fn with_tables(
        profile: Profile,
        rows: &'static [TagRow],
        overrides: &'static [TagOverride],
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SharedState {
                profile,
                rows,
                overrides,
                registry: None,
                builds: 0,
            })),
        }
    }

    /// Returns the registry for the active profile, building it on first
    /// access.
    ///
    /// # Errors
    /// Returns the build error. The handle stays unbuilt and the next call
    /// retries.
    pub fn registry(&self) -> Result<Arc<TagRegistry>> {
        if let Some(registry) = &self.inner.read().registry {
            return Ok(Arc::clone(registry));
        }

        let mut state = self.inner.write();
        if let Some(registry) = &state.registry {
            return Ok(Arc::clone(registry));
        }
        let profile = state.profile;
        let registry = state.build(profile)?;
        state.registry = Some(Arc::clone(&registry));
        Ok(registry)
    }

    /// Returns the active profile.
    #[must_use]
    pub fn profile(&self) -> Profile {
        self.inner.read().profile
    }

    /// Rebuilds the registry for a new profile and swaps it in.
    ///
    /// Snapshots handed out earlier keep the old graph.
    ///
    /// # Errors
    /// Returns the build error; the active profile and registry are left
    /// unchanged.
    pub fn set_profile(&self, profile: Profile) -> Result<Arc<TagRegistry>> {
        let mut state = self.inner.write();
        let registry = state.build(profile)?;
        state.profile = profile;
        state.registry = Some(Arc::clone(&registry));
        tracing::debug!(%profile, "switched tag registry profile");
        Ok(registry)
    }

    /// Parses a document type and version, then behaves like
    /// [`set_profile`](Self::set_profile).
    ///
    /// # Errors
    /// Returns `RegistryError::Profile` for an invalid document type or
    /// version, or the build error.
    pub fn set_doc_type_and_version(&self, doc_type: &str, version: u8) -> Result<Arc<TagRegistry>> {
        self.set_profile(Profile::parse(doc_type, version)?)
    }

    /// Drops the built registry so the next access rebuilds it.
    pub fn reset(&self) {
        self.inner.write().registry = None;
    }

    /// Returns true if a registry is currently built.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.inner.read().registry.is_some()
    }

    /// Returns how many registries this handle has built.
    #[must_use]
    pub fn builds(&self) -> u64 {
        self.inner.read().builds
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}

impl std::fmt::Debug for SharedRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.read();
        f.debug_struct("SharedRegistry")
            .field("profile", &state.profile)
            .field("built", &state.registry.is_some())
            .field("builds", &state.builds)
            .finish()
    }
}
