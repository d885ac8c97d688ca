//! Dual-keyed element registry.
//!
//! Descriptors are stored once in an arena and reachable through two
//! independent keys: the numeric element id and the element name. Parent and
//! child links are arena indices, so a registry is a plain value that can be
//! dropped and rebuilt wholesale when the document profile changes.

use crate::catalogue::{RowParent, TagRow};
use crate::descriptor::{DefaultValue, Parent, TagAttributes, TagDescriptor, TagIndex};
use crate::error::{RegistryError, Result};
use crate::overrides::TagOverride;
use crate::profile::Profile;
use mkvtags_core::{CodecNamespace, Value};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// Lookup key of a registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKey<'a> {
    /// Numeric element id.
    Id(u64),
    /// Element name.
    Name(&'a str),
}

impl From<u64> for TagKey<'_> {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl<'a> From<&'a str> for TagKey<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl fmt::Display for TagKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id 0x{id:X}"),
            Self::Name(name) => write!(f, "name '{name}'"),
        }
    }
}

/// Element descriptors of one document profile.
#[derive(Debug, Clone)]
pub struct TagRegistry {
    profile: Profile,
    arena: Vec<TagDescriptor>,
    by_id: HashMap<u64, TagIndex>,
    by_name: HashMap<String, TagIndex>,
}

impl TagRegistry {
    /// Creates an empty registry for the given profile.
    #[must_use]
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            arena: Vec::new(),
            by_id: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Returns the profile the registry was built for.
    #[must_use]
    pub const fn profile(&self) -> Profile {
        self.profile
    }

    /// Stores a descriptor under its id and its name.
    ///
    /// A concrete parent gets the new descriptor appended to its child list.
    ///
    /// # Errors
    /// Returns `RegistryError::DanglingParent` if the parent index is not
    /// part of this registry or holds a descriptor with another id.
    pub fn insert(&mut self, mut tag: TagDescriptor) -> Result<TagIndex> {
        let index = TagIndex::new(self.arena.len());
        if let Parent::Tag { index: parent, id } = tag.parent() {
            match self.arena.get_mut(parent.get()) {
                Some(container) if container.id == id => container.push_child(index),
                _ => {
                    return Err(RegistryError::DanglingParent {
                        name: tag.name.clone(),
                        index: parent,
                    });
                }
            }
        }

        tag.attach(index);
        self.by_id.insert(tag.id, index);
        self.by_name.insert(tag.name.clone(), index);
        self.arena.push(tag);
        Ok(index)
    }

    /// Constructs a descriptor from a static row and inserts it.
    ///
    /// # Errors
    /// Returns `RegistryError::UnknownParent` if the row's parent is not
    /// registered yet, or `RegistryError::UnknownCodec` if the codec class
    /// does not resolve.
    pub fn define(&mut self, row: &TagRow, codecs: impl CodecNamespace) -> Result<TagIndex> {
        let parent = match row.parent {
            RowParent::TopLevel => Parent::TopLevel,
            RowParent::Global => Parent::Global,
            RowParent::Named(name) => self
                .by_name
                .get(name)
                .and_then(|&index| {
                    self.tag(index)
                        .map(|container| Parent::Tag { index, id: container.id })
                })
                .ok_or_else(|| RegistryError::unknown_parent(row.name, name))?,
        };
        let codec = codecs
            .resolve(row.codec)
            .ok_or_else(|| RegistryError::unknown_codec(row.name, row.codec))?;

        let tag = TagDescriptor::new(row.id, row.name, codec, parent)
            .mandatory(row.mandatory)
            .repeatable(row.multiple)
            .availability(row.webm, row.min_version, row.max_version)
            .attributes(TagAttributes {
                bounds: row.bounds,
                default: row
                    .default
                    .map(|default| DefaultValue::Literal(default.to_value())),
                recursive: row.recursive,
                ..TagAttributes::default()
            });
        self.insert(tag)
    }

    /// Removes the descriptor registered under `id` from both key maps and
    /// returns a copy of it.
    ///
    /// The arena slot is kept so indices stay stable. The descriptor no
    /// longer shows up in lookups or child views.
    ///
    /// # Errors
    /// Returns `RegistryError::NotFound` if no descriptor has this id.
    pub fn remove(&mut self, id: u64) -> Result<TagDescriptor> {
        let not_found = || RegistryError::not_found(TagKey::Id(id));
        let index = self.by_id.remove(&id).ok_or_else(not_found)?;
        let tag = self.arena.get(index.get()).ok_or_else(not_found)?;
        if self.by_name.get(&tag.name) == Some(&index) {
            self.by_name.remove(&tag.name);
        }
        Ok(tag.clone())
    }

    /// Applies one override to the descriptor it names.
    ///
    /// Returns false if no descriptor has that name. A `default_from`
    /// sibling that is not registered is skipped.
    pub fn apply_override(&mut self, entry: &TagOverride) -> bool {
        let Some(&index) = self.by_name.get(entry.name) else {
            return false;
        };
        let sibling = entry
            .default_from
            .and_then(|sibling| match self.by_name.get(sibling) {
                Some(&sibling) => Some(sibling),
                None => {
                    tracing::warn!(
                        tag = entry.name,
                        sibling,
                        "default sibling not registered, keeping own default"
                    );
                    None
                }
            });
        let Some(tag) = self.arena.get_mut(index.get()) else {
            return false;
        };

        if let Some(codec) = entry.codec {
            tag.codec = codec;
        }
        if let Some(size) = entry.header_size_min {
            tag.header_size_min = size;
        }
        if let Some(size) = entry.data_size_min {
            tag.data_size_min = size;
        }
        if let Some(values) = entry.values {
            tag.values = Some(values.to_table());
        }
        if let Some(sibling) = sibling {
            tag.set_default(Some(DefaultValue::Sibling(sibling)));
        }
        tracing::trace!(tag = entry.name, codec = %tag.codec, "applied override");
        true
    }

    /// Applies every override whose name is registered, returning how many
    /// were applied.
    pub fn apply_overrides(&mut self, overrides: &[TagOverride]) -> usize {
        overrides
            .iter()
            .filter(|entry| self.apply_override(entry))
            .count()
    }

    /// Returns the descriptor in an arena slot.
    #[must_use]
    pub fn tag(&self, index: TagIndex) -> Option<&TagDescriptor> {
        self.arena.get(index.get())
    }

    /// Looks up a descriptor by id.
    ///
    /// Unknown ids never fail: a fresh "Unknown" descriptor bound to the
    /// unsupported codec is synthesized for each call and not stored.
    #[must_use]
    pub fn lookup_id(&self, id: u64) -> Cow<'_, TagDescriptor> {
        match self.get(TagKey::Id(id)) {
            Some(tag) => Cow::Borrowed(tag),
            None => {
                tracing::trace!(id, "synthesizing descriptor for unknown id");
                Cow::Owned(TagDescriptor::unknown(id))
            }
        }
    }

    /// Looks up a descriptor by name.
    ///
    /// # Errors
    /// Returns `RegistryError::NotFound` if no descriptor has this name.
    pub fn lookup_name(&self, name: &str) -> Result<&TagDescriptor> {
        self.get(TagKey::Name(name))
            .ok_or_else(|| RegistryError::not_found(TagKey::Name(name)))
    }

    /// Looks up a descriptor by either key, with the fallbacks of
    /// [`lookup_id`](Self::lookup_id) and [`lookup_name`](Self::lookup_name).
    ///
    /// # Errors
    /// Returns `RegistryError::NotFound` for unknown names.
    pub fn lookup<'k>(&self, key: impl Into<TagKey<'k>>) -> Result<Cow<'_, TagDescriptor>> {
        match key.into() {
            TagKey::Id(id) => Ok(self.lookup_id(id)),
            TagKey::Name(name) => self.lookup_name(name).map(Cow::Borrowed),
        }
    }

    /// Returns the descriptor registered under a key.
    #[must_use]
    pub fn get<'k>(&self, key: impl Into<TagKey<'k>>) -> Option<&TagDescriptor> {
        let index = match key.into() {
            TagKey::Id(id) => self.by_id.get(&id),
            TagKey::Name(name) => self.by_name.get(name),
        };
        index.and_then(|index| self.tag(*index))
    }

    /// Returns true if a descriptor is registered under the key.
    #[must_use]
    pub fn contains<'k>(&self, key: impl Into<TagKey<'k>>) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of keys (ids plus names).
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len() + self.by_name.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty() && self.by_name.is_empty()
    }

    /// Returns the number of distinct registered descriptors.
    #[must_use]
    pub fn descriptor_count(&self) -> usize {
        self.descriptors().count()
    }

    fn keyed_by_id(&self, tag: &TagDescriptor) -> bool {
        tag.index().is_some() && self.by_id.get(&tag.id).copied() == tag.index()
    }

    fn keyed_by_name(&self, tag: &TagDescriptor) -> bool {
        tag.index().is_some() && self.by_name.get(tag.name.as_str()).copied() == tag.index()
    }

    fn is_live(&self, tag: &TagDescriptor) -> bool {
        self.keyed_by_id(tag) || self.keyed_by_name(tag)
    }

    /// Iterates over all keys in load order.
    pub fn keys(&self) -> impl Iterator<Item = TagKey<'_>> {
        self.items().map(|(key, _)| key)
    }

    /// Iterates over key and descriptor pairs in load order.
    ///
    /// Every descriptor appears once per key it is reachable through.
    pub fn items(&self) -> impl Iterator<Item = (TagKey<'_>, &TagDescriptor)> {
        self.arena.iter().flat_map(move |tag| {
            let id = self.keyed_by_id(tag).then_some((TagKey::Id(tag.id), tag));
            let name = self
                .keyed_by_name(tag)
                .then_some((TagKey::Name(tag.name.as_str()), tag));
            id.into_iter().chain(name)
        })
    }

    /// Iterates over the descriptor of every key in load order.
    pub fn values(&self) -> impl Iterator<Item = &TagDescriptor> {
        self.items().map(|(_, tag)| tag)
    }

    /// Iterates over distinct registered descriptors in load order.
    pub fn descriptors(&self) -> impl Iterator<Item = &TagDescriptor> {
        self.arena.iter().filter(|tag| self.is_live(tag))
    }

    /// Iterates over level-zero descriptors reachable through their id.
    pub fn top_level(&self) -> impl Iterator<Item = &TagDescriptor> {
        self.items().filter_map(|(key, tag)| {
            (matches!(key, TagKey::Id(_)) && tag.parent() == Parent::TopLevel).then_some(tag)
        })
    }

    /// Returns the concrete parent of a descriptor.
    #[must_use]
    pub fn parent_of(&self, tag: &TagDescriptor) -> Option<&TagDescriptor> {
        tag.parent().index().and_then(|index| self.tag(index))
    }

    fn live_children<'a>(&'a self, tag: &'a TagDescriptor) -> &'a [TagIndex] {
        tag.index()
            .and_then(|index| self.tag(index))
            .filter(|stored| stored.id == tag.id)
            .unwrap_or(tag)
            .children()
    }

    /// Iterates over the registered children of a descriptor in load order.
    pub fn children<'a>(&'a self, tag: &'a TagDescriptor) -> impl Iterator<Item = &'a TagDescriptor> {
        self.live_children(tag)
            .iter()
            .filter_map(|index| self.tag(*index))
            .filter(|child| self.is_live(child))
    }

    /// Iterates over the children that must appear in the descriptor.
    ///
    /// Recomputed from the child list on every call.
    pub fn required_children<'a>(
        &'a self,
        tag: &'a TagDescriptor,
    ) -> impl Iterator<Item = &'a TagDescriptor> {
        self.children(tag).filter(|child| child.required())
    }

    /// Iterates over the children that may appear at most once.
    ///
    /// Recomputed from the child list on every call.
    pub fn unique_children<'a>(
        &'a self,
        tag: &'a TagDescriptor,
    ) -> impl Iterator<Item = &'a TagDescriptor> {
        self.children(tag).filter(|child| !child.repeatable)
    }

    /// Resolves a descriptor's default to a literal, following sibling
    /// references.
    ///
    /// Returns `None` if there is no default, a sibling has no default, or
    /// the references form a cycle.
    #[must_use]
    pub fn resolve_default<'a>(&'a self, tag: &'a TagDescriptor) -> Option<&'a Value> {
        let mut current = tag;
        for _ in 0..=self.arena.len() {
            match current.default_value()? {
                DefaultValue::Literal(value) => return Some(value),
                DefaultValue::Sibling(index) => current = self.tag(*index)?,
            }
        }
        None
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}
