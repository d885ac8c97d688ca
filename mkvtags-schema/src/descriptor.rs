//! Element descriptors.
//!
//! A [`TagDescriptor`] captures the schema of one element type: id, name,
//! codec binding, containment rules and value semantics. Descriptors live in
//! the arena of a [`TagRegistry`](crate::registry::TagRegistry) and refer to
//! each other through [`TagIndex`] values.

use crate::profile::{MAX_VERSION, MIN_VERSION, Profile};
use mkvtags_core::{CodecKind, Element, ElementHeader, Number, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Name given to descriptors synthesized for unknown ids.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Position of a descriptor in a registry arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagIndex(usize);

impl TagIndex {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena slot.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for TagIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a descriptor may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parent {
    /// Level zero: directly in the stream.
    TopLevel,
    /// Anywhere, under any container or at level zero.
    Global,
    /// Under one concrete, already registered container.
    Tag {
        /// Arena slot of the container in its registry.
        index: TagIndex,
        /// Element id of the container.
        id: u64,
    },
}

impl Parent {
    /// Returns the container index for a concrete parent.
    #[must_use]
    pub const fn index(&self) -> Option<TagIndex> {
        match self {
            Self::Tag { index, .. } => Some(*index),
            Self::TopLevel | Self::Global => None,
        }
    }

    /// Returns the container id for a concrete parent.
    #[must_use]
    pub const fn id(&self) -> Option<u64> {
        match self {
            Self::Tag { id, .. } => Some(*id),
            Self::TopLevel | Self::Global => None,
        }
    }
}

/// Default value of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// Literal value.
    Literal(Value),
    /// Inherited from the resolved value of a sibling descriptor.
    Sibling(TagIndex),
}

/// Numeric bounds of an element value.
///
/// Integer bounds are inclusive. Floating point bounds are strict.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumericBounds {
    /// Lower bound.
    pub min: Option<Number>,
    /// Upper bound.
    pub max: Option<Number>,
}

impl NumericBounds {
    /// Bounds that admit every value.
    pub const UNBOUNDED: NumericBounds = NumericBounds {
        min: None,
        max: None,
    };

    /// Creates bounds from optional limits.
    #[must_use]
    pub const fn new(min: Option<Number>, max: Option<Number>) -> Self {
        Self { min, max }
    }

    /// Returns true if neither limit is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Checks a value against the bounds.
    ///
    /// # Arguments
    /// * `value` - Value to check
    /// * `strict` - Exclude the limits themselves (floating point elements)
    #[must_use]
    pub fn admits(&self, value: Number, strict: bool) -> bool {
        let above = self.min.is_none_or(|min| match value.compare(&min) {
            Some(std::cmp::Ordering::Greater) => true,
            Some(std::cmp::Ordering::Equal) => !strict,
            _ => false,
        });
        let below = self.max.is_none_or(|max| match value.compare(&max) {
            Some(std::cmp::Ordering::Less) => true,
            Some(std::cmp::Ordering::Equal) => !strict,
            _ => false,
        });
        above && below
    }
}

/// Labels attached to enumeration and bitfield elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueTable {
    /// Integer value to label.
    Enum(BTreeMap<u64, String>),
    /// Label of bit `i` at position `i`.
    BitField(Vec<String>),
}

impl ValueTable {
    /// Builds an enumeration table from pairs.
    #[must_use]
    pub fn enumeration<'a>(pairs: impl IntoIterator<Item = (u64, &'a str)>) -> Self {
        Self::Enum(
            pairs
                .into_iter()
                .map(|(value, label)| (value, label.to_string()))
                .collect(),
        )
    }

    /// Builds a bitfield table from labels in bit order.
    #[must_use]
    pub fn bitfield<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        Self::BitField(labels.into_iter().map(str::to_string).collect())
    }

    /// Returns true for enumeration tables.
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    /// Returns true for bitfield tables.
    #[must_use]
    pub const fn is_bitfield(&self) -> bool {
        matches!(self, Self::BitField(_))
    }

    /// Returns the number of labelled values or bits.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Enum(map) => map.len(),
            Self::BitField(bits) => bits.len(),
        }
    }

    /// Returns true if the table has no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders a raw value through the table.
    ///
    /// Enumerations yield the label of the value. Bitfields yield the labels
    /// of all set bits joined with `|`; unlabelled set bits render as
    /// `bit<n>`.
    #[must_use]
    pub fn describe(&self, value: u64) -> Option<String> {
        match self {
            Self::Enum(map) => map.get(&value).cloned(),
            Self::BitField(bits) => {
                let labels: Vec<String> = (0..u64::BITS as usize)
                    .filter(|bit| value & (1u64 << bit) != 0)
                    .map(|bit| {
                        bits.get(bit)
                            .cloned()
                            .unwrap_or_else(|| format!("bit{bit}"))
                    })
                    .collect();
                Some(labels.join("|"))
            }
        }
    }
}

/// Optional schema attributes of a descriptor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TagAttributes {
    /// Numeric bounds.
    pub bounds: NumericBounds,
    /// Default value; makes the element optional.
    pub default: Option<DefaultValue>,
    /// Whether the element may contain itself.
    pub recursive: bool,
    /// Enumeration or bitfield labels.
    pub values: Option<ValueTable>,
    /// Minimal encoded header length.
    pub header_size_min: u8,
    /// Minimal payload length.
    pub data_size_min: u64,
}

/// Schema of one element type.
///
/// Two descriptors are equal iff their ids are equal.
#[derive(Debug, Clone)]
pub struct TagDescriptor {
    /// Element id.
    pub id: u64,
    /// Unique element name.
    pub name: String,
    /// Payload interpreter.
    pub codec: CodecKind,
    /// Whether more than one instance may appear under the same parent.
    pub repeatable: bool,
    /// Whether the element is part of the WebM subset.
    pub webm: bool,
    /// First specification version defining the element.
    pub min_version: u8,
    /// Last specification version defining the element.
    pub max_version: u8,
    /// Minimal encoded header length.
    pub header_size_min: u8,
    /// Minimal payload length.
    pub data_size_min: u64,
    /// Numeric bounds.
    pub bounds: NumericBounds,
    /// Whether the element may contain itself.
    pub recursive: bool,
    /// Enumeration or bitfield labels.
    pub values: Option<ValueTable>,
    parent: Parent,
    mandatory: bool,
    default: Option<DefaultValue>,
    index: Option<TagIndex>,
    children: Vec<TagIndex>,
}

impl TagDescriptor {
    /// Creates a descriptor that is optional, unique and defined in every
    /// profile.
    ///
    /// # Arguments
    /// * `id` - Element id
    /// * `name` - Unique element name
    /// * `codec` - Payload interpreter
    /// * `parent` - Containment rule, fixed for the descriptor's lifetime
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, codec: CodecKind, parent: Parent) -> Self {
        Self {
            id,
            name: name.into(),
            codec,
            repeatable: false,
            webm: true,
            min_version: MIN_VERSION,
            max_version: MAX_VERSION,
            header_size_min: 0,
            data_size_min: 0,
            bounds: NumericBounds::UNBOUNDED,
            recursive: false,
            values: None,
            parent,
            mandatory: false,
            default: None,
            index: None,
            children: Vec::new(),
        }
    }

    /// Creates the placeholder descriptor for an unrecognized id.
    #[must_use]
    pub fn unknown(id: u64) -> Self {
        Self::new(id, UNKNOWN_NAME, CodecKind::Unsupported, Parent::Global).repeatable(true)
    }

    /// Sets the mandatory flag.
    #[must_use]
    pub fn mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    /// Sets the repeatable flag.
    #[must_use]
    pub fn repeatable(mut self, repeatable: bool) -> Self {
        self.repeatable = repeatable;
        self
    }

    /// Sets the profile flags.
    #[must_use]
    pub fn availability(mut self, webm: bool, min_version: u8, max_version: u8) -> Self {
        self.webm = webm;
        self.min_version = min_version;
        self.max_version = max_version;
        self
    }

    /// Applies optional attributes.
    #[must_use]
    pub fn attributes(mut self, attributes: TagAttributes) -> Self {
        self.bounds = attributes.bounds;
        self.default = attributes.default;
        self.recursive = attributes.recursive;
        self.values = attributes.values;
        self.header_size_min = attributes.header_size_min;
        self.data_size_min = attributes.data_size_min;
        self
    }

    /// Returns the containment rule.
    #[must_use]
    pub const fn parent(&self) -> Parent {
        self.parent
    }

    /// Returns the position in the owning registry, `None` for descriptors
    /// that were never inserted.
    #[must_use]
    pub const fn index(&self) -> Option<TagIndex> {
        self.index
    }

    /// Returns the mandatory flag as constructed.
    #[must_use]
    pub const fn mandatory_flag(&self) -> bool {
        self.mandatory
    }

    /// Returns true if the element must appear in its parent.
    ///
    /// A default value makes absence acceptable.
    #[must_use]
    pub const fn required(&self) -> bool {
        self.mandatory && self.default.is_none()
    }

    /// Returns the default value.
    #[must_use]
    pub const fn default_value(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }

    /// Replaces the default value.
    pub fn set_default(&mut self, default: Option<DefaultValue>) {
        self.default = default;
    }

    /// Returns the child descriptors in load order.
    #[must_use]
    pub fn children(&self) -> &[TagIndex] {
        &self.children
    }

    pub(crate) fn attach(&mut self, index: TagIndex) {
        self.index = Some(index);
        self.children.clear();
    }

    pub(crate) fn push_child(&mut self, child: TagIndex) {
        self.children.push(child);
    }

    /// Returns true if the descriptor is active under the profile.
    #[must_use]
    pub const fn applies_to(&self, profile: &Profile) -> bool {
        profile.admits(self.webm, self.min_version, self.max_version)
    }

    /// Decides whether this element may be contained in `container`.
    ///
    /// `None` stands for level zero. Containers are matched by id, so a
    /// container taken from another registry is judged the same way.
    #[must_use]
    pub fn is_child_of(&self, container: Option<&TagDescriptor>) -> bool {
        let Some(container) = container else {
            return matches!(self.parent, Parent::TopLevel | Parent::Global);
        };
        match self.parent {
            Parent::Global => true,
            Parent::Tag { id, .. } if container.id == id => true,
            _ => self.recursive && container == self,
        }
    }

    /// Checks a numeric value against the descriptor's bounds.
    #[must_use]
    pub fn admits(&self, value: Number) -> bool {
        self.bounds
            .admits(value, self.codec.is_float() || value.is_float())
    }

    /// Renders a raw value through the descriptor's value table.
    #[must_use]
    pub fn describe(&self, value: u64) -> Option<String> {
        self.values.as_ref().and_then(|table| table.describe(value))
    }

    /// Creates a codec instance for one occurrence of this element.
    #[must_use]
    pub fn instantiate(&self, header: ElementHeader) -> Element {
        Element::new(self.name.clone(), self.codec, header)
            .with_size_floors(self.header_size_min, self.data_size_min)
    }
}

impl PartialEq for TagDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TagDescriptor {}

impl Hash for TagDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TagDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [0x{:X}]", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn track_entry(index: usize) -> Parent {
        Parent::Tag {
            index: TagIndex::new(index),
            id: 0xAE,
        }
    }

    fn container(index: usize) -> TagDescriptor {
        let mut tag = TagDescriptor::new(0xAE, "TrackEntry", CodecKind::TrackEntry, Parent::TopLevel);
        tag.attach(TagIndex::new(index));
        tag
    }

    #[test]
    fn test_index_keeps_full_slot() {
        let last = TagIndex::new(usize::MAX);
        let before = TagIndex::new(usize::MAX - 1);
        assert_eq!(last.get(), usize::MAX);
        assert_ne!(last, before);
        assert_eq!(TagIndex::new(7).to_string(), "#7");
    }

    #[test]
    fn test_default_overrides_mandatory() {
        let plain = TagDescriptor::new(0x88, "FlagDefault", CodecKind::Boolean, Parent::Global)
            .mandatory(true);
        assert!(plain.required());

        let defaulted = plain.clone().attributes(TagAttributes {
            default: Some(DefaultValue::Literal(Value::Unsigned(1))),
            ..TagAttributes::default()
        });
        assert!(defaulted.mandatory_flag());
        assert!(!defaulted.required());
    }

    #[test]
    fn test_equality_by_id() {
        let a = TagDescriptor::new(0xEC, "Void", CodecKind::Void, Parent::Global);
        let b = TagDescriptor::new(0xEC, "Padding", CodecKind::Raw, Parent::TopLevel);
        let c = TagDescriptor::new(0xBF, "Void", CodecKind::Void, Parent::Global);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_unknown_descriptor() {
        let tag = TagDescriptor::unknown(0x1234);
        assert_eq!(tag.id, 0x1234);
        assert_eq!(tag.name, UNKNOWN_NAME);
        assert_eq!(tag.codec, CodecKind::Unsupported);
        assert_eq!(tag.parent(), Parent::Global);
        assert!(!tag.required());
        assert!(tag.repeatable);
        assert!(tag.webm);
        assert_eq!((tag.min_version, tag.max_version), (1, 4));
        assert_eq!(tag.index(), None);
    }

    #[test]
    fn test_is_child_of_top_level() {
        let top = TagDescriptor::new(0x18538067, "Segment", CodecKind::Segment, Parent::TopLevel);
        let global = TagDescriptor::new(0xEC, "Void", CodecKind::Void, Parent::Global);
        let nested = TagDescriptor::new(0xD7, "TrackNumber", CodecKind::Unsigned, track_entry(3));

        assert!(top.is_child_of(None));
        assert!(global.is_child_of(None));
        assert!(!nested.is_child_of(None));
    }

    #[test]
    fn test_is_child_of_container() {
        let entry = container(3);
        let nested = TagDescriptor::new(0xD7, "TrackNumber", CodecKind::Unsigned, track_entry(3));
        let global = TagDescriptor::new(0xEC, "Void", CodecKind::Void, Parent::Global);

        assert!(nested.is_child_of(Some(&entry)));
        assert!(global.is_child_of(Some(&entry)));
        assert!(global.is_child_of(Some(&global)));
    }

    #[test]
    fn test_is_child_of_matches_container_by_id() {
        let nested = TagDescriptor::new(0xD7, "TrackNumber", CodecKind::Unsigned, track_entry(3));

        let elsewhere = container(9);
        let detached = TagDescriptor::new(0xAE, "TrackEntry", CodecKind::TrackEntry, Parent::TopLevel);
        assert!(nested.is_child_of(Some(&elsewhere)));
        assert!(nested.is_child_of(Some(&detached)));

        let mut same_slot = TagDescriptor::new(0xE0, "Video", CodecKind::Video, Parent::TopLevel);
        same_slot.attach(TagIndex::new(3));
        assert!(!nested.is_child_of(Some(&same_slot)));
    }

    #[test]
    fn test_is_child_of_recursive() {
        let atom = TagDescriptor::new(0xB6, "ChapterAtom", CodecKind::ChapterAtom, Parent::Tag { index: TagIndex::new(1), id: 0x45B9 })
            .attributes(TagAttributes {
                recursive: true,
                ..TagAttributes::default()
            });
        let plain = TagDescriptor::new(0x45B9, "EditionEntry", CodecKind::EditionEntry, Parent::Tag { index: TagIndex::new(0), id: 0x1043A770 });

        assert!(atom.is_child_of(Some(&atom)));
        assert!(!plain.is_child_of(Some(&plain)));
    }

    #[test]
    fn test_bounds_integer_inclusive() {
        let bounds = NumericBounds::new(Some(Number::Unsigned(1)), Some(Number::Unsigned(254)));
        assert!(bounds.admits(Number::Unsigned(1), false));
        assert!(bounds.admits(Number::Unsigned(254), false));
        assert!(!bounds.admits(Number::Unsigned(0), false));
        assert!(!bounds.admits(Number::Unsigned(255), false));
        assert!(NumericBounds::UNBOUNDED.admits(Number::Signed(-5), false));
    }

    #[test]
    fn test_bounds_float_strict() {
        let tag = TagDescriptor::new(0xB5, "SamplingFrequency", CodecKind::Float, Parent::Global)
            .attributes(TagAttributes {
                bounds: NumericBounds::new(Some(Number::Float(0.0)), None),
                ..TagAttributes::default()
            });
        assert!(!tag.admits(Number::Float(0.0)));
        assert!(tag.admits(Number::Float(44100.0)));
        assert!(!tag.admits(Number::Float(f64::NAN)));
    }

    #[test]
    fn test_value_table_describe() {
        let kinds = ValueTable::enumeration([(1, "video"), (2, "audio")]);
        assert_eq!(kinds.describe(2).as_deref(), Some("audio"));
        assert_eq!(kinds.describe(3), None);

        let scope = ValueTable::bitfield(["all-frame-contents", "track-private-data"]);
        assert_eq!(scope.describe(0b11).as_deref(), Some("all-frame-contents|track-private-data"));
        assert_eq!(scope.describe(0b100).as_deref(), Some("bit2"));
        assert_eq!(scope.describe(0).as_deref(), Some(""));
        assert!(scope.is_bitfield());
        assert_eq!(scope.len(), 2);
    }

    #[test]
    fn test_instantiate_binds_name_and_floors() {
        let tag = TagDescriptor::new(0x18538067, "Segment", CodecKind::Segment, Parent::TopLevel)
            .attributes(TagAttributes {
                header_size_min: 8,
                ..TagAttributes::default()
            });
        let header = ElementHeader::new(0x18538067, 0, 5, None);
        let element = tag.instantiate(header);

        assert_eq!(element.name(), "Segment");
        assert_eq!(element.codec(), CodecKind::Segment);
        assert_eq!(element.header_size_min(), 8);
        assert_eq!(element.header(), &header);
    }
}
