use std::collections::HashMap;

/// Read-only store of concrete game objects, keyed by kind and id.
pub trait CatalogOracle {
    fn try_get(&self, kind: CatalogKind, id: &str) -> Option<CatalogEntry>;

    /// Returns every entry in this catalog, in no particular order.
    fn all_entries(&self) -> Vec<CatalogEntry>;
}

/// Which catalog an object lives in.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum CatalogKind {
    RosaryBead,
    Prayer,
    Figurine,
    QuestItem,
    Weapon,
    Ability,
}

/// Name of a sprite the host can display.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ImageId(pub String);

impl ImageId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ImageId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Concrete game object handed to the managers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogEntry {
    pub kind: CatalogKind,
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: Option<ImageId>,
}

impl CatalogEntry {
    pub fn new(kind: CatalogKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            image: None,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(ImageId::new(image));
        self
    }
}

/// [`CatalogOracle`] backed by an in-memory map.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    entries: HashMap<(CatalogKind, String), CatalogEntry>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, replacing any previous entry with the same kind and id.
    pub fn insert(&mut self, entry: CatalogEntry) {
        self.entries.insert((entry.kind, entry.id.clone()), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CatalogEntry> for StaticCatalog {
    fn from_iter<T: IntoIterator<Item = CatalogEntry>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for entry in iter {
            catalog.insert(entry);
        }
        catalog
    }
}

impl CatalogOracle for StaticCatalog {
    fn try_get(&self, kind: CatalogKind, id: &str) -> Option<CatalogEntry> {
        self.entries.get(&(kind, id.to_owned())).cloned()
    }

    fn all_entries(&self) -> Vec<CatalogEntry> {
        self.entries.values().cloned().collect()
    }
}
