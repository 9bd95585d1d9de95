use crate::chain::Chain;
use crate::env::CatalogKind;

/// Item category tag carried by every item record.
///
/// Discriminants match the numeric codes used by the item data files, which
/// may spell the tag either by name or by code.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum ItemType {
    RosaryBead = 0,
    Prayer = 1,
    Figurine = 2,
    QuestItem = 3,
    Weapon = 4,
    Ability = 5,
    Tears = 20,
    Marks = 21,
}

impl ItemType {
    /// Numeric code of this tag in the data files.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::RosaryBead),
            1 => Some(Self::Prayer),
            2 => Some(Self::Figurine),
            3 => Some(Self::QuestItem),
            4 => Some(Self::Weapon),
            5 => Some(Self::Ability),
            20 => Some(Self::Tears),
            21 => Some(Self::Marks),
            _ => None,
        }
    }

    /// Catalog that holds the concrete game object for this type, if any.
    ///
    /// Tears and Marks are plain stat grants and have no catalog of their own.
    pub const fn catalog_kind(self) -> Option<CatalogKind> {
        match self {
            Self::RosaryBead => Some(CatalogKind::RosaryBead),
            Self::Prayer => Some(CatalogKind::Prayer),
            Self::Figurine => Some(CatalogKind::Figurine),
            Self::QuestItem => Some(CatalogKind::QuestItem),
            Self::Weapon => Some(CatalogKind::Weapon),
            Self::Ability => Some(CatalogKind::Ability),
            Self::Tears | Self::Marks => None,
        }
    }

    /// Whether atomic items of this type encode an amount in their id.
    pub const fn carries_amount(self) -> bool {
        matches!(self, Self::Tears | Self::Marks)
    }
}

/// How an item resolves when it is granted or displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reward {
    /// Single reward applied directly.
    Atomic(AtomicReward),

    /// Ordered chain of sub-items; one tier is granted per activation.
    Progressive(Chain),
}

impl Reward {
    pub fn as_chain(&self) -> Option<&Chain> {
        match self {
            Self::Progressive(chain) => Some(chain),
            Self::Atomic(_) => None,
        }
    }
}

/// Reward action of a non-chained item.
///
/// Tears and Marks carry the amount parsed from the item id at load time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AtomicReward {
    RosaryBead,
    Prayer,
    Figurine,
    QuestItem,
    Weapon,
    Ability,
    Tears { amount: u32 },
    Marks { amount: u32 },

    /// The record carried a type tag this build does not know.
    ///
    /// Granting it performs no action but still marks the item collected.
    Unrecognized { tag: String },
}

impl AtomicReward {
    /// Catalog queried when granting or displaying this reward.
    pub const fn catalog_kind(&self) -> Option<CatalogKind> {
        match self {
            Self::RosaryBead => Some(CatalogKind::RosaryBead),
            Self::Prayer => Some(CatalogKind::Prayer),
            Self::Figurine => Some(CatalogKind::Figurine),
            Self::QuestItem => Some(CatalogKind::QuestItem),
            Self::Weapon => Some(CatalogKind::Weapon),
            Self::Ability => Some(CatalogKind::Ability),
            Self::Tears { .. } | Self::Marks { .. } | Self::Unrecognized { .. } => None,
        }
    }
}
