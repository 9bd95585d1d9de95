//! Persisted form of an item, as stored in the static item data.

use super::amount::parse_amount;
use super::{AtomicReward, Item, ItemDataError, ItemType, Reward};
use crate::chain::Chain;

/// Item record exactly as it appears in the data files.
///
/// ```json
/// { "id": "TR[500]", "name": "500 Tears", "hint": "...", "type": "Tears",
///   "progression": false, "count": 1, "subItems": null }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ItemRecord {
    pub id: String,

    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,

    #[cfg_attr(feature = "serde", serde(default))]
    pub hint: String,

    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub item_type: TypeTag,

    #[cfg_attr(feature = "serde", serde(default))]
    pub progression: bool,

    #[cfg_attr(feature = "serde", serde(default = "default_count"))]
    pub count: u32,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub sub_items: Option<Vec<String>>,
}

#[cfg(feature = "serde")]
fn default_count() -> u32 {
    1
}

/// Type tag of a record, written either as the enum name or its numeric code.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum TypeTag {
    Code(u32),
    Name(String),
}

impl TypeTag {
    /// Returns the known type this tag names, if any.
    pub fn resolve(&self) -> Option<ItemType> {
        match self {
            Self::Code(code) => u8::try_from(*code).ok().and_then(ItemType::from_code),
            Self::Name(name) => name.parse().ok(),
        }
    }
}

impl From<ItemType> for TypeTag {
    fn from(item_type: ItemType) -> Self {
        Self::Name(item_type.to_string())
    }
}

impl core::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{code}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl TryFrom<ItemRecord> for Item {
    type Error = ItemDataError;

    /// Converts a record, parsing Tears/Marks amounts once.
    ///
    /// A present but empty `subItems` list yields an atomic item.
    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        if record.id.is_empty() {
            return Err(ItemDataError::EmptyId);
        }

        let item_type = record.item_type.resolve();
        let reward = match record.sub_items.and_then(Chain::new) {
            Some(chain) => Reward::Progressive(chain),
            None => Reward::Atomic(atomic_reward(&record.id, item_type, &record.item_type)?),
        };

        Ok(Self {
            id: record.id,
            name: record.name,
            hint: record.hint,
            item_type,
            progression: record.progression,
            count: record.count,
            reward,
        })
    }
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        let item_type = match (&item.reward, item.item_type) {
            (_, Some(known)) => TypeTag::from(known),
            (Reward::Atomic(AtomicReward::Unrecognized { tag }), None) => TypeTag::Name(tag.clone()),
            (_, None) => TypeTag::Name(String::new()),
        };

        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            hint: item.hint.clone(),
            item_type,
            progression: item.progression,
            count: item.count,
            sub_items: item.chain().map(|chain| chain.sub_items().to_vec()),
        }
    }
}

fn atomic_reward(
    id: &str,
    item_type: Option<ItemType>,
    tag: &TypeTag,
) -> Result<AtomicReward, ItemDataError> {
    let amount = || {
        parse_amount(id).map_err(|reason| ItemDataError::MalformedAmount {
            id: id.to_owned(),
            reason,
        })
    };

    Ok(match item_type {
        Some(ItemType::RosaryBead) => AtomicReward::RosaryBead,
        Some(ItemType::Prayer) => AtomicReward::Prayer,
        Some(ItemType::Figurine) => AtomicReward::Figurine,
        Some(ItemType::QuestItem) => AtomicReward::QuestItem,
        Some(ItemType::Weapon) => AtomicReward::Weapon,
        Some(ItemType::Ability) => AtomicReward::Ability,
        Some(ItemType::Tears) => AtomicReward::Tears { amount: amount()? },
        Some(ItemType::Marks) => AtomicReward::Marks { amount: amount()? },
        None => {
            tracing::warn!("item '{}' has unrecognized type '{}'", id, tag);
            AtomicReward::Unrecognized {
                tag: tag.to_string(),
            }
        }
    })
}
