/// Tunable ids the reward engine uses for bundled effects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RewardConfig {
    /// Ability unlocked together with the first weapon, granting weapon switching.
    pub switch_ability_id: String,

    /// Quest item whose image stands for every Marks reward.
    pub marks_image_id: String,
}

impl RewardConfig {
    pub const DEFAULT_SWITCH_ABILITY_ID: &'static str = "AB10";
    pub const DEFAULT_MARKS_IMAGE_ID: &'static str = "QI99";

    pub fn new() -> Self {
        Self {
            switch_ability_id: Self::DEFAULT_SWITCH_ABILITY_ID.to_owned(),
            marks_image_id: Self::DEFAULT_MARKS_IMAGE_ID.to_owned(),
        }
    }
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self::new()
    }
}
