//! Feature card records as produced by the card-authoring batch job.
//!
//! Each record is a product feature dressed up as a fantasy trading card.
//! The engine never reads these fields; they ride along as the payload of
//! a `RankedCard` for the presentation layer.

use serde::{Deserialize, Serialize};

/// One feature card from the catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCard {
    /// `["CREATURE NAME", "(PRODUCT FEATURE NAME)"]`.
    pub name: Vec<String>,

    /// Expected impact, e.g. "Medium".
    #[serde(default)]
    pub estimated_impact_to_project: String,

    /// Build effort as a t-shirt size, e.g. "L", "xlarge".
    #[serde(default)]
    pub estimated_t_shirt_size_to_build: String,

    /// Mana cost strings such as `["{1}{W}{U}"]` or `["{2}{W}", "{1}{B}"]`.
    #[serde(default)]
    pub mana_cost: Vec<String>,

    #[serde(default)]
    pub image_description: String,

    /// "Enchantment", "Artifact", "Creature", ...
    #[serde(default)]
    pub card_type: String,

    #[serde(default)]
    pub card_subtypes: Vec<String>,

    /// What the feature actually does.
    #[serde(default)]
    pub card_text: String,

    #[serde(default)]
    pub flavor_text: String,

    /// `[power, defense]`, empty when the card has none.
    #[serde(default)]
    pub power_defense: Vec<i64>,
}

impl FeatureCard {
    /// Fantasy name shown on the card face.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.first().map_or("", String::as_str)
    }

    /// Underlying product feature, without the surrounding parentheses.
    #[must_use]
    pub fn feature_name(&self) -> Option<&str> {
        self.name.get(1).map(|s| {
            let s = s.trim();
            s.strip_prefix('(')
                .and_then(|s| s.strip_suffix(')'))
                .unwrap_or(s)
        })
    }

    /// Mana symbols across every cost string: `{2}{W}{U}` -> `["2", "W", "U"]`.
    #[must_use]
    pub fn mana_symbols(&self) -> Vec<&str> {
        self.mana_cost
            .iter()
            .flat_map(|cost| cost.split(['{', '}']))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// `(power, defense)` if the card has both.
    #[must_use]
    pub fn power_defense(&self) -> Option<(i64, i64)> {
        match self.power_defense.as_slice() {
            [power, defense] => Some((*power, *defense)),
            _ => None,
        }
    }
}
