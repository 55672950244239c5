//! Menu Model
//!
//! 菜单数据在进程生命周期内只读。规格 (size) 的价格档位在定义菜单时
//! 一次性确定，之后计价只看档位，不再比对规格名称。

use serde::{Deserialize, Serialize};

/// Canonical size tier, fixed when a menu item's sizes are defined
///
/// `Other` is the explicit fallback for stored tiers this build does not
/// recognise; it prices like the largest tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeTier {
    Small,
    Medium,
    Large,
    ExtraLarge,
    #[default]
    #[serde(other)]
    Other,
}

impl SizeTier {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::ExtraLarge => "extra_large",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for SizeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Size option of a menu item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOption {
    /// Display label, e.g. "klein, 24 cm"
    pub name: String,
    /// Base price in cents
    pub price: i64,
    #[serde(default)]
    pub tier: SizeTier,
}

impl SizeOption {
    pub fn new(name: impl Into<String>, price: i64, tier: SizeTier) -> Self {
        Self {
            name: name.into(),
            price,
            tier,
        }
    }
}

/// Extra topping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraOption {
    pub name: String,
    /// Base price in cents (before the size surcharge)
    pub price: i64,
}

impl ExtraOption {
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    /// Sizes in display order
    pub sizes: Vec<SizeOption>,
    pub extras: Vec<ExtraOption>,
}

impl MenuItem {
    /// Find a size by its label
    pub fn size(&self, name: &str) -> Option<&SizeOption> {
        self.sizes.iter().find(|s| s.name == name)
    }

    /// Find an extra by its name
    pub fn extra(&self, name: &str) -> Option<&ExtraOption> {
        self.extras.iter().find(|e| e.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_tier_serde() {
        let json = serde_json::to_string(&SizeTier::ExtraLarge).unwrap();
        assert_eq!(json, "\"extra_large\"");
        let tier: SizeTier = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(tier, SizeTier::Medium);
    }

    #[test]
    fn test_unknown_tier_falls_back_to_other() {
        let tier: SizeTier = serde_json::from_str("\"jumbo\"").unwrap();
        assert_eq!(tier, SizeTier::Other);
    }

    #[test]
    fn test_size_without_tier_defaults_to_other() {
        let size: SizeOption = serde_json::from_str(r#"{"name":"Party","price":1690}"#).unwrap();
        assert_eq!(size.tier, SizeTier::Other);
        assert_eq!(size.price, 1690);
    }

    #[test]
    fn test_menu_item_lookup() {
        let item = MenuItem {
            name: "Pizza Margherita".into(),
            description: "mit Pizzasauce".into(),
            sizes: vec![
                SizeOption::new("klein, 24 cm", 650, SizeTier::Small),
                SizeOption::new("groß, 32 cm", 800, SizeTier::Medium),
            ],
            extras: vec![ExtraOption::new("Basilikum", 50)],
        };

        assert_eq!(item.size("groß, 32 cm").unwrap().tier, SizeTier::Medium);
        assert!(item.size("Party, 60x40 cm").is_none());
        assert_eq!(item.extra("Basilikum").unwrap().price, 50);
        assert!(item.extra("Ananas").is_none());
    }
}
