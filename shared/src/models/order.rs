//! Order Model

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::menu::{ExtraOption, SizeOption};

/// Opaque order identifier
///
/// Sequential stores hand out small integers, durable stores hand out unique
/// tokens; both travel as strings. Deserialization also accepts a JSON
/// integer so `{"id": 3}` and `{"id": "3"}` address the same order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for OrderId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for OrderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Ok(Self(s)),
            Raw::Number(n) => Ok(Self(n.to_string())),
        }
    }
}

/// One catalog item at one size with zero or more extras
///
/// Extras keep the multiplicity they were submitted with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Menu item name
    pub name: String,
    pub size: SizeOption,
    #[serde(default)]
    pub extras: Vec<ExtraOption>,
}

impl OrderLine {
    /// `Pizza Hawaii(groß, 32 cm, Ananas, Mais)`
    pub fn summary(&self) -> String {
        let mut text = format!("{}({}", self.name, self.size.name);
        for extra in &self.extras {
            text.push_str(", ");
            text.push_str(&extra.name);
        }
        text.push(')');
        text
    }
}

/// Order contents accepted by a store
///
/// Carries no identifier and no payment flag: both are always assigned by
/// the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    /// Customer name
    pub name: String,
    pub items: Vec<OrderLine>,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Customer name
    pub name: String,
    /// Lines in entry order (ticket printing follows this order)
    pub items: Vec<OrderLine>,
    pub is_paid: bool,
    /// Creation time (Unix millis)
    #[serde(default)]
    pub created_at: i64,
}

impl Order {
    /// Build a fresh, unpaid order from a draft
    pub fn from_draft(id: OrderId, draft: OrderDraft, created_at: i64) -> Self {
        Self {
            id,
            name: draft.name,
            items: draft.items,
            is_paid: false,
            created_at,
        }
    }

    /// Comma separated line summaries, as shown on the admin overview
    pub fn items_summary(&self) -> String {
        self.items
            .iter()
            .map(OrderLine::summary)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SizeTier;

    fn line() -> OrderLine {
        OrderLine {
            name: "Pizza Hawaii".into(),
            size: SizeOption::new("groß, 32 cm", 860, SizeTier::Medium),
            extras: vec![ExtraOption::new("Ananas", 50), ExtraOption::new("Mais", 50)],
        }
    }

    #[test]
    fn test_order_id_accepts_string_and_number() {
        let a: OrderId = serde_json::from_str("\"c9k2\"").unwrap();
        let b: OrderId = serde_json::from_str("17").unwrap();
        assert_eq!(a.as_str(), "c9k2");
        assert_eq!(b, OrderId::from(17u64));
        assert_eq!(serde_json::to_string(&b).unwrap(), "\"17\"");
    }

    #[test]
    fn test_from_draft_is_unpaid() {
        let draft = OrderDraft {
            name: "Anna".into(),
            items: vec![line()],
        };
        let order = Order::from_draft(OrderId::from(1u64), draft, 1_700_000_000_000);
        assert!(!order.is_paid);
        assert_eq!(order.name, "Anna");
        assert_eq!(order.items.len(), 1);
    }

    #[test]
    fn test_summaries() {
        assert_eq!(line().summary(), "Pizza Hawaii(groß, 32 cm, Ananas, Mais)");

        let order = Order {
            id: OrderId::from(1u64),
            name: "Ben".into(),
            items: vec![line(), line()],
            is_paid: false,
            created_at: 0,
        };
        assert_eq!(
            order.items_summary(),
            "Pizza Hawaii(groß, 32 cm, Ananas, Mais), Pizza Hawaii(groß, 32 cm, Ananas, Mais)"
        );
    }

    #[test]
    fn test_duplicate_extras_are_preserved() {
        let json = r#"{"name":"Pizza Basic","size":{"name":"klein, 24 cm","price":600,"tier":"small"},
            "extras":[{"name":"Salami","price":50},{"name":"Salami","price":50}]}"#;
        let line: OrderLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.extras.len(), 2);
    }
}
