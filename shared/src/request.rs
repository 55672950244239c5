//! Request types for the order API
//!
//! Field aliases keep bodies sent by the legacy storefront front-end
//! (`Name`, `Items`, `Size`, `Extras`, `Id`, `IsPayed`) accepted.

use serde::{Deserialize, Deserializer};

use crate::models::OrderId;

/// Reference to a size or extra by label
///
/// Accepts either a bare string or an object with a `name` field; any price
/// the caller sends along is ignored, prices come from the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRef {
    pub name: String,
}

impl<'de> Deserialize<'de> for OptionRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Named {
            #[serde(alias = "Name")]
            name: String,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Label(String),
            Object(Named),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Label(name) => Self { name },
            Raw::Object(named) => Self { name: named.name },
        })
    }
}

impl From<&str> for OptionRef {
    fn from(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// One submitted line
#[derive(Debug, Clone, Deserialize)]
pub struct LineSubmission {
    /// Menu item name
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Size")]
    pub size: OptionRef,
    #[serde(default, alias = "Extras")]
    pub extras: Vec<OptionRef>,
}

/// Order submission (`POST /order`)
///
/// Any `id` / `is_paid` the caller includes is not part of this type and is
/// dropped during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderSubmission {
    /// Customer name
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Items")]
    pub items: Vec<LineSubmission>,
}

/// Payment flag update (`POST /admin<secret>`)
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentUpdate {
    #[serde(alias = "Id")]
    pub id: OrderId,
    #[serde(alias = "isPaid", alias = "IsPayed")]
    pub is_paid: bool,
}

/// Order reference (`POST /deleteOrder<secret>`)
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRef {
    #[serde(alias = "Id")]
    pub id: OrderId,
}

/// Delivery contact printed at the top of a faxed ticket
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, serde::Serialize)]
pub struct DeliveryContact {
    #[serde(default, alias = "Name")]
    pub name: String,
    /// Phone number to call on arrival
    #[serde(default, alias = "Number")]
    pub number: String,
}
