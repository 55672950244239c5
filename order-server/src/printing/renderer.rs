//! Kitchen ticket renderer
//!
//! Renders the current order list into a plain-text ticket for the kitchen.
//! Layout per order line:
//!
//! ```text
//! Pizza Hawaii (groß, 32 cm)
//! +Mais +Ananas
//! ```
//!
//! Prices are not printed; the kitchen only needs what to bake.
//! [`PdfTicketRenderer`](super::PdfTicketRenderer) lays out the same text
//! as a PDF for the fax service.

use shared::models::{Order, OrderLine};
use shared::request::DeliveryContact;

use super::types::{RenderError, TicketDocument};

/// Ticket renderer
///
/// Renders from a snapshot; implementations must not touch the order store.
pub trait TicketRenderer: Send + Sync {
    fn render(
        &self,
        contact: Option<&DeliveryContact>,
        orders: &[Order],
    ) -> Result<TicketDocument, RenderError>;
}

/// Plain-text kitchen ticket
#[derive(Debug, Clone)]
pub struct KitchenTicketRenderer {
    width: usize,
    /// Delivery address lines printed under the contact name
    address: Vec<String>,
    remark: Option<String>,
}

impl KitchenTicketRenderer {
    pub const FILENAME: &'static str = "bestellung.txt";

    /// Create a new renderer with the given line width (separators only)
    pub fn new(width: usize) -> Self {
        Self {
            width,
            address: Vec::new(),
            remark: None,
        }
    }

    pub fn with_address(mut self, address: Vec<String>) -> Self {
        self.address = address;
        self
    }

    pub fn with_remark(mut self, remark: Option<String>) -> Self {
        self.remark = remark.filter(|r| !r.trim().is_empty());
        self
    }

    fn render_header(&self, out: &mut String, contact: &DeliveryContact) {
        push_line(out, &contact.name);
        for line in &self.address {
            push_line(out, line);
        }
        push_line(out, &contact.number);
        out.push('\n');

        if let Some(remark) = &self.remark {
            push_line(out, "Bemerkung:");
            push_line(out, remark);
            out.push('\n');
        }

        push_line(out, "Zahlung: Bar");
        self.separator(out);
    }

    fn render_line(&self, out: &mut String, line: &OrderLine) {
        push_line(out, &format!("{} ({})", line.name, line.size.name));

        if !line.extras.is_empty() {
            let extras = line
                .extras
                .iter()
                .map(|e| format!("+{}", e.name))
                .collect::<Vec<_>>()
                .join(" ");
            push_line(out, &extras);
        }
        out.push('\n');
    }

    fn separator(&self, out: &mut String) {
        push_line(out, &"=".repeat(self.width));
    }
}

impl Default for KitchenTicketRenderer {
    fn default() -> Self {
        Self::new(48)
    }
}

impl KitchenTicketRenderer {
    /// Ticket text, one `\n`-terminated line per printed row
    pub fn text(&self, contact: Option<&DeliveryContact>, orders: &[Order]) -> String {
        let mut out = String::new();

        if let Some(contact) = contact {
            self.render_header(&mut out, contact);
        }

        for order in orders {
            for line in &order.items {
                self.render_line(&mut out, line);
            }
        }

        out
    }
}

impl TicketRenderer for KitchenTicketRenderer {
    fn render(
        &self,
        contact: Option<&DeliveryContact>,
        orders: &[Order],
    ) -> Result<TicketDocument, RenderError> {
        Ok(TicketDocument::plain_text(
            Self::FILENAME,
            self.text(contact, orders),
        ))
    }
}

fn push_line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}
