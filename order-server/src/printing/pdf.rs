//! PDF kitchen ticket
//!
//! 传真服务只接受 PDF，这里把 [`KitchenTicketRenderer`] 的文本逐行排到
//! A4 页面上 (Courier 等宽字体)，超出一页自动换页。

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use shared::models::Order;
use shared::request::DeliveryContact;

use super::renderer::{KitchenTicketRenderer, TicketRenderer};
use super::types::{RenderError, TicketDocument};

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const MARGIN_LEFT: f32 = 20.0;
const MARGIN_TOP: f32 = 20.0;
const LINE_HEIGHT: f32 = 6.0;
const FONT_SIZE: f32 = 12.0;
/// Rows that fit between the top and bottom margins
const LINES_PER_PAGE: usize = 42;

/// Kitchen ticket as a PDF document
#[derive(Debug, Clone, Default)]
pub struct PdfTicketRenderer {
    layout: KitchenTicketRenderer,
}

impl PdfTicketRenderer {
    pub const FILENAME: &'static str = "bestellung.pdf";

    pub fn new(layout: KitchenTicketRenderer) -> Self {
        Self { layout }
    }

    fn write_page(layer: &PdfLayerReference, font: &IndirectFontRef, rows: &[&str]) {
        for (row, text) in rows.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            let y = PAGE_HEIGHT.0 - MARGIN_TOP - LINE_HEIGHT * row as f32;
            layer.use_text(*text, FONT_SIZE, Mm(MARGIN_LEFT), Mm(y), font);
        }
    }
}

impl TicketRenderer for PdfTicketRenderer {
    fn render(
        &self,
        contact: Option<&DeliveryContact>,
        orders: &[Order],
    ) -> Result<TicketDocument, RenderError> {
        let text = self.layout.text(contact, orders);
        let rows: Vec<&str> = text.lines().collect();

        let (doc, page, layer) = PdfDocument::new("Bestellung", PAGE_WIDTH, PAGE_HEIGHT, "Ticket");
        let font = doc
            .add_builtin_font(BuiltinFont::Courier)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;

        let mut pages = rows.chunks(LINES_PER_PAGE);
        // 第一页总是存在 (空小票也输出一页)
        if let Some(first) = pages.next() {
            Self::write_page(&doc.get_page(page).get_layer(layer), &font, first);
        }
        for chunk in pages {
            let (page, layer) = doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, "Ticket");
            Self::write_page(&doc.get_page(page).get_layer(layer), &font, chunk);
        }

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        tracing::debug!(rows = rows.len(), bytes = bytes.len(), "Rendered PDF ticket");

        Ok(TicketDocument::pdf(Self::FILENAME, bytes))
    }
}
