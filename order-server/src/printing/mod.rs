//! Kitchen ticket printing
//!
//! | 渲染器 | 输出 | 用途 |
//! |--------|------|------|
//! | `KitchenTicketRenderer` | text/plain | `/ticket` 预览 |
//! | `PdfTicketRenderer` | application/pdf | 传真 |

mod pdf;
mod renderer;
mod types;

pub use pdf::PdfTicketRenderer;
pub use renderer::{KitchenTicketRenderer, TicketRenderer};
pub use types::{RenderError, TicketDocument};
