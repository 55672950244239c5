//! 菜单目录
//!
//! 进程启动时构建一次，之后只读。顾客提交的订单只按名称引用菜品、规格和
//! 加料，价格与价格档位一律以菜单为准。

mod menu;

use shared::error::{AppError, ErrorCode};
use shared::models::{MenuItem, OrderDraft, OrderLine};
use shared::request::OrderSubmission;
use thiserror::Error;

use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

/// 提交解析错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("order must contain at least one item")]
    EmptyOrder,

    #[error("Unknown menu item: {0}")]
    UnknownItem(String),

    #[error("{item} has no size '{size}'")]
    UnknownSize { item: String, size: String },

    #[error("{item} has no extra '{extra}'")]
    UnknownExtra { item: String, extra: String },
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        let code = match &err {
            CatalogError::EmptyOrder => ErrorCode::OrderEmpty,
            CatalogError::UnknownItem(_) => ErrorCode::MenuItemNotFound,
            CatalogError::UnknownSize { .. } => ErrorCode::SizeNotFound,
            CatalogError::UnknownExtra { .. } => ErrorCode::ExtraNotFound,
        };
        AppError::with_message(code, err.to_string())
    }
}

/// 只读菜单
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
    markup_percent: u32,
}

impl Catalog {
    /// 标准菜单，规格价格统一加价 `markup_percent`%
    pub fn standard(markup_percent: u32) -> Self {
        Self {
            items: menu::standard_menu(markup_percent),
            markup_percent,
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn markup_percent(&self) -> u32 {
        self.markup_percent
    }

    pub fn item(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.name == name)
    }

    /// 把顾客提交解析为订单草稿
    ///
    /// 客户端发来的任何价格都被忽略；重复的加料按提交次数保留。
    pub fn resolve(&self, submission: &OrderSubmission) -> Result<OrderDraft, AppError> {
        let name = submission.name.trim();
        validate_required_text(name, "name", MAX_NAME_LEN)?;

        if submission.items.is_empty() {
            return Err(CatalogError::EmptyOrder.into());
        }

        let mut lines = Vec::with_capacity(submission.items.len());
        for line in &submission.items {
            let item = self
                .item(&line.name)
                .ok_or_else(|| CatalogError::UnknownItem(line.name.clone()))?;

            let size = item
                .size(&line.size.name)
                .ok_or_else(|| CatalogError::UnknownSize {
                    item: item.name.clone(),
                    size: line.size.name.clone(),
                })?
                .clone();

            let extras = line
                .extras
                .iter()
                .map(|extra| {
                    item.extra(&extra.name)
                        .cloned()
                        .ok_or_else(|| CatalogError::UnknownExtra {
                            item: item.name.clone(),
                            extra: extra.name.clone(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;

            lines.push(OrderLine {
                name: item.name.clone(),
                size,
                extras,
            });
        }

        Ok(OrderDraft {
            name: name.to_string(),
            items: lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::SizeTier;
    use shared::request::{LineSubmission, OptionRef};

    fn submission(name: &str, lines: Vec<LineSubmission>) -> OrderSubmission {
        OrderSubmission {
            name: name.into(),
            items: lines,
        }
    }

    fn line(item: &str, size: &str, extras: &[&str]) -> LineSubmission {
        LineSubmission {
            name: item.into(),
            size: OptionRef::from(size),
            extras: extras.iter().map(|e| OptionRef::from(*e)).collect(),
        }
    }

    #[test]
    fn test_resolve_uses_menu_prices() {
        let catalog = Catalog::standard(0);
        let draft = catalog
            .resolve(&submission(
                "  Anna ",
                vec![line("Pizza Hawaii", "Family, 45x32 cm", &["Mais", "Mais"])],
            ))
            .unwrap();

        assert_eq!(draft.name, "Anna");
        let l = &draft.items[0];
        assert_eq!(l.size.price, 1530);
        assert_eq!(l.size.tier, SizeTier::Large);
        assert_eq!(l.extras.len(), 2);
        assert!(l.extras.iter().all(|e| e.price == 50));
    }

    #[test]
    fn test_resolve_applies_markup() {
        let catalog = Catalog::standard(10);
        let draft = catalog
            .resolve(&submission("Ben", vec![line("Pizza Margherita", "klein, 24 cm", &[])]))
            .unwrap();
        assert_eq!(draft.items[0].size.price, 715);
        assert_eq!(catalog.markup_percent(), 10);
    }

    #[test]
    fn test_resolve_rejects_bad_input() {
        let catalog = Catalog::standard(0);

        let err = catalog.resolve(&submission(" ", vec![line("Pizza Hawaii", "klein, 24 cm", &[])]));
        assert_eq!(err.unwrap_err().code, ErrorCode::ValidationFailed);

        let err = catalog.resolve(&submission("Anna", vec![]));
        assert_eq!(err.unwrap_err().code, ErrorCode::OrderEmpty);

        let err = catalog.resolve(&submission("Anna", vec![line("Pizza Funghi", "klein, 24 cm", &[])]));
        assert_eq!(err.unwrap_err().code, ErrorCode::MenuItemNotFound);

        let err = catalog.resolve(&submission("Anna", vec![line("Pizza Hawaii", "mittel", &[])]));
        assert_eq!(err.unwrap_err().code, ErrorCode::SizeNotFound);

        let err = catalog.resolve(&submission(
            "Anna",
            vec![line("Pizza Hawaii", "klein, 24 cm", &["Gold"])],
        ));
        let err = err.unwrap_err();
        assert_eq!(err.code, ErrorCode::ExtraNotFound);
        assert!(err.message.contains("Gold"));
    }
}
