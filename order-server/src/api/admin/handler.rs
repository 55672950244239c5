//! Admin API Handlers

use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use shared::models::Order;
use shared::request::{DeliveryContact, OrderRef, PaymentUpdate};

use crate::api::extract::{JsonBody, QueryParams};
use crate::api::views::AdminOverview;
use crate::core::ServerState;
use crate::printing::TicketDocument;
use crate::security_log;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// Orders with summaries, prices and the grand total
pub async fn overview(State(state): State<ServerState>) -> AppResult<Json<AdminOverview>> {
    let orders = state.orders.list()?;
    Ok(Json(AdminOverview::from_snapshot(&orders)))
}

/// Set the paid flag
pub async fn update_payment(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<PaymentUpdate>,
) -> AppResult<Json<Order>> {
    let order = state
        .orders
        .update_payment_status(&payload.id, payload.is_paid)?;
    security_log!(
        "INFO",
        "payment_updated",
        order_id = order.id.as_str(),
        is_paid = order.is_paid
    );
    Ok(Json(order))
}

/// Delete an order
///
/// Responds with the removed order, or `null` if its stored record was
/// unreadable (the record is removed either way).
pub async fn delete(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<OrderRef>,
) -> AppResult<Json<Option<Order>>> {
    let order = state.orders.delete(&payload.id)?;
    security_log!("INFO", "order_deleted", order_id = payload.id.as_str());
    Ok(Json(order))
}

/// Kitchen ticket preview
///
/// `?name=..&number=..` adds the delivery header.
pub async fn ticket(
    State(state): State<ServerState>,
    QueryParams(contact): QueryParams<DeliveryContact>,
) -> AppResult<Response> {
    let orders = state.orders.list()?;
    let has_contact = !contact.name.trim().is_empty() || !contact.number.trim().is_empty();
    let document = state
        .preview_renderer
        .render(has_contact.then_some(&contact), &orders)?;
    Ok(document_response(document))
}

/// Render the ticket for all current orders and fax it to the kitchen
pub async fn fax_order(
    State(state): State<ServerState>,
    JsonBody(contact): JsonBody<DeliveryContact>,
) -> AppResult<Json<bool>> {
    validate_required_text(&contact.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&contact.number, "number", MAX_SHORT_TEXT_LEN)?;

    // One snapshot; rendering and sending happen without touching the store
    let orders = state.orders.list()?;
    let document = state.fax_renderer.render(Some(&contact), &orders)?;

    security_log!(
        "INFO",
        "fax_dispatch",
        orders = orders.len(),
        contact = contact.name.as_str()
    );

    state
        .fax
        .send(&state.app_config.phone, &document)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Fax delivery failed");
            AppError::fax_failed(e.to_string())
        })?;

    Ok(Json(true))
}

fn document_response(document: TicketDocument) -> Response {
    (
        [
            (header::CONTENT_TYPE, document.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{}\"", document.filename),
            ),
        ],
        document.bytes,
    )
        .into_response()
}
