//! Dashboard endpoints: the HTML page, the JSON view, refresh status, and
//! the SSE event stream.

use std::convert::Infallible;
use std::fmt::Write as _;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use futures::Stream;
use serde::Deserialize;
use sokodash_core::dashboard::{DashboardBody, TableView};
use tokio::sync::broadcast;

use crate::error::{ApiError, ApiResult};
use crate::refresh::{DashboardSnapshot, RefreshStatus};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/status", get(get_status))
        .route("/api/events", get(sse_events))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<usize>,
}

async fn dashboard_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let snapshot = state.snapshot_rx.borrow().clone();
    Html(render_page(
        state.seller_id,
        state.refresh_interval,
        snapshot.as_ref(),
        query.page.unwrap_or(1),
    ))
}

async fn get_dashboard(State(state): State<AppState>) -> ApiResult<Json<DashboardSnapshot>> {
    let snapshot = state.snapshot_rx.borrow().clone();
    snapshot
        .map(Json)
        .ok_or_else(|| ApiError::NotReady("no refresh tick has completed yet".to_string()))
}

async fn get_status(State(state): State<AppState>) -> Json<RefreshStatus> {
    Json(state.status_rx.borrow().clone())
}

async fn sse_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let receiver = state.event_bus.subscribe();
    let stream = futures::stream::unfold(receiver, |mut receiver| async move {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    let sse_event = Event::default()
                        .event(event.name)
                        .data(event.payload.to_string());
                    return Some((Ok(sse_event), receiver));
                }
                // Lagged subscribers skip ahead; only the latest view matters.
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    });
    Sse::new(stream).keep_alive(KeepAlive::default())
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML rendering
// ─────────────────────────────────────────────────────────────────────────────

const HEADER_STYLE: &str = "background-color: purple; color: white; font-weight: bold; text-align: center; padding: 5px";
const CELL_STYLE: &str = "text-align: center; padding: 5px";

fn render_page(
    seller_id: i64,
    refresh_interval: Duration,
    snapshot: Option<&DashboardSnapshot>,
    page: usize,
) -> String {
    let refresh_secs = refresh_interval.as_secs().max(1);
    let title = format!("Seller Dashboard - Seller {seller_id}");

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<meta http-equiv=\"refresh\" content=\"{refresh_secs}\">");
    let _ = writeln!(html, "<title>{title}</title>");
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<h2>{title}</h2>");

    match snapshot {
        Some(snapshot) => {
            let _ = writeln!(
                html,
                "<div class=\"alert\">{}</div>",
                escape_html(&snapshot.view.wallet_banner)
            );
            html.push_str("<h4>Your Packages</h4>\n");
            match &snapshot.view.body {
                DashboardBody::Placeholder { message } => {
                    let _ = writeln!(html, "<div>{}</div>", escape_html(message));
                }
                DashboardBody::Table(table) => render_table(&mut html, table, page),
            }
        }
        None => {
            html.push_str("<div>Dashboard is warming up; no data fetched yet.</div>\n");
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_table(html: &mut String, table: &TableView, page: usize) {
    html.push_str("<table>\n<thead>\n<tr>");
    for column in &table.columns {
        let _ = write!(html, "<th style=\"{HEADER_STYLE}\">{}</th>", escape_html(column));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in table.page(page) {
        match &row.background {
            Some(color) => {
                let _ = write!(html, "<tr style=\"background-color: {color}\">");
            }
            None => html.push_str("<tr>"),
        }
        let courier = row.courier_id.map(|id| id.to_string()).unwrap_or_default();
        let _ = write!(html, "<td style=\"{CELL_STYLE}\">{}</td>", row.package_id);
        let _ = write!(html, "<td style=\"{CELL_STYLE}\">{}</td>", row.buyer_id);
        let _ = write!(html, "<td style=\"{CELL_STYLE}\">{courier}</td>");
        let _ = write!(html, "<td style=\"{CELL_STYLE}\">{}</td>", row.fc_id);
        let _ = write!(
            html,
            "<td style=\"{CELL_STYLE}\">{}</td>",
            escape_html(row.status.as_str())
        );
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");

    let page_count = table.page_count();
    if page_count > 1 {
        let shown = page.clamp(1, page_count);
        let _ = writeln!(html, "<p>Page {shown} of {page_count}</p>");
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
