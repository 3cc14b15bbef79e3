//! Server-sent event stream of newly created quotes

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::{Stream, StreamExt};
use std::convert::Infallible;
use std::sync::Arc;

use crate::presentation::rest::{AppState, QuoteResponse};

/// GET /api/exchange/realtime
///
/// The subscription is opened before the response is returned, so any
/// quote created after this handler runs reaches the client. One event per
/// quote: `id` is the quote id and `data` the quote JSON.
pub async fn realtime(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let events = state.service.stream_live().filter_map(|quote| async move {
        let id = quote.id;
        match Event::default()
            .id(id.to_string())
            .json_data(QuoteResponse::from(quote))
        {
            Ok(event) => Some(Ok(event)),
            Err(e) => {
                tracing::warn!(id, error = %e, "failed to encode quote event");
                None
            }
        }
    });

    Sse::new(events).keep_alive(KeepAlive::new().interval(state.keep_alive))
}
