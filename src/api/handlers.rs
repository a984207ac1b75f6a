use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;

use crate::data_models::OutboundResult;
use crate::error::ProxyError;
use crate::proxy;
use crate::upstream::Fetcher;

use super::models::LookupQuery;

pub async fn lookup_handler<F: Fetcher>(
    State(fetcher): State<Arc<F>>,
    Query(params): Query<LookupQuery>,
) -> Result<Json<OutboundResult>, ProxyError> {
    let result = proxy::lookup(fetcher.as_ref(), params.q.as_deref()).await?;
    Ok(Json(result))
}
