use crate::data_models::OutboundResult;
use crate::error::ProxyError;
use crate::target::{build_target, normalize_query};
use crate::upstream::Fetcher;

/// Runs one lookup: validate `q`, build the target, fetch it once and shape
/// the outcome. A blank query never reaches the fetcher.
pub async fn lookup<F: Fetcher>(fetcher: &F, q: Option<&str>) -> Result<OutboundResult, ProxyError> {
    let Some(query) = normalize_query(q) else {
        tracing::warn!("rejected lookup without q");
        return Err(ProxyError::MissingQuery);
    };
    let target = build_target(&query);

    match fetcher.fetch(&target).await {
        Ok(page) => {
            let result = OutboundResult::new(target, page);
            tracing::info!(
                url = %result.target,
                status = result.status,
                length = result.length,
                "upstream responded"
            );
            Ok(result)
        }
        Err(e) => {
            tracing::error!(url = %target, "upstream fetch failed: {:#}", e);
            Err(ProxyError::Upstream {
                message: format!("{:#}", e),
                target,
            })
        }
    }
}
