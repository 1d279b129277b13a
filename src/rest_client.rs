use std::time::Instant;

use serde::de::DeserializeOwned;
use tracing::log;

use crate::errors::StatsError;
use crate::models_external::page::PagedRsp;

/// One GET per page, no pooling. The page number is appended to whatever
/// filter parameters the caller passes.
pub async fn get_page<T: DeserializeOwned>(
    url: &str,
    params: &[(&str, String)],
    page: u32,
) -> Result<PagedRsp<T>, StatsError> {
    let before = Instant::now();
    let rsp = reqwest::Client::new()
        .get(url)
        .query(params)
        .query(&[("page", page.to_string())])
        .header("Content-type", "application/json")
        .send()
        .await?;

    let status = rsp.status().as_u16();
    if !(200..300).contains(&status) {
        return Err(StatsError::Connectivity { url: url.to_string(), status });
    }

    let parsed = rsp.json().await?;
    log::info!("[REST] Call {url} page {page} {:.2?}", before.elapsed());
    Ok(parsed)
}
