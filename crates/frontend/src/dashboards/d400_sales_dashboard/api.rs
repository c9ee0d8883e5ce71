use std::cell::Cell;
use std::rc::Rc;

use contracts::dashboards::d400_sales_dashboard::{
    plan_for_page, FetchPlan, FilterOptionsDto, SalesEndpoint, SalesListParams, SalesListResponse,
    SalesPage, SalesQuery, DEFAULT_TIMEOUT_MS, FILTER_OPTIONS_PATH,
};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use thiserror::Error;
use web_sys::AbortController;

use crate::shared::api_utils::api_url;

/// Why a request to the sales backend produced no data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("server error: HTTP {0}")]
    Server(u16),
    #[error("HTTP error: {0}")]
    Http(u16),
    #[error("backend error: {0}")]
    Backend(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to encode query: {0}")]
    Encode(String),
}

impl FetchError {
    /// Text of the blocking notification shown when loading `page` failed
    pub fn user_message(&self, page: u32) -> String {
        match self {
            FetchError::Timeout(_) => format!(
                "Request for page {} timed out. The server is processing a large amount of data. \
                 Please try a smaller page number or use filters.",
                page
            ),
            FetchError::Server(_) => format!(
                "Server error while loading page {}. The page number might be too large.",
                page
            ),
            FetchError::Http(status) => {
                format!("Failed to load page {} (HTTP {}).", page, status)
            }
            FetchError::Backend(message) => {
                format!("Could not load page {}: {}", page, message)
            }
            FetchError::Network(_) => format!(
                "Could not reach the sales server while loading page {}. \
                 Check your connection and try again.",
                page
            ),
            FetchError::Decode(_) => {
                format!("Received an unreadable response while loading page {}.", page)
            }
            FetchError::Encode(_) => {
                format!("Could not build the request for page {}.", page)
            }
        }
    }
}

/// Path and query string for a listing request, plus the plan it follows
pub fn sales_request_path(query: &SalesQuery) -> Result<(String, FetchPlan), FetchError> {
    let plan = plan_for_page(query.page);
    let params = SalesListParams::from_query(query).with_plan(&plan);
    let query_string =
        serde_qs::to_string(&params).map_err(|e| FetchError::Encode(e.to_string()))?;
    Ok((format!("{}?{}", plan.endpoint.path(), query_string), plan))
}

/// Turns status and body of a listing response into a page or an error.
///
/// 5xx is a server error regardless of body. Other non-2xx statuses surface
/// the backend's `error` text when it sent one.
pub fn classify_response(
    status: u16,
    body: &str,
    requested_page: u32,
) -> Result<SalesPage, FetchError> {
    if status >= 500 {
        return Err(FetchError::Server(status));
    }

    let parsed = serde_json::from_str::<SalesListResponse>(body);
    if !(200..300).contains(&status) {
        let backend_error = parsed
            .ok()
            .and_then(|r| r.error)
            .filter(|e| !e.is_empty());
        return Err(match backend_error {
            Some(message) => FetchError::Backend(message),
            None => FetchError::Http(status),
        });
    }

    let response = parsed.map_err(|e| FetchError::Decode(e.to_string()))?;
    response
        .into_page(requested_page)
        .map_err(FetchError::Backend)
}

/// GET `url`, aborting after `timeout_ms`. Returns status and body text.
async fn get_with_timeout(url: &str, timeout_ms: u32) -> Result<(u16, String), FetchError> {
    let controller = AbortController::new()
        .map_err(|e| FetchError::Network(format!("AbortController unavailable: {:?}", e)))?;
    let timed_out = Rc::new(Cell::new(false));

    let timer = {
        let controller = controller.clone();
        let timed_out = Rc::clone(&timed_out);
        Timeout::new(timeout_ms, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    let signal = controller.signal();
    let result = Request::get(url).abort_signal(Some(&signal)).send().await;
    let response = match result {
        Ok(response) => response,
        Err(_) if timed_out.get() => return Err(FetchError::Timeout(timeout_ms)),
        Err(e) => return Err(FetchError::Network(e.to_string())),
    };

    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(_) if timed_out.get() => return Err(FetchError::Timeout(timeout_ms)),
        Err(e) => return Err(FetchError::Decode(e.to_string())),
    };
    drop(timer);

    Ok((status, body))
}

/// Load one page of sales records
pub async fn fetch_sales(query: &SalesQuery) -> Result<SalesPage, FetchError> {
    let (path, plan) = sales_request_path(query)?;
    let url = api_url(&path);
    if plan.forced_sort.is_some() {
        log::info!("Using optimized endpoint for page {}", plan.page);
    }
    log::debug!("GET {} (timeout {} ms)", url, plan.timeout_ms);

    let (status, body) = get_with_timeout(&url, plan.timeout_ms).await?;
    classify_response(status, &body, plan.page)
}

/// Load the option lists for the filter selects
pub async fn fetch_filter_options() -> Result<FilterOptionsDto, FetchError> {
    let url = api_url(FILTER_OPTIONS_PATH);
    let (status, body) = get_with_timeout(&url, DEFAULT_TIMEOUT_MS).await?;
    if !(200..300).contains(&status) {
        return Err(FetchError::Http(status));
    }
    serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Dataset-wide record count, read from the pagination block of a one-row page
pub async fn fetch_dataset_total() -> Result<Option<u64>, FetchError> {
    let url = api_url(&format!("{}?page=1&limit=1", SalesEndpoint::Standard.path()));
    let (status, body) = get_with_timeout(&url, DEFAULT_TIMEOUT_MS).await?;
    let page = classify_response(status, &body, 1)?;
    Ok(page.pagination.map(|p| p.total_records))
}
