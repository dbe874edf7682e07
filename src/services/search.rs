use log::debug;

use crate::client::ApiClient;
use crate::error::ForkfulError;
use crate::state::{AppState, RequestToken, SearchResultItem};

/// Run a search and store its result set, resetting pagination to page 1.
///
/// Fails with `Validation` on an empty query. On any fetch error the previous
/// results are left untouched. Stale responses (superseded by a newer search)
/// are discarded.
pub async fn load_search_results(
    state: &mut AppState,
    client: &ApiClient,
    query: &str,
) -> Result<(), ForkfulError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ForkfulError::Validation("search query is empty".to_string()));
    }

    let token = state.begin_search_load();
    let results = client.search(query).await?;
    apply_search_results(state, token, query, results);
    Ok(())
}

/// Install a search response, unless a newer search has started since `token`
/// was issued. Returns whether the response was applied.
pub(crate) fn apply_search_results(
    state: &mut AppState,
    token: RequestToken,
    query: &str,
    results: Vec<SearchResultItem>,
) -> bool {
    if !state.search_token_current(token) {
        debug!("discarding stale search response for {query:?}");
        return false;
    }
    debug!("search {query:?} returned {} results", results.len());
    state.search.query = query.to_string();
    state.search.results = results;
    state.search.page = 1;
    true
}

/// Return one page of the current result set and move the cursor there.
///
/// `page` defaults to the current page. The slice is clamped to the array
/// bounds, so an out-of-range page yields an empty or partial slice rather
/// than an error.
pub fn search_results_page(state: &mut AppState, page: Option<usize>) -> &[SearchResultItem] {
    let page = page.unwrap_or(state.search.page).max(1);
    state.search.page = page;

    let per_page = state.search.results_per_page;
    let start = (page - 1).saturating_mul(per_page).min(state.search.results.len());
    let end = page.saturating_mul(per_page).min(state.search.results.len());
    &state.search.results[start..end]
}
