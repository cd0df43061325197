//! HTTP API Client
//!
//! One GET per dataset selection against the analytics service.

use gloo_net::http::Request;
use ytviz::dataset::{DatasetKey, EndpointRegistry, Payload, DEFAULT_API_BASE};
use ytviz::error::{FetchError, FetchResult};

/// Local storage key holding a base URL override
const API_URL_KEY: &str = "ytviz_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    normalize_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, &normalize_base(url));
        }
    }
}

/// Drop the local storage override
pub fn reset_api_base() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(API_URL_KEY);
        }
    }
}

/// Registry built from the current base URL
pub fn current_registry() -> EndpointRegistry {
    EndpointRegistry::new(&get_api_base())
}

fn normalize_base(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        url.trim_end_matches('/').to_string()
    }
}

/// Fetch, decode and validate one dataset
pub async fn fetch_dataset(registry: &EndpointRegistry, key: DatasetKey) -> FetchResult<Payload> {
    let url = registry.address(key).to_string();

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;

    if !response.ok() {
        return Err(FetchError::Status {
            url,
            status: response.status(),
        });
    }

    let body = response.binary().await.map_err(|e| FetchError::Transport {
        url: url.clone(),
        message: e.to_string(),
    })?;

    Ok(Payload::decode(key, &body)?)
}
