use futures::future::{FutureExt, LocalBoxFuture};
use price_chart_shared::{ChartError, ChartResult, MarketChart};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Headers, Request, RequestInit, Response};

use crate::source::MarketDataSource;

/// WASM-compatible HTTP client using browser's fetch API
#[derive(Debug, Clone)]
pub struct FetchClient {
    timeout_ms: u32,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self { timeout_ms: 30000 }
    }
}

impl FetchClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }

    /// Fetch a URL and return the body text.
    ///
    /// The request is aborted once `timeout_ms` elapses.
    pub async fn fetch_text(&self, url: &str) -> ChartResult<String> {
        let opts = RequestInit::new();
        opts.set_method("GET");

        let abort_controller = AbortController::new()?;
        opts.set_signal(Some(&abort_controller.signal()));

        let headers = Headers::new()?;
        headers.set("Accept", "application/json")?;
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window = web_sys::window().ok_or_else(|| ChartError::Network {
            message: "No window object available".to_string(),
        })?;

        let abort_on_timeout = Closure::once(move || abort_controller.abort());
        let timeout_handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            abort_on_timeout.as_ref().unchecked_ref(),
            self.timeout_ms as i32,
        )?;

        let fetched = JsFuture::from(window.fetch_with_request(&request)).await;
        window.clear_timeout_with_handle(timeout_handle);
        drop(abort_on_timeout);

        let resp: Response = fetched
            .map_err(|e| network_error(url, e))?
            .dyn_into()
            .map_err(|_| ChartError::Network {
                message: format!("fetch did not return a Response (URL: {url})"),
            })?;

        if !resp.ok() {
            return Err(ChartError::Http {
                status: resp.status(),
                url: url.to_string(),
            });
        }

        let text = JsFuture::from(resp.text()?)
            .await
            .map_err(|e| network_error(url, e))?;

        text.as_string().ok_or_else(|| ChartError::Parse {
            message: "Response body is not text".to_string(),
            offset: None,
        })
    }

    /// Fetch JSON data from a URL
    pub async fn fetch_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> ChartResult<T> {
        let body = self.fetch_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl MarketDataSource for FetchClient {
    fn fetch_market_chart<'a>(
        &'a self,
        url: &'a str,
    ) -> LocalBoxFuture<'a, ChartResult<MarketChart>> {
        self.fetch_json::<MarketChart>(url).boxed_local()
    }
}

fn network_error(url: &str, err: JsValue) -> ChartError {
    let reason = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"));
    ChartError::Network {
        message: format!("{reason} (URL: {url})"),
    }
}
