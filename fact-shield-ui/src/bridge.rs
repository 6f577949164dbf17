use fact_shield_core::{ApiClient, ApiError, ClientConfig, HttpRequest, HttpResponse, Transport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// Browser `fetch` as a [`Transport`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

fn js_err(e: JsValue) -> ApiError {
    ApiError::Transport(format!("{e:?}"))
}

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let window =
            web_sys::window().ok_or_else(|| ApiError::Transport("window not available".into()))?;

        let headers = Headers::new().map_err(js_err)?;
        for (name, value) in &request.headers {
            headers.set(name, value).map_err(js_err)?;
        }
        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        init.set_headers(&headers);
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let req = Request::new_with_str_and_init(&request.url, &init).map_err(js_err)?;
        let resp = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(js_err)?;
        let resp: Response = resp
            .dyn_into()
            .map_err(|_| ApiError::Transport("fetch did not yield a Response".into()))?;
        let text = JsFuture::from(resp.text().map_err(js_err)?)
            .await
            .map_err(js_err)?;

        Ok(HttpResponse {
            status: resp.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}

pub fn api() -> ApiClient<FetchTransport> {
    ApiClient::new(ClientConfig::from_build_env(), FetchTransport)
}

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
