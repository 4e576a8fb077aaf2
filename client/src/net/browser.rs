//! `fetch`/`XMLHttpRequest`/`localStorage` implementations of the gateway seams.
//!
//! ERROR HANDLING
//! ==============
//! Every JS failure is mapped onto a `GatewayError` so pages only ever deal
//! with one error type; nothing here panics during hydration.

use std::time::Duration;

use futures::StreamExt;
use futures::channel::mpsc;
use futures::future::{Either, select};
use gateway::transport::{Navigator, OutboundRequest, Progress, RawResponse, Timer, Transport};
use gateway::upload::{DocumentFile, progress_percent};
use gateway::{Body, FormPart, Gateway, GatewayConfig, GatewayError, Method, SessionStore};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

pub type BrowserGateway = Gateway<FetchTransport, LocalStorageSessions, LocationNavigator, BrowserTimer>;

/// Gateway wired to the browser, configured from the build environment.
pub fn gateway() -> BrowserGateway {
    Gateway::new(
        GatewayConfig::from_build_env(),
        FetchTransport,
        LocalStorageSessions,
        LocationNavigator,
        BrowserTimer,
    )
}

fn js_error(context: &str, err: &JsValue) -> GatewayError {
    GatewayError::Network(format!("{context}: {err:?}"))
}

// =============================================================================
// TRANSPORT
// =============================================================================

/// Browser transport. JSON and empty bodies go through `fetch`; multipart
/// uploads go through `XMLHttpRequest` so upload progress can be observed.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

fn method(method: Method) -> gloo_net::http::Method {
    match method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Put => gloo_net::http::Method::PUT,
        Method::Delete => gloo_net::http::Method::DELETE,
    }
}

fn timed_out(request: &OutboundRequest<'_>) -> GatewayError {
    #[allow(clippy::cast_possible_truncation)]
    let after_ms = request.timeout.as_millis() as u64;
    GatewayError::Timeout { after_ms }
}

fn form_data(parts: &[FormPart]) -> Result<web_sys::FormData, GatewayError> {
    let form = web_sys::FormData::new().map_err(|e| js_error("form data", &e))?;
    for part in parts {
        match part {
            FormPart::Text { name, value } => {
                form.append_with_str(name, value).map_err(|e| js_error("form field", &e))?;
            }
            FormPart::File { name, file_name, mime, bytes } => {
                let chunks = js_sys::Array::new();
                chunks.push(&js_sys::Uint8Array::from(bytes.as_slice()));
                let options = web_sys::BlobPropertyBag::new();
                if let Some(mime) = mime {
                    options.set_type(mime);
                }
                let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&chunks, &options)
                    .map_err(|e| js_error("file blob", &e))?;
                form.append_with_blob_and_filename(name, &blob, file_name)
                    .map_err(|e| js_error("file field", &e))?;
            }
        }
    }
    Ok(form)
}

async fn send_fetch(request: &OutboundRequest<'_>) -> Result<RawResponse, GatewayError> {
    let mut builder = gloo_net::http::RequestBuilder::new(&request.url).method(method(request.method));
    for (key, value) in &request.headers {
        builder = builder.header(key, value);
    }
    let outgoing = match request.body {
        Body::Json(value) => builder.body(value.to_string()),
        Body::Empty | Body::Multipart(_) => builder.build(),
    }
    .map_err(|e| GatewayError::Network(e.to_string()))?;

    let exchange = Box::pin(async move {
        let response = outgoing.send().await.map_err(|e| GatewayError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(format!("reading response body: {e}")))?;
        Ok::<_, GatewayError>(RawResponse::new(status, body))
    });
    let deadline = Box::pin(gloo_timers::future::sleep(request.timeout));

    match select(exchange, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(timed_out(request)),
    }
}

/// What an in-flight `XMLHttpRequest` reported.
#[derive(Debug, Clone, Copy)]
enum XhrEvent {
    Progress(u8),
    Loaded,
    Failed,
    TimedOut,
}

fn xhr_signal(tx: &mpsc::UnboundedSender<XhrEvent>, event: XhrEvent) -> Closure<dyn FnMut()> {
    let tx = tx.clone();
    Closure::new(move || {
        let _ = tx.unbounded_send(event);
    })
}

async fn send_xhr(
    request: &OutboundRequest<'_>,
    parts: &[FormPart],
    progress: Option<Progress<'_>>,
) -> Result<RawResponse, GatewayError> {
    let form = form_data(parts)?;
    let xhr = web_sys::XmlHttpRequest::new().map_err(|e| js_error("xhr", &e))?;
    xhr.open_with_async(request.method.as_str(), &request.url, true)
        .map_err(|e| js_error("xhr open", &e))?;
    for (key, value) in &request.headers {
        xhr.set_request_header(key, value).map_err(|e| js_error("xhr header", &e))?;
    }
    #[allow(clippy::cast_possible_truncation)]
    xhr.set_timeout(request.timeout.as_millis().min(u128::from(u32::MAX)) as u32);
    let upload = xhr.upload().map_err(|e| js_error("xhr upload", &e))?;

    let (tx, mut rx) = mpsc::unbounded::<XhrEvent>();
    let on_progress = {
        let tx = tx.clone();
        Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |event: web_sys::ProgressEvent| {
            if !event.length_computable() {
                return;
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let percent = progress_percent(event.loaded() as u64, event.total() as u64);
            if let Some(percent) = percent {
                let _ = tx.unbounded_send(XhrEvent::Progress(percent));
            }
        })
    };
    let on_load = xhr_signal(&tx, XhrEvent::Loaded);
    let on_error = xhr_signal(&tx, XhrEvent::Failed);
    let on_timeout = xhr_signal(&tx, XhrEvent::TimedOut);

    upload.set_onprogress(Some(on_progress.as_ref().unchecked_ref()));
    xhr.set_onload(Some(on_load.as_ref().unchecked_ref()));
    xhr.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    xhr.set_onabort(Some(on_error.as_ref().unchecked_ref()));
    xhr.set_ontimeout(Some(on_timeout.as_ref().unchecked_ref()));

    let outcome = match xhr.send_with_opt_form_data(Some(&form)) {
        Ok(()) => loop {
            match rx.next().await {
                Some(XhrEvent::Progress(percent)) => {
                    if let Some(report) = progress {
                        report(percent);
                    }
                }
                Some(done) => break done,
                None => break XhrEvent::Failed,
            }
        },
        Err(err) => {
            log::warn!("xhr send failed: {err:?}");
            XhrEvent::Failed
        }
    };

    // Handlers must not outlive the closures they point at.
    upload.set_onprogress(None);
    xhr.set_onload(None);
    xhr.set_onerror(None);
    xhr.set_onabort(None);
    xhr.set_ontimeout(None);

    match outcome {
        XhrEvent::Loaded => {
            let status = xhr.status().map_err(|e| js_error("xhr status", &e))?;
            let body = xhr
                .response_text()
                .map_err(|e| js_error("reading response body", &e))?
                .unwrap_or_default();
            Ok(RawResponse::new(status, body))
        }
        XhrEvent::TimedOut => Err(timed_out(request)),
        XhrEvent::Failed | XhrEvent::Progress(_) => {
            Err(GatewayError::Network(format!("{} {} failed", request.method, request.url)))
        }
    }
}

impl Transport for FetchTransport {
    async fn send(
        &self,
        request: &OutboundRequest<'_>,
        progress: Option<Progress<'_>>,
    ) -> Result<RawResponse, GatewayError> {
        if let Some(report) = progress {
            report(0);
        }
        match request.body {
            Body::Multipart(parts) => send_xhr(request, parts, progress).await,
            Body::Empty | Body::Json(_) => send_fetch(request).await,
        }
    }
}

// =============================================================================
// SESSIONS
// =============================================================================

/// Session slots kept in `window.localStorage` under `user` / `admin`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageSessions;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalStorageSessions {
    fn read(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, raw: &str) -> Result<(), GatewayError> {
        let storage = storage().ok_or_else(|| GatewayError::Storage("localStorage unavailable".to_owned()))?;
        storage
            .set_item(key, raw)
            .map_err(|e| GatewayError::Storage(format!("{e:?}")))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
}

// =============================================================================
// NAVIGATION / TIMERS
// =============================================================================

/// Full-page navigation via `window.location`. Staying on the current
/// path is a no-op so a failed login does not reload its own form.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, route: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        if location.pathname().is_ok_and(|path| path == route) {
            return;
        }
        if let Err(err) = location.set_href(route) {
            log::warn!("navigation to {route} failed: {err:?}");
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

// =============================================================================
// FILES
// =============================================================================

/// Read a picked `File` into a validated upload.
pub async fn read_document(file: &web_sys::File) -> Result<DocumentFile, GatewayError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| GatewayError::Validation(format!("Could not read file: {e:?}")))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let mime = Some(file.type_()).filter(|m| !m.is_empty());
    DocumentFile::new(&file.name(), mime, bytes)
}
