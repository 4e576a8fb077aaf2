//! `reqwest` + `tokio` implementations of the gateway's transport and timer.

use std::time::Duration;

use gateway::transport::{OutboundRequest, Progress, RawResponse, Timer, Transport};
use gateway::{Body, FormPart, GatewayError, Method};
use reqwest::multipart::{Form, Part};

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn multipart(parts: &[FormPart]) -> Result<Form, GatewayError> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name.clone(), value.clone()),
            FormPart::File { name, file_name, mime, bytes } => {
                let mut file = Part::bytes(bytes.clone()).file_name(file_name.clone());
                if let Some(mime) = mime {
                    file = file.mime_str(mime).map_err(|e| GatewayError::Validation(e.to_string()))?;
                }
                form.part(name.clone(), file)
            }
        };
    }
    Ok(form)
}

fn timeout_ms(timeout: Duration) -> u64 {
    u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX)
}

impl Transport for ReqwestTransport {
    async fn send(
        &self,
        request: &OutboundRequest<'_>,
        progress: Option<Progress<'_>>,
    ) -> Result<RawResponse, GatewayError> {
        let mut builder = self.client.request(method(request.method), &request.url).timeout(request.timeout);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        builder = match request.body {
            Body::Empty => builder,
            Body::Json(value) => builder.body(value.to_string()),
            Body::Multipart(parts) => builder.multipart(multipart(parts)?),
        };

        if let Some(report) = progress {
            report(0);
        }
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout { after_ms: timeout_ms(request.timeout) }
            } else {
                GatewayError::Network(e.to_string())
            }
        })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| GatewayError::Network(e.to_string()))?;
        if let Some(report) = progress {
            report(100);
        }
        tracing::debug!(status, bytes = body.len(), "response received");
        Ok(RawResponse::new(status, body))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methods_map_one_to_one() {
        assert_eq!(method(Method::Get), reqwest::Method::GET);
        assert_eq!(method(Method::Delete), reqwest::Method::DELETE);
    }

    #[test]
    fn bad_mime_is_a_validation_error() {
        let parts = vec![FormPart::File {
            name: "file".into(),
            file_name: "a.txt".into(),
            mime: Some("not a mime".into()),
            bytes: vec![1],
        }];
        assert!(matches!(multipart(&parts), Err(GatewayError::Validation(_))));
    }

    #[test]
    fn timeout_reports_milliseconds() {
        assert_eq!(timeout_ms(Duration::from_secs(60)), 60_000);
    }
}
