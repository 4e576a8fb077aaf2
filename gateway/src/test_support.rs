//! In-memory fakes for the four gateway seams.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

use serde_json::Value;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::request::{Body, Method};
use crate::session::MemorySessionStore;
use crate::transport::{Navigator, OutboundRequest, Progress, RawResponse, Timer, Transport};

/// What the fake transport saw for one submission.
#[derive(Debug, Clone)]
pub struct Sent {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Body,
}

impl Sent {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Default)]
pub struct FakeTransport {
    replies: RefCell<VecDeque<Result<RawResponse, GatewayError>>>,
    pub sent: RefCell<Vec<Sent>>,
}

impl FakeTransport {
    pub fn reply(&self, status: u16, body: &Value) {
        self.replies.borrow_mut().push_back(Ok(RawResponse::new(status, body.to_string())));
    }

    pub fn fail(&self, error: GatewayError) {
        self.replies.borrow_mut().push_back(Err(error));
    }

    pub fn count(&self) -> usize {
        self.sent.borrow().len()
    }

    pub fn last(&self) -> Sent {
        self.sent.borrow().last().cloned().expect("a request was sent")
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: &OutboundRequest<'_>, progress: Option<Progress<'_>>) -> Result<RawResponse, GatewayError> {
        self.sent.borrow_mut().push(Sent {
            method: request.method,
            url: request.url.clone(),
            headers: request.headers.clone(),
            body: request.body.clone(),
        });
        if let Some(report) = progress {
            report(0);
            report(100);
        }
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Network("no scripted reply".into())))
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.borrow_mut().push(route.to_owned());
    }
}

#[derive(Default)]
pub struct RecordingTimer {
    pub sleeps: RefCell<Vec<Duration>>,
}

impl Timer for RecordingTimer {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
    }
}

pub type TestGateway = Gateway<FakeTransport, MemorySessionStore, RecordingNavigator, RecordingTimer>;

pub fn gateway() -> TestGateway {
    Gateway::new(
        GatewayConfig::new("http://backend.test"),
        FakeTransport::default(),
        MemorySessionStore::new(),
        RecordingNavigator::default(),
        RecordingTimer::default(),
    )
}
