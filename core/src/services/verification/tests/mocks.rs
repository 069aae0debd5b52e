//! Mock implementations for testing the verification controller

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use crate::domain::entities::ChannelOption;
use crate::domain::value_objects::{CodeResponse, SubmitResponse};
use crate::errors::GatewayError;
use crate::services::verification::traits::{ChannelOptionSource, VerificationGateway};
use crate::services::verification::types::{CodeRequest, SubmitRequest};

// Gateway that replays scripted responses in order
#[derive(Default)]
pub struct MockGateway {
    pub code_responses: Mutex<VecDeque<Result<CodeResponse, GatewayError>>>,
    pub submit_responses: Mutex<VecDeque<Result<SubmitResponse, GatewayError>>>,
    pub requests: Mutex<Vec<CodeRequest>>,
    pub submissions: Mutex<Vec<SubmitRequest>>,
    pub request_calls: AtomicUsize,
    pub submit_calls: AtomicUsize,
    // When set, calls park until `release` is notified
    pub hold: Option<Arc<Hold>>,
}

pub struct Hold {
    pub entered: Notify,
    pub release: Notify,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held() -> (Self, Arc<Hold>) {
        let hold = Arc::new(Hold {
            entered: Notify::new(),
            release: Notify::new(),
        });
        let gateway = Self {
            hold: Some(hold.clone()),
            ..Self::default()
        };
        (gateway, hold)
    }

    pub fn with_code_response(self, response: Result<CodeResponse, GatewayError>) -> Self {
        self.code_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn with_submit_response(self, response: Result<SubmitResponse, GatewayError>) -> Self {
        self.submit_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn request_calls(&self) -> usize {
        self.request_calls.load(Ordering::SeqCst)
    }

    pub fn submit_calls(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CodeRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn last_submission(&self) -> Option<SubmitRequest> {
        self.submissions.lock().unwrap().last().cloned()
    }

    async fn wait_for_release(&self) {
        if let Some(hold) = &self.hold {
            hold.entered.notify_one();
            hold.release.notified().await;
        }
    }
}

#[async_trait]
impl VerificationGateway for MockGateway {
    type Context = ();
    type Submission = ();

    async fn request_code(
        &self,
        request: &CodeRequest,
        _context: &(),
    ) -> Result<CodeResponse, GatewayError> {
        self.request_calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        self.wait_for_release().await;
        self.code_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(CodeResponse::sent(None)))
    }

    async fn submit(
        &self,
        request: &SubmitRequest,
        _context: &(),
        _submission: &(),
    ) -> Result<SubmitResponse, GatewayError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        self.submissions.lock().unwrap().push(request.clone());
        self.wait_for_release().await;
        self.submit_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(SubmitResponse::accepted()))
    }
}

// Channel source returning a fixed list
pub struct MockChannelSource {
    pub options: Vec<ChannelOption>,
}

impl MockChannelSource {
    pub fn sms_and_whatsapp() -> Self {
        Self {
            options: vec![
                ChannelOption::new("SMS", "SMS"),
                ChannelOption::new("WhatsApp", "WhatsApp"),
            ],
        }
    }

    pub fn empty() -> Self {
        Self { options: Vec::new() }
    }
}

#[async_trait]
impl ChannelOptionSource for MockChannelSource {
    async fn fetch_options(&self) -> Vec<ChannelOption> {
        self.options.clone()
    }
}
