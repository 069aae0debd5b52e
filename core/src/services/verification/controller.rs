//! Verification controller: requests a one-time code and gates the dependent action on it

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;

use ao_shared::phone::{
    is_plausible_phone, mask_account_phone, mask_phone_number, meets_min_length,
};
use ao_shared::validation::{validators, FieldError};
use ao_shared::MessageKey;

use super::config::FlowPolicy;
use super::countdown::{Countdown, TICK_PERIOD};
use super::traits::{ChannelOptionSource, FlowFields, VerificationGateway};
use super::types::{CodeRequest, RequestOutcome, SubmitOutcome, SubmitRequest};
use crate::domain::entities::{Channel, FlowKind, SessionStatus, VerificationSession};
use crate::domain::value_objects::{
    CodeResponse, Notice, SessionError, SubmitResponse, CODE_FIELD, DESTINATION_FIELD, ROOT_FIELD,
};
use crate::errors::{FlowError, FlowResult, GatewayError};

type VerifiedHook = Box<dyn Fn(FlowKind) + Send + Sync>;

/// Controller for one verification session inside a hosting form
///
/// The session lives in a `watch` channel so hosts can observe every change
/// (countdown, status, errors) through [`subscribe`](Self::subscribe).
/// Operations take `&self`; the status doubles as the "control disabled while
/// pending" guard, so a second request or submit while one is in flight is
/// rejected with [`FlowError::Busy`].
pub struct VerificationController<G: VerificationGateway> {
    gateway: Arc<G>,
    policy: FlowPolicy,
    state: Arc<watch::Sender<VerificationSession>>,
    countdown: Mutex<Countdown>,
    /// Bumped on teardown so late responses are dropped
    generation: AtomicU64,
    tick_period: Duration,
    on_verified: Option<VerifiedHook>,
}

impl<G: VerificationGateway> VerificationController<G> {
    /// Create a controller for a freshly mounted form
    pub fn new(gateway: Arc<G>, policy: FlowPolicy) -> Self {
        let (state, _) = watch::channel(VerificationSession::new(policy.kind));
        Self {
            gateway,
            policy,
            state: Arc::new(state),
            countdown: Mutex::new(Countdown::new()),
            generation: AtomicU64::new(0),
            tick_period: TICK_PERIOD,
            on_verified: None,
        }
    }

    /// Run `hook` after the dependent action succeeds
    pub fn on_verified(mut self, hook: impl Fn(FlowKind) + Send + Sync + 'static) -> Self {
        self.on_verified = Some(Box::new(hook));
        self
    }

    pub fn policy(&self) -> &FlowPolicy {
        &self.policy
    }

    /// Current session state
    pub fn snapshot(&self) -> VerificationSession {
        self.state.borrow().clone()
    }

    /// Observe every change to the session
    pub fn subscribe(&self) -> watch::Receiver<VerificationSession> {
        self.state.subscribe()
    }

    /// Whether the request button should be enabled
    pub fn can_request_code(&self) -> bool {
        let session = self.state.borrow();
        session.can_request_code(self.policy.channel_required)
            && self.destination_error(&session.destination).is_none()
    }

    /// Whether the submit button should be enabled
    pub fn can_submit(&self) -> bool {
        self.state.borrow().can_submit()
    }

    /// Whether a countdown timer is alive
    pub fn countdown_running(&self) -> bool {
        self.countdown().is_running()
    }

    /// Load the delivery channels offered by the backend
    ///
    /// An empty result is a valid degraded state: no channel can be picked and
    /// requesting a code fails the channel check.
    pub async fn load_channel_options(&self, source: &dyn ChannelOptionSource) -> usize {
        let options = source.fetch_options().await;
        let count = options.len();
        if count == 0 {
            tracing::warn!(
                flow = %self.policy.kind,
                event = "channel_options_empty",
                "No delivery channel options available"
            );
        }
        self.state.send_modify(|s| s.channel_options = options);
        count
    }

    /// Pick the delivery channel
    pub fn select_channel(&self, channel: impl Into<Channel>) -> FlowResult<()> {
        let channel = channel.into();
        let mut result = Ok(());
        self.state.send_modify(|s| {
            let offered = s.channel_options.is_empty()
                || s.channel_options.iter().any(|opt| opt.channel == channel);
            if offered {
                s.channel = Some(channel);
                s.clear_field_error(ROOT_FIELD);
            } else {
                let error = FieldError::new(ROOT_FIELD, MessageKey::SelectOtpMethod);
                s.set_field_errors(std::slice::from_ref(&error));
                result = Err(FlowError::Validation(vec![error]));
            }
        });
        result
    }

    /// Store the phone number typed by the user
    pub fn set_destination(&self, destination: impl Into<String>) {
        let destination = destination.into();
        self.state.send_modify(|s| {
            s.destination = destination;
            s.clear_field_error(DESTINATION_FIELD);
        });
    }

    /// Store the code typed by the user
    pub fn set_entered_code(&self, code: impl Into<String>) {
        let code = code.into();
        self.state.send_modify(|s| {
            s.entered_code = code;
            s.clear_field_error(CODE_FIELD);
        });
    }

    /// Request a code to the selected channel and start the resend countdown
    pub async fn request_code(&self, context: &G::Context) -> FlowResult<RequestOutcome> {
        let generation = self.generation.load(Ordering::SeqCst);
        let session = self.snapshot();

        if session.status.is_pending() {
            return Err(FlowError::Busy);
        }

        let mut errors = context.validate();
        if let Some(message) = self.destination_error(&session.destination) {
            errors.add(DESTINATION_FIELD, message);
        }
        if errors.is_empty() && self.policy.channel_required && session.channel.is_none() {
            errors.add(ROOT_FIELD, MessageKey::SelectOtpMethod);
        }
        if let Err(errors) = errors.into_result() {
            return Err(self.reject_locally(errors));
        }

        let request = CodeRequest {
            destination: self
                .policy
                .requires_destination()
                .then(|| session.destination.trim().to_string()),
            channel: session.channel.clone(),
        };

        // Claim the session under the watch lock; a concurrent caller sees Requesting
        let mut claim = Err(FlowError::Busy);
        self.state.send_if_modified(|s| {
            if s.status.is_pending() {
                return false;
            }
            if s.seconds_remaining > 0 {
                claim = Err(FlowError::CountdownActive {
                    seconds_remaining: s.seconds_remaining,
                });
                return false;
            }
            claim = Ok(s.status);
            s.status = SessionStatus::Requesting;
            s.clear_errors();
            s.notice = None;
            true
        });
        let prior_status = claim?;

        tracing::info!(
            flow = %self.policy.kind,
            session_id = %session.id,
            destination = %mask_phone_number(&session.destination),
            channel = request.channel.as_ref().map(Channel::as_str).unwrap_or("-"),
            event = "code_requested",
            "Requesting verification code"
        );

        let result = self.gateway.request_code(&request, context).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(
                flow = %self.policy.kind,
                event = "stale_response_discarded",
                "Discarding request-code response for a torn down session"
            );
            return Err(FlowError::Discarded);
        }

        match result {
            Ok(response) if response.success => {
                let seconds = self.policy.expiry_or_fallback(response.expires_in);
                Ok(self.code_sent(response, seconds, false))
            }
            Ok(response) => match response.expires_in {
                Some(seconds) if self.policy.soft_success_on_already_sent => {
                    Ok(self.code_sent(response, seconds, true))
                }
                _ => {
                    let notice =
                        Notice::server_or(response.message.as_deref(), self.policy.request_failed);
                    Err(self.request_failed(prior_status, FlowError::Application(notice)))
                }
            },
            Err(err) => match err.expires_in() {
                Some(seconds) if self.policy.soft_success_on_already_sent => {
                    let response = CodeResponse::rejected(None, Some(seconds));
                    Ok(self.code_sent(response, seconds, true))
                }
                _ => {
                    let flow_error = self.gateway_failure(&err, self.policy.request_failed);
                    Err(self.request_failed(prior_status, flow_error))
                }
            },
        }
    }

    /// Advance the countdown by one second; returns the remaining seconds
    ///
    /// The interval task calls the same decrement; reaching zero stops it.
    pub fn tick(&self) -> u32 {
        let mut remaining = 0;
        self.state.send_modify(|s| remaining = s.tick());
        if remaining == 0 {
            self.countdown().cancel();
        }
        remaining
    }

    /// Submit the entered code together with the flow's other fields
    pub async fn submit(
        &self,
        context: &G::Context,
        submission: &G::Submission,
    ) -> FlowResult<SubmitOutcome> {
        let generation = self.generation.load(Ordering::SeqCst);
        let session = self.snapshot();

        if session.status.is_pending() {
            return Err(FlowError::Busy);
        }
        if session.status != SessionStatus::CodeSent {
            return Err(self.reject_locally(vec![FieldError::new(
                ROOT_FIELD,
                MessageKey::RequestOtpFirst,
            )]));
        }
        if !validators::min_trimmed_len(&session.entered_code, self.policy.min_code_length) {
            return Err(self.reject_locally(vec![FieldError::new(
                CODE_FIELD,
                MessageKey::OtpInvalid,
            )]));
        }
        if let Err(errors) = submission.validate().into_result() {
            return Err(self.reject_locally(errors));
        }

        let request = SubmitRequest {
            code: session.entered_code.trim().to_string(),
            destination: (!session.destination.trim().is_empty())
                .then(|| session.destination.trim().to_string()),
            channel: session.channel.clone(),
        };

        let mut claimed = false;
        let mut busy = false;
        self.state.send_if_modified(|s| {
            if s.status != SessionStatus::CodeSent {
                busy = s.status.is_pending();
                return false;
            }
            claimed = true;
            s.status = SessionStatus::Verifying;
            s.clear_errors();
            true
        });
        if !claimed {
            return Err(if busy {
                FlowError::Busy
            } else {
                let error = FieldError::new(ROOT_FIELD, MessageKey::RequestOtpFirst);
                self.reject_locally(vec![error])
            });
        }

        let result = self.gateway.submit(&request, context, submission).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(
                flow = %self.policy.kind,
                event = "stale_response_discarded",
                "Discarding submit response for a torn down session"
            );
            return Err(FlowError::Discarded);
        }

        match result {
            Ok(response) if response.success => Ok(self.verified(response)),
            Ok(response) => {
                let notice =
                    Notice::server_or(response.message.as_deref(), self.policy.submit_failed);
                Err(self.submit_failed(FlowError::Application(notice)))
            }
            Err(err) => {
                let flow_error = self.gateway_failure(&err, self.policy.submit_failed);
                Err(self.submit_failed(flow_error))
            }
        }
    }

    /// Cancel the countdown and forget the session, e.g. when the form unmounts
    pub fn teardown(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.countdown().cancel();
        self.state.send_modify(|s| {
            s.reset();
            s.notice = None;
        });
        tracing::debug!(flow = %self.policy.kind, event = "session_teardown", "Session torn down");
    }

    fn countdown(&self) -> MutexGuard<'_, Countdown> {
        self.countdown
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn destination_error(&self, destination: &str) -> Option<MessageKey> {
        if !self.policy.requires_destination() {
            None
        } else if !meets_min_length(destination, self.policy.min_destination_length) {
            Some(MessageKey::PhoneMinLength)
        } else if !is_plausible_phone(destination) {
            Some(MessageKey::PhoneInvalid)
        } else {
            None
        }
    }

    fn reject_locally(&self, errors: Vec<FieldError>) -> FlowError {
        tracing::debug!(
            flow = %self.policy.kind,
            field = errors.first().map(|e| e.field).unwrap_or(ROOT_FIELD),
            event = "local_validation_failed",
            "Rejected before reaching the network"
        );
        self.state.send_modify(|s| s.set_field_errors(&errors));
        FlowError::Validation(errors)
    }

    fn gateway_failure(&self, err: &GatewayError, fallback: MessageKey) -> FlowError {
        match err {
            GatewayError::Status { message, .. } => {
                FlowError::Application(Notice::server_or(message.as_deref(), fallback))
            }
            GatewayError::Transport(_) => FlowError::Transport(Notice::Message(fallback)),
        }
    }

    fn code_sent(
        &self,
        response: CodeResponse,
        seconds: u32,
        already_sent: bool,
    ) -> RequestOutcome {
        let notice = if already_sent {
            Notice::Message(MessageKey::OtpAlreadySent)
        } else {
            Notice::Message(MessageKey::OtpSentSuccess)
        };
        let masked_destination = response.destination.as_deref().map(mask_account_phone);

        self.state.send_modify(|s| {
            s.status = SessionStatus::CodeSent;
            s.seconds_remaining = seconds;
            s.code_sent_at = Some(Utc::now());
            s.notice = Some(notice.clone());
            if masked_destination.is_some() {
                s.masked_destination = masked_destination.clone();
            }
            s.clear_field_error(CODE_FIELD);
        });
        self.countdown().start(self.state.clone(), self.tick_period);

        if already_sent {
            tracing::info!(
                flow = %self.policy.kind,
                seconds_remaining = seconds,
                event = "code_already_sent",
                "Backend reported the code as already sent"
            );
        } else {
            tracing::info!(
                flow = %self.policy.kind,
                seconds_remaining = seconds,
                event = "code_sent",
                "Verification code sent"
            );
        }

        RequestOutcome {
            seconds_remaining: seconds,
            already_sent,
            notice,
            masked_destination,
        }
    }

    fn request_failed(&self, prior_status: SessionStatus, error: FlowError) -> FlowError {
        tracing::warn!(
            flow = %self.policy.kind,
            error = %error,
            event = "code_request_failed",
            "Verification code request failed"
        );
        self.record_failure(prior_status, &error);
        error
    }

    fn submit_failed(&self, error: FlowError) -> FlowError {
        tracing::warn!(
            flow = %self.policy.kind,
            error = %error,
            event = "submit_failed",
            "Verification submit failed"
        );
        self.record_failure(SessionStatus::CodeSent, &error);
        error
    }

    fn record_failure(&self, status: SessionStatus, error: &FlowError) {
        let notice = error.notice();
        self.state.send_modify(|s| {
            s.status = status;
            match notice {
                Some(notice) => s.set_error(SessionError::root(notice)),
                None => s.clear_errors(),
            }
        });
    }

    fn verified(&self, response: SubmitResponse) -> SubmitOutcome {
        let notice = Notice::server_or(response.message.as_deref(), self.policy.submit_succeeded);

        self.countdown().cancel();
        self.state.send_modify(|s| s.status = SessionStatus::Verified);
        tracing::info!(flow = %self.policy.kind, event = "verified", "Verification completed");

        if let Some(hook) = &self.on_verified {
            hook(self.policy.kind);
        }

        self.state.send_modify(|s| {
            s.reset();
            s.notice = Some(notice.clone());
        });
        SubmitOutcome { notice }
    }
}

impl<G: VerificationGateway> Drop for VerificationController<G> {
    fn drop(&mut self) {
        self.countdown().cancel();
    }
}
