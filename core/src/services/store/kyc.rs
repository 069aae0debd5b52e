use tokio::sync::watch;

use super::ObservableStore;

const VERIFIED_STATUS: &str = "verified";

/// Whether the signed-in user passed KYC
#[derive(Debug, Default)]
pub struct KycStatusStore {
    inner: ObservableStore<bool>,
}

impl KycStatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_verified(&self) -> bool {
        self.inner.get()
    }

    pub fn set_verified(&self, verified: bool) {
        if self.inner.set(verified) {
            tracing::info!(verified = verified, event = "kyc_status_changed", "KYC status changed");
        }
    }

    /// Apply the status string reported by the profile API
    pub fn set_from_api_status(&self, status: &str) {
        self.set_verified(status.trim().eq_ignore_ascii_case(VERIFIED_STATUS));
    }

    /// Forget the status, e.g. on sign-out
    pub fn clear(&self) {
        self.set_verified(false);
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.inner.subscribe()
    }
}

/// Outcome of a KYC gate check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KycGateDecision {
    Allow,
    /// Send the user to the KYC form first
    RequireKyc,
}

/// Guard for screens that need a verified identity
pub struct KycGate<'a> {
    status: &'a KycStatusStore,
}

impl<'a> KycGate<'a> {
    pub fn new(status: &'a KycStatusStore) -> Self {
        Self { status }
    }

    pub fn check(&self) -> KycGateDecision {
        if self.status.is_verified() {
            KycGateDecision::Allow
        } else {
            KycGateDecision::RequireKyc
        }
    }
}
