//! Form submission lifecycle
//!
//! A form moves `Idle -> Submitting -> Idle` on success and
//! `Idle -> Submitting -> Failed` on error; a failed form can be resubmitted.
//! `begin` hands out a [`Ticket`] that `finish` must present. `cancel` (run
//! when the form's page is torn down) invalidates outstanding tickets, so a
//! late completion produces neither a notification nor a reset.

use crate::forms::FormRequest;
use crate::{CoreResult, Notification, RedemptionRequest, ReferralRequest, SiteConfig, SubmitError};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

impl FormPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormPhase::Submitting)
    }
}

/// Proof that a completion belongs to the submission `begin` started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormMachine {
    phase: FormPhase,
    generation: u64,
}

impl FormMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase.is_submitting()
    }

    /// Enter `Submitting`. Only one submission per form may be in flight.
    pub fn begin(&mut self) -> CoreResult<Ticket> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        self.generation += 1;
        self.phase = FormPhase::Submitting;
        Ok(Ticket(self.generation))
    }

    /// Settle the submission identified by `ticket`. Returns the outcome to
    /// report, or `None` when the ticket is stale and the outcome must be
    /// dropped.
    pub fn finish(
        &mut self,
        ticket: Ticket,
        outcome: CoreResult<Notification>,
    ) -> Option<CoreResult<Notification>> {
        if ticket.0 != self.generation || !self.is_submitting() {
            debug!(ticket = ticket.0, generation = self.generation, "dropping stale completion");
            return None;
        }

        self.phase = match &outcome {
            Ok(_) => FormPhase::Idle,
            Err(err) => FormPhase::Failed(err.to_string()),
        };
        Some(outcome)
    }

    /// Abandon whatever is in flight and return to `Idle`
    pub fn cancel(&mut self) {
        if self.is_submitting() {
            info!(ticket = self.generation, "pending submission cancelled");
        }
        self.generation += 1;
        self.phase = FormPhase::Idle;
    }
}

/// A form's record together with its submission lifecycle. This is all the
/// state a form page keeps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission<R> {
    request: R,
    machine: FormMachine,
}

impl<R: FormRequest> Submission<R> {
    pub fn new(request: R) -> Self {
        Self {
            request,
            machine: FormMachine::new(),
        }
    }

    pub fn request(&self) -> &R {
        &self.request
    }

    /// Apply an input change to the record
    pub fn edit(&mut self, change: impl FnOnce(&mut R)) {
        change(&mut self.request);
    }

    pub fn phase(&self) -> &FormPhase {
        self.machine.phase()
    }

    pub fn is_submitting(&self) -> bool {
        self.machine.is_submitting()
    }

    /// Start submitting. Returns the ticket and a snapshot of the record to
    /// send.
    pub fn begin(&mut self) -> CoreResult<(Ticket, R)> {
        let ticket = self.machine.begin()?;
        Ok((ticket, self.request.clone()))
    }

    /// Settle a completion. On success the record is cleared, on failure
    /// it is kept for a retry. Stale completions change nothing and yield
    /// `None`.
    pub fn settle(
        &mut self,
        ticket: Ticket,
        outcome: CoreResult<Notification>,
    ) -> Option<CoreResult<Notification>> {
        let settled = self.machine.finish(ticket, outcome)?;
        if settled.is_ok() {
            self.request = self.request.cleared();
        }
        Some(settled)
    }

    pub fn cancel(&mut self) {
        self.machine.cancel();
    }
}

/// Something that can wait. The site waits on browser timers, tests on a
/// paused tokio clock.
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// Backend the forms submit to
#[async_trait(?Send)]
pub trait SubmissionService {
    async fn submit_referral(&self, request: &ReferralRequest) -> CoreResult<Notification>;

    async fn submit_redemption(&self, request: &RedemptionRequest) -> CoreResult<Notification>;
}

/// Stand-in backend: validates, waits a fixed latency, then accepts (or
/// rejects everything when failure injection is on).
pub struct SimulatedService<S> {
    sleeper: S,
    latency: Duration,
    reward_label: String,
    fail: bool,
}

impl<S: Sleeper> SimulatedService<S> {
    pub fn new(sleeper: S, config: &SiteConfig) -> Self {
        Self {
            sleeper,
            latency: config.submit_latency(),
            reward_label: config.reward_label(),
            fail: config.simulate_failure,
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn round_trip(&self, what: &'static str) -> CoreResult<()> {
        info!(what, latency_ms = self.latency.as_millis() as u64, "submitting");
        self.sleeper.sleep(self.latency).await;
        if self.fail {
            warn!(what, "simulated backend rejected submission");
            return Err(SubmitError::Rejected(
                "the service is unavailable, please try again".to_string(),
            ));
        }
        info!(what, "submission accepted");
        Ok(())
    }
}

#[async_trait(?Send)]
impl<S: Sleeper> SubmissionService for SimulatedService<S> {
    async fn submit_referral(&self, request: &ReferralRequest) -> CoreResult<Notification> {
        request.validate()?;
        self.round_trip("referral").await?;
        Ok(Notification::referral_submitted())
    }

    async fn submit_redemption(&self, request: &RedemptionRequest) -> CoreResult<Notification> {
        request.validate()?;
        self.round_trip("redemption").await?;
        Ok(Notification::reward_claimed(
            &self.reward_label,
            request.payout_method,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_cycle_returns_to_idle() {
        let mut machine = FormMachine::new();
        let ticket = machine.begin().unwrap();
        assert!(machine.is_submitting());

        let settled = machine.finish(ticket, Ok(Notification::referral_submitted()));
        assert_eq!(settled, Some(Ok(Notification::referral_submitted())));
        assert_eq!(machine.phase(), &FormPhase::Idle);
    }

    #[test]
    fn test_second_begin_is_rejected_while_in_flight() {
        let mut machine = FormMachine::new();
        let _ticket = machine.begin().unwrap();
        assert_eq!(machine.begin(), Err(SubmitError::InFlight));
        assert!(machine.is_submitting());
    }

    #[test]
    fn test_failure_allows_retry() {
        let mut machine = FormMachine::new();
        let ticket = machine.begin().unwrap();
        let err = SubmitError::Rejected("down".into());
        assert_eq!(machine.finish(ticket, Err(err.clone())), Some(Err(err)));
        assert_eq!(
            machine.phase(),
            &FormPhase::Failed("Submission rejected: down".into())
        );

        let retry = machine.begin().unwrap();
        assert_ne!(retry, ticket);
        assert!(machine.is_submitting());
    }

    #[test]
    fn test_cancel_drops_late_completion() {
        let mut machine = FormMachine::new();
        let ticket = machine.begin().unwrap();
        machine.cancel();
        assert_eq!(machine.phase(), &FormPhase::Idle);

        assert_eq!(machine.finish(ticket, Ok(Notification::referral_submitted())), None);
        assert_eq!(machine.phase(), &FormPhase::Idle);
    }

    #[test]
    fn test_old_ticket_cannot_settle_new_submission() {
        let mut machine = FormMachine::new();
        let first = machine.begin().unwrap();
        machine.cancel();
        let second = machine.begin().unwrap();

        assert_eq!(machine.finish(first, Ok(Notification::referral_submitted())), None);
        assert!(machine.is_submitting());
        assert!(machine.finish(second, Ok(Notification::referral_submitted())).is_some());
    }

    fn asha_refers_ravi() -> ReferralRequest {
        ReferralRequest {
            referrer_name: "Asha".into(),
            referrer_phone: "9999999999".into(),
            customer_name: "Ravi".into(),
            customer_phone: "8888888888".into(),
            address: "MG Road".into(),
            notes: "Call after 6pm".into(),
        }
    }

    #[test]
    fn test_settle_success_clears_request() {
        let mut submission = Submission::new(asha_refers_ravi());
        let (ticket, sent) = submission.begin().unwrap();
        assert_eq!(sent, asha_refers_ravi());
        assert!(submission.is_submitting());

        let settled = submission.settle(ticket, Ok(Notification::referral_submitted()));
        assert_eq!(settled, Some(Ok(Notification::referral_submitted())));
        assert_eq!(submission.request(), &ReferralRequest::default());
        assert_eq!(submission.phase(), &FormPhase::Idle);
    }

    #[test]
    fn test_settle_failure_keeps_request() {
        let mut submission = Submission::new(asha_refers_ravi());
        let (ticket, _) = submission.begin().unwrap();

        let err = SubmitError::Rejected("down".into());
        assert_eq!(submission.settle(ticket, Err(err.clone())), Some(Err(err)));
        assert_eq!(submission.request(), &asha_refers_ravi());
        assert!(matches!(submission.phase(), FormPhase::Failed(_)));
    }

    #[test]
    fn test_settle_after_cancel_changes_nothing() {
        let mut submission = Submission::new(asha_refers_ravi());
        let (ticket, _) = submission.begin().unwrap();
        submission.cancel();

        assert_eq!(submission.settle(ticket, Ok(Notification::referral_submitted())), None);
        assert_eq!(submission.request(), &asha_refers_ravi());
    }

    #[test]
    fn test_edit_updates_request() {
        let mut submission = Submission::new(ReferralRequest::default());
        submission.edit(|request| crate::ReferralField::Address.apply(request, "MG Road".into()));
        assert_eq!(submission.request().address, "MG Road");
    }

    #[test]
    fn test_finish_twice_is_ignored() {
        let mut machine = FormMachine::new();
        let ticket = machine.begin().unwrap();
        assert!(machine.finish(ticket, Ok(Notification::referral_submitted())).is_some());
        assert_eq!(machine.finish(ticket, Ok(Notification::referral_submitted())), None);
    }
}
