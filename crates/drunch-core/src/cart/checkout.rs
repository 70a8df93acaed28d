//! Two-phase checkout state machine.
//!
//! States: `Reviewing -> EnteringDetails -> Submitting -> Succeeded |
//! Failed`. A failure returns to the details form with cart and details
//! retained for retry; a success clears the details and, after a fixed
//! display delay driven by the caller, the flow closes back to `Reviewing`.
//!
//! The machine itself is synchronous and pure; the actual external write is
//! performed by [`crate::order::service::OrderService`], which reports the
//! outcome back via [`CheckoutFlow::record_success`] /
//! [`CheckoutFlow::record_failure`].

use drunch_types::error::OrderError;
use drunch_types::order::CustomerDetails;

/// Where the checkout flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    /// Reviewing cart contents.
    Reviewing,
    /// Entering customer details.
    EnteringDetails,
    /// Exactly one submission is in flight.
    Submitting,
    /// The order was stored; the flow closes after a display delay.
    Succeeded,
    /// The submission failed; details are retained for retry.
    Failed,
}

/// The checkout flow: current state plus the details form contents.
///
/// An empty cart is permitted through checkout -- the guard against it
/// belongs to the review UI, not the data model.
#[derive(Debug, Clone, Default)]
pub struct CheckoutFlow {
    state: CheckoutState,
    details: CustomerDetails,
}

impl Default for CheckoutState {
    fn default() -> Self {
        CheckoutState::Reviewing
    }
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    pub fn details(&self) -> &CustomerDetails {
        &self.details
    }

    /// Proceed from the cart review to the details form.
    pub fn begin_details(&mut self) {
        if self.state == CheckoutState::Reviewing {
            self.state = CheckoutState::EnteringDetails;
        }
    }

    /// Go back from the details form to the cart review.
    pub fn back_to_review(&mut self) {
        if matches!(
            self.state,
            CheckoutState::EnteringDetails | CheckoutState::Failed
        ) {
            self.state = CheckoutState::Reviewing;
        }
    }

    /// Replace the details form contents. Editing after a failure returns
    /// the flow to `EnteringDetails`.
    pub fn set_details(&mut self, details: CustomerDetails) {
        self.details = details;
        if self.state == CheckoutState::Failed {
            self.state = CheckoutState::EnteringDetails;
        }
    }

    /// Attempt the `EnteringDetails -> Submitting` transition.
    ///
    /// All four detail fields must be present; a missing field blocks the
    /// transition. While a submission is in flight further submits are
    /// rejected with [`OrderError::SubmissionInFlight`] and change nothing.
    pub fn begin_submit(&mut self) -> Result<(), OrderError> {
        match self.state {
            CheckoutState::Submitting => Err(OrderError::SubmissionInFlight),
            CheckoutState::EnteringDetails | CheckoutState::Failed => {
                self.details.validate()?;
                self.state = CheckoutState::Submitting;
                Ok(())
            }
            // Submit is only reachable from the details form; treat a stray
            // call as an ignored click.
            CheckoutState::Reviewing | CheckoutState::Succeeded => {
                Err(OrderError::SubmissionInFlight)
            }
        }
    }

    /// The in-flight submission was stored. Details are cleared; the caller
    /// clears the cart and closes the flow after its display delay.
    pub fn record_success(&mut self) {
        if self.state == CheckoutState::Submitting {
            self.state = CheckoutState::Succeeded;
            self.details = CustomerDetails::default();
        }
    }

    /// The in-flight submission failed. Cart and details are retained so the
    /// user can retry.
    pub fn record_failure(&mut self) {
        if self.state == CheckoutState::Submitting {
            self.state = CheckoutState::Failed;
        }
    }

    /// Close the flow and reset to `Reviewing` (after the success display
    /// delay, or when the user dismisses the view).
    pub fn close(&mut self) {
        self.state = CheckoutState::Reviewing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_details() -> CustomerDetails {
        CustomerDetails {
            name: "Ayesha Khan".to_string(),
            email: "ayesha@example.com".to_string(),
            phone: "0300 1234567".to_string(),
            address: "House 42, Block 5, Gulshan".to_string(),
        }
    }

    #[test]
    fn test_happy_path() {
        let mut flow = CheckoutFlow::new();
        assert_eq!(flow.state(), CheckoutState::Reviewing);

        flow.begin_details();
        assert_eq!(flow.state(), CheckoutState::EnteringDetails);

        flow.set_details(full_details());
        flow.begin_submit().unwrap();
        assert_eq!(flow.state(), CheckoutState::Submitting);

        flow.record_success();
        assert_eq!(flow.state(), CheckoutState::Succeeded);
        // Details are cleared on success.
        assert!(flow.details().name.is_empty());

        flow.close();
        assert_eq!(flow.state(), CheckoutState::Reviewing);
    }

    #[test]
    fn test_missing_name_blocks_submit() {
        let mut flow = CheckoutFlow::new();
        flow.begin_details();
        let mut details = full_details();
        details.name = String::new();
        flow.set_details(details);

        let err = flow.begin_submit().unwrap_err();
        assert!(matches!(err, OrderError::MissingField("name")));
        // The transition must not happen.
        assert_eq!(flow.state(), CheckoutState::EnteringDetails);
    }

    #[test]
    fn test_double_submit_rejected_while_in_flight() {
        let mut flow = CheckoutFlow::new();
        flow.begin_details();
        flow.set_details(full_details());
        flow.begin_submit().unwrap();

        let err = flow.begin_submit().unwrap_err();
        assert!(matches!(err, OrderError::SubmissionInFlight));
        assert_eq!(flow.state(), CheckoutState::Submitting);
    }

    #[test]
    fn test_failure_retains_details_and_allows_retry() {
        let mut flow = CheckoutFlow::new();
        flow.begin_details();
        flow.set_details(full_details());
        flow.begin_submit().unwrap();
        flow.record_failure();
        assert_eq!(flow.state(), CheckoutState::Failed);
        assert_eq!(flow.details().name, "Ayesha Khan");

        // Retry straight from the failed state.
        flow.begin_submit().unwrap();
        assert_eq!(flow.state(), CheckoutState::Submitting);
        flow.record_success();
        assert_eq!(flow.state(), CheckoutState::Succeeded);
    }

    #[test]
    fn test_editing_after_failure_returns_to_details() {
        let mut flow = CheckoutFlow::new();
        flow.begin_details();
        flow.set_details(full_details());
        flow.begin_submit().unwrap();
        flow.record_failure();

        flow.set_details(full_details());
        assert_eq!(flow.state(), CheckoutState::EnteringDetails);
    }

    #[test]
    fn test_submit_from_review_is_ignored() {
        let mut flow = CheckoutFlow::new();
        assert!(flow.begin_submit().is_err());
        assert_eq!(flow.state(), CheckoutState::Reviewing);
    }
}
