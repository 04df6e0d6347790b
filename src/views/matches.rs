use crate::core::{FormError, Phase, ProfileForm, RenderState, RequestState, RequestTicket};
use crate::models::{IssueCard, Profile};
use crate::services::{ClientError, MatchingClient};

/// Result of a submit action on the matching view
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Fewer than the required interests; nothing happened
    Disabled,
    /// Field validation failed; nothing was sent
    Invalid(validator::ValidationErrors),
    /// A request is already in flight
    Ignored,
    /// A request ran and its result was applied to the view
    Completed(Phase),
}

/// Profile form plus the matched issue results
///
/// Every request failure ends here as the `Error` render state; the form stays
/// editable so the user can resubmit.
#[derive(Debug, Clone, Default)]
pub struct MatchingView {
    form: ProfileForm,
    results: RequestState<Vec<IssueCard>>,
}

impl MatchingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProfileForm {
        &mut self.form
    }

    pub fn results(&self) -> &RequestState<Vec<IssueCard>> {
        &self.results
    }

    /// Validate the form and enter `Loading`
    ///
    /// Split from `finish_submit` for callers that share the view across tasks
    /// and must not hold it across the network call.
    pub fn begin_submit(&mut self) -> Result<(RequestTicket, Profile), SubmitOutcome> {
        let profile = match self.form.submit() {
            Ok(profile) => profile,
            Err(FormError::SubmitDisabled { current, required }) => {
                tracing::debug!("Submit disabled: {} of {} interests", current, required);
                return Err(SubmitOutcome::Disabled);
            }
            Err(FormError::Invalid(errors)) => {
                tracing::info!("Profile validation failed: {}", errors);
                return Err(SubmitOutcome::Invalid(errors));
            }
        };

        let ticket = self.results.begin().ok_or(SubmitOutcome::Ignored)?;
        Ok((ticket, profile))
    }

    /// Apply a request result; stale tickets are dropped
    pub fn finish_submit(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<IssueCard>, ClientError>,
    ) -> bool {
        let result = result.map_err(|e| {
            tracing::error!("Matching failed: {}", e);
            e.to_string()
        });
        self.results.complete(ticket, result)
    }

    /// Submit the form to the matching endpoint and record the outcome
    pub async fn submit(&mut self, client: &MatchingClient) -> SubmitOutcome {
        let (ticket, profile) = match self.begin_submit() {
            Ok(started) => started,
            Err(outcome) => return outcome,
        };

        let result = client.submit_profile(&profile).await;
        self.finish_submit(ticket, result);

        SubmitOutcome::Completed(self.results.phase())
    }

    /// Clear results back to the welcome state
    pub fn reset(&mut self) {
        tracing::debug!("Resetting matching results");
        self.results.reset();
    }

    pub fn render(&self) -> RenderState<'_, IssueCard> {
        self.results.render()
    }
}
