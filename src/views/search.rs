use crate::core::{FilterState, RenderState, RequestState};
use crate::models::Issue;
use crate::services::CatalogueSource;

/// Catalogue browser with label and language filters
///
/// Loading and error state are independent of the matching view. The fetched
/// catalogue lives only in `filters`; `catalogue` tracks the request alone.
#[derive(Debug, Clone, Default)]
pub struct SearchView {
    catalogue: RequestState<()>,
    filters: FilterState,
    activated: bool,
}

impl SearchView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the catalogue the first time the view becomes active
    ///
    /// Later calls do nothing; use `refresh` to fetch again.
    pub async fn activate(&mut self, source: &CatalogueSource) {
        if self.activated {
            return;
        }
        self.activated = true;
        self.refresh(source).await;
    }

    /// Fetch the catalogue again on explicit user action
    pub async fn refresh(&mut self, source: &CatalogueSource) {
        let Some(ticket) = self.catalogue.begin() else {
            return;
        };

        match source.fetch().await {
            Ok(issues) => {
                if self.catalogue.complete(ticket, Ok(())) {
                    self.filters.set_issues(issues);
                }
            }
            Err(e) => {
                tracing::error!("Catalogue fetch failed: {}", e);
                self.catalogue.complete(ticket, Err(e.to_string()));
            }
        }
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn catalogue(&self) -> &RequestState<()> {
        &self.catalogue
    }

    /// Full catalogue from the last successful fetch
    pub fn issues(&self) -> &[Issue] {
        self.filters.issues()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn toggle_label(&mut self, label: &str) {
        self.filters.toggle_label(label);
    }

    pub fn toggle_language(&mut self, language: &str) {
        self.filters.toggle_language(language);
    }

    /// Render state with the filtered catalogue as the success payload
    pub fn render(&self) -> RenderState<'_, Issue> {
        self.catalogue.render_with(self.filters.filtered())
    }
}
