use std::sync::Mutex;

use tracing::debug;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        ports::RecipeService,
        sequencing::QuerySequencer,
        value_objects::{RecipeSearchParams, RecipeSearchResponse},
    },
};

#[derive(Debug, Clone)]
struct AppliedSearch {
    params: RecipeSearchParams,
    response: RecipeSearchResponse,
}

/// Request/response controller for the recipe listing. Overlapping searches
/// may resolve in any order; only the most recently issued one is applied.
pub struct CatalogSession<S>
where
    S: RecipeService,
{
    service: S,
    sequencer: QuerySequencer,
    applied: Mutex<Option<AppliedSearch>>,
}

impl<S> CatalogSession<S>
where
    S: RecipeService,
{
    pub fn new(service: S) -> Self {
        Self {
            service,
            sequencer: QuerySequencer::new(),
            applied: Mutex::new(None),
        }
    }

    /// `Ok(None)` means a newer search was issued while this one was in
    /// flight and the result was dropped. Errors leave the applied state
    /// untouched so the current filters survive a transient failure.
    pub async fn search(
        &self,
        params: RecipeSearchParams,
    ) -> Result<Option<RecipeSearchResponse>, CoreError> {
        let ticket = self.sequencer.issue();
        let result = self.service.search_recipes(params.clone()).await;

        let mut applied = self
            .applied
            .lock()
            .map_err(|_| CoreError::InternalServerError)?;

        if !self.sequencer.is_current(ticket) {
            debug!(?ticket, "Discarding superseded search result");
            return Ok(None);
        }

        let response = result?;
        *applied = Some(AppliedSearch {
            params,
            response: response.clone(),
        });

        Ok(Some(response))
    }

    pub fn current(&self) -> Option<RecipeSearchResponse> {
        self.applied
            .lock()
            .ok()
            .and_then(|applied| applied.as_ref().map(|search| search.response.clone()))
    }

    pub fn current_params(&self) -> Option<RecipeSearchParams> {
        self.applied
            .lock()
            .ok()
            .and_then(|applied| applied.as_ref().map(|search| search.params.clone()))
    }
}
