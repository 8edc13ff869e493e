use std::sync::Arc;

use cookbook_core::application::CookbookService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CookbookService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CookbookService) -> Self {
        Self { args, service }
    }
}
