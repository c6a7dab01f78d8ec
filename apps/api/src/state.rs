use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::errors::AppError;
use crate::generation::guide::build_guide;
use crate::models::guide::{GeneratedGuide, GuideRequest};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup, never mutated.
    pub catalog: Arc<Catalog>,
    pub config: Config,
    /// Seeded from `GUIDE_RNG_SEED` when set, otherwise from OS entropy.
    pub rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: Config, rng: StdRng) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Builds a guide, filling in the configured default count.
    pub fn generate_guide(&self, mut request: GuideRequest) -> Result<GeneratedGuide<'_>, AppError> {
        request.count = Some(request.count.unwrap_or(self.config.default_question_count));

        // A panic mid-draw leaves the generator in a valid state.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        build_guide(&self.catalog, &request, self.config.selection_policy, &mut *rng)
    }
}
