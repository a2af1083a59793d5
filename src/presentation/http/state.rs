use crate::{config::Config, infrastructure::analysis::traits::LogoAnalyzer};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn LogoAnalyzer>,
    pub config: Config,
}
