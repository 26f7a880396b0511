use std::sync::Arc;

use crate::config::{ApiKey, Config};
use crate::translate::{OpenAITranslator, Translator};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: Arc<dyn Translator>,
}

impl AppState {
    pub fn new(config: Config, api_key: ApiKey) -> Self {
        let translator = Arc::new(OpenAITranslator::new(&config.translator_config, api_key));
        Self::with_translator(config, translator)
    }

    /// Build state around an existing translator
    pub fn with_translator(config: Config, translator: Arc<dyn Translator>) -> Self {
        Self {
            config: Arc::new(config),
            translator,
        }
    }
}
