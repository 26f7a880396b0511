pub mod interface;
pub mod openai_translator;
pub mod prompt;

pub use interface::*;
pub use openai_translator::OpenAITranslator;
