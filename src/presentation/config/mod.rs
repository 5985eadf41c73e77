mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    API_KEY_VAR, LlmSettings, LoggingSettings, ServerSettings, Settings, SummarySettings,
};
