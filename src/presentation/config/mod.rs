mod environment;
mod settings;

pub use environment::{Environment, UnknownEnvironment};
pub use settings::{
    AnalysisSettings, ExtractionSettings, LoggingSettings, ServerSettings, Settings,
    SummarizerProvider, SummarizerSettings,
};
