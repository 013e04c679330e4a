pub mod settings;

pub use settings::{DataFeedConfig, ProviderFlavor, ServerConfig, Settings, UpstreamConfig};
