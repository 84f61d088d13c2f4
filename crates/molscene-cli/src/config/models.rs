use molscene::engine::config::SceneConfig;
use molscene::workflows::view::ViewRequest;

/// Fully resolved settings for one `view` run.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub scene: SceneConfig,
    pub request: ViewRequest,
}
