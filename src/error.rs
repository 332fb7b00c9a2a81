use thiserror::Error;

/// Fatal setup and presentation failures. SDL reports its errors as strings.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("SDL could not initialize: {0}")]
    VideoInit(String),
    #[error("window could not be created: {0}")]
    WindowCreation(String),
    #[error("renderer could not be created: {0}")]
    Renderer(String),
    #[error("streaming texture could not be created: {0}")]
    Texture(String),
    #[error("event pump unavailable: {0}")]
    EventPump(String),
    #[error("timer subsystem unavailable: {0}")]
    Timer(String),
    #[error("failed to present frame: {0}")]
    Present(String),
    #[error("failed to dump ray field: {0}")]
    Dump(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
