use miette::Diagnostic;
use thiserror::Error;

/// Main error type for asset generation.
#[derive(Error, Diagnostic, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    #[diagnostic(code(traffic_assets::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {}: {message}", .path.display())]
    #[diagnostic(code(traffic_assets::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    /// PNG encoding failed. The single most likely real failure mode, so it
    /// carries pointers to ready-made sprite packs as a fallback.
    #[error("Failed to encode {}: {message}", .path.display())]
    #[diagnostic(
        code(traffic_assets::encode),
        help(
            "ready-made placeholder sprites are available from:\n\
             - https://kenney.nl/assets/city-kit-roads\n\
             - https://opengameart.org/art-search-advanced?keys=car+sprite\n\
             - https://www.flaticon.com/search?word=traffic"
        )
    )]
    Encode {
        path: std::path::PathBuf,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, AssetError>;
