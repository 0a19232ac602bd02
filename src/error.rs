use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoGridError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("マニフェストが不正: {0}")]
    InvalidManifest(String),

    #[error("カラム数が決まりません。`--columns` か `--width` を指定してください")]
    MissingColumnCount,

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] photo_grid_common::Error),
}

pub type Result<T> = std::result::Result<T, PhotoGridError>;
