use thiserror::Error;

#[derive(Error, Debug)]
pub enum UsfindError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("対応していない画像形式です（jpg/jpeg/png）: {0}")]
    UnsupportedImage(String),

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("APIレスポンスのパースに失敗: {0}")]
    ApiParse(String),

    #[error("AI解析がタイムアウトしました（{0}秒）")]
    Timeout(u64),

    #[error("保存データが不正: {0}")]
    InvalidStore(String),

    #[error("物品レコードが不正: {0}")]
    InvalidRecord(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] usfind_common::Error),
}

pub type Result<T> = std::result::Result<T, UsfindError>;
