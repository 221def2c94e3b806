use thiserror::Error;

use crate::analyzer::ParseError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    // 描画できないノード (Sequence など)
    #[error("Render error: {0}")]
    Render(String),
}

pub type InternalResult<T> = Result<T, Error>;

// エラー作成用のヘルパー関数
impl Error {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    pub fn render<S: Into<String>>(message: S) -> Self {
        Error::Render(message.into())
    }
}
