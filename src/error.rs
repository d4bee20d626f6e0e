//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("カテゴリが見つかりません: {0}")]
    CategoryNotFound(String),

    #[error("画像が見つかりません: {0}")]
    ImageNotFound(String),

    #[error("空のキーは登録できません")]
    EmptyKey,

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
