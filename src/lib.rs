//! AAC Board Core Library
//!
//! AAC(補助代替コミュニケーション)ボードの2階層マッピングを管理する。
//! トップレベルのカテゴリ一覧と、カテゴリ内の画像→読み上げテキスト対応、
//! ナビゲーション状態、フラットファイル形式の読み書きを提供する。
//! 表示・音声出力は外部の呼び出し側が担当する。

pub mod category;
pub mod error;
pub mod mappings;
pub mod ordered_map;
pub mod page;
pub mod parser;

pub use category::Category;
pub use error::{Error, Result};
pub use mappings::AacMappings;
pub use ordered_map::OrderedMap;
pub use page::Page;
pub use parser::{parse, render};
