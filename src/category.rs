//! カテゴリ単位の画像→読み上げテキスト対応
//!
//! 1つのカテゴリ(「たべもの」「ふく」など)が持つ画像とテキストの組を管理する。

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ordered_map::OrderedMap;

/// 1カテゴリ分のマッピング
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Category {
    /// カテゴリの表示名
    name: String,
    /// 画像の場所→読み上げテキスト
    items: OrderedMap<String>,
}

impl Category {
    /// 指定した名前の空カテゴリを作る
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            items: OrderedMap::new(),
        }
    }

    /// 画像と読み上げテキストの組を登録する
    ///
    /// 既存の画像は上書きされる(位置は保持)。画像の場所が空の場合は
    /// 警告を出してスキップし、呼び出し側には伝播させない。
    pub fn add_item(&mut self, image_loc: &str, text: &str) {
        if let Err(e) = self.items.set(image_loc, text.to_string()) {
            eprintln!("警告: アイテムを登録できません: {}", e);
        }
    }

    /// カテゴリ内の全画像の場所(挿入順)
    pub fn image_locs(&self) -> Vec<String> {
        self.items.keys()
    }

    /// カテゴリの表示名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 画像に対応する読み上げテキストを返す
    ///
    /// # Returns
    /// * `Err(Error::ImageNotFound)` - 画像がこのカテゴリにない場合
    pub fn select(&self, image_loc: &str) -> Result<&str> {
        self.items
            .get(image_loc)
            .map(|s| s.as_str())
            .ok_or_else(|| Error::ImageNotFound(image_loc.to_string()))
    }

    /// 画像がこのカテゴリに含まれるか
    pub fn has_image(&self, image_loc: &str) -> bool {
        self.items.has_key(image_loc)
    }
}
