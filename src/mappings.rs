//! AACボード全体の2階層マッピングとナビゲーション状態
//!
//! トップレベル(カテゴリ一覧)とカテゴリ内の2状態を持ち、
//! `select` がカテゴリ切り替えと読み上げテキストの解決を兼ねる。
//! 表示レイヤはどちらの状態でも同じ呼び出しで操作する。

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{Error, Result};
use crate::ordered_map::OrderedMap;
use crate::parser;

/// 2階層マッピング全体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AacMappings {
    /// カテゴリの画像の場所→カテゴリ
    categories: OrderedMap<Category>,
    /// 現在のカテゴリのキー。Noneならトップレベル
    current: Option<String>,
}

impl AacMappings {
    /// 空のマッピング(トップレベル状態)を作る
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイルから読み込む
    ///
    /// 読み込みに失敗した場合は警告を出して空のマッピングを返す(非致命的)。
    pub fn from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => parser::parse(&content),
            Err(e) => {
                eprintln!(
                    "警告: マッピングファイルを読み込めません {}: {}",
                    path.display(),
                    e
                );
                Self::new()
            }
        }
    }

    /// 文字列から読み込む(ファイルI/Oなし)
    pub fn from_text(content: &str) -> Self {
        parser::parse(content)
    }

    /// マッピング全体をファイルに書き出す
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, parser::render(self))?;
        Ok(())
    }

    /// ファイル形式の文字列に変換する(ファイルI/Oなし)
    pub fn to_file_string(&self) -> String {
        parser::render(self)
    }

    /// 画像の選択操作
    ///
    /// トップレベルでは該当カテゴリへ移動して空文字を返す(発話なし)。
    /// カテゴリ内では画像に対応する読み上げテキストを返す。
    ///
    /// # Returns
    /// * `Err(Error::CategoryNotFound)` - トップレベルで未知のキーを選択した場合
    /// * `Err(Error::ImageNotFound)` - カテゴリ内で未知の画像を選択した場合
    pub fn select(&mut self, image_loc: &str) -> Result<String> {
        match &self.current {
            None => {
                if !self.categories.has_key(image_loc) {
                    return Err(Error::CategoryNotFound(image_loc.to_string()));
                }
                self.current = Some(image_loc.to_string());
                Ok(String::new())
            }
            Some(key) => {
                let category = self
                    .categories
                    .get(key)
                    .ok_or_else(|| Error::CategoryNotFound(key.clone()))?;
                Ok(category.select(image_loc)?.to_string())
            }
        }
    }

    /// 表示すべき画像の一覧(挿入順)
    ///
    /// トップレベルでは全カテゴリのキー、カテゴリ内ではそのカテゴリの画像。
    pub fn image_locs(&self) -> Vec<String> {
        match self.active_category() {
            Some(category) => category.image_locs(),
            None => self.categories.keys(),
        }
    }

    /// トップレベルに戻る
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// 画像が現在の表示対象に含まれるか
    pub fn has_image(&self, image_loc: &str) -> bool {
        match self.active_category() {
            Some(category) => category.has_image(image_loc),
            None => self.categories.has_key(image_loc),
        }
    }

    /// 画像とテキストの組を登録する
    ///
    /// トップレベルでは `text` を表示名とする新しいカテゴリを `image_loc` を
    /// キーとして作る(既存カテゴリは上書き)。カテゴリ内ではそのカテゴリに
    /// アイテムを追加する。空のキーは警告を出してスキップする。
    pub fn add_item(&mut self, image_loc: &str, text: &str) {
        match self.current.clone() {
            Some(key) => {
                if let Some(category) = self.categories.get_mut(&key) {
                    category.add_item(image_loc, text);
                }
            }
            None => {
                if let Err(e) = self.categories.set(image_loc, Category::new(text)) {
                    eprintln!("警告: カテゴリを登録できません: {}", e);
                }
            }
        }
    }

    /// 現在のカテゴリ名。トップレベルでは空文字
    pub fn current_category(&self) -> &str {
        self.active_category().map(Category::name).unwrap_or("")
    }

    fn active_category(&self) -> Option<&Category> {
        self.current.as_ref().and_then(|key| self.categories.get(key))
    }

    /// パーサがカテゴリを組み立てるための内部口
    pub(crate) fn insert_category(&mut self, key: &str, category: Category) {
        if let Err(e) = self.categories.set(key, category) {
            eprintln!("警告: カテゴリを登録できません: {}", e);
        }
    }

    /// (キー, カテゴリ) の組を挿入順で返す
    pub(crate) fn iter_categories(&self) -> impl Iterator<Item = (&str, &Category)> + '_ {
        self.categories.iter()
    }
}
