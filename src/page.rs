//! 表示レイヤ向けの共通操作面
//!
//! カテゴリ単体とマッピング全体のどちらを持っていても、
//! 表示レイヤが同じ呼び出しで操作できるようにするトレイト。

use crate::category::Category;
use crate::error::Result;
use crate::mappings::AacMappings;

/// 1画面分の操作面
pub trait Page {
    /// 画像とテキストの組を登録する
    fn add_item(&mut self, image_loc: &str, text: &str);

    /// 表示すべき画像の一覧(挿入順)
    fn image_locs(&self) -> Vec<String>;

    /// 現在のカテゴリ名(該当なしなら空文字)
    fn current_category(&self) -> &str;

    /// 画像を選択し、読み上げテキストを返す
    fn select(&mut self, image_loc: &str) -> Result<String>;

    /// 画像が表示対象に含まれるか
    fn has_image(&self, image_loc: &str) -> bool;
}

impl Page for Category {
    fn add_item(&mut self, image_loc: &str, text: &str) {
        Category::add_item(self, image_loc, text);
    }

    fn image_locs(&self) -> Vec<String> {
        Category::image_locs(self)
    }

    fn current_category(&self) -> &str {
        self.name()
    }

    fn select(&mut self, image_loc: &str) -> Result<String> {
        Category::select(self, image_loc).map(|s| s.to_string())
    }

    fn has_image(&self, image_loc: &str) -> bool {
        Category::has_image(self, image_loc)
    }
}

impl Page for AacMappings {
    fn add_item(&mut self, image_loc: &str, text: &str) {
        AacMappings::add_item(self, image_loc, text);
    }

    fn image_locs(&self) -> Vec<String> {
        AacMappings::image_locs(self)
    }

    fn current_category(&self) -> &str {
        AacMappings::current_category(self)
    }

    fn select(&mut self, image_loc: &str) -> Result<String> {
        AacMappings::select(self, image_loc)
    }

    fn has_image(&self, image_loc: &str) -> bool {
        AacMappings::has_image(self, image_loc)
    }
}
