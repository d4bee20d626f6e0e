//! 挿入順を保持する連想配列
//!
//! カテゴリ一覧とカテゴリ内アイテムの両方で使う。
//! 既存キーへの上書きは元の位置を保つ(last-write-wins)。

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 挿入順付きマップ
///
/// ボードの項目数は高々数十件なので線形探索で持つ。
/// シリアライズは (キー, 値) ペアの列になり、順序が保たれる。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 値を登録する。既存キーなら位置を保ったまま上書き
    ///
    /// # Returns
    /// * `Err(Error::EmptyKey)` - キーが空文字列の場合
    pub fn set(&mut self, key: &str, value: V) -> Result<()> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// キー一覧(挿入順)
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }

    /// (キー, 値) の組を挿入順で返す
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
