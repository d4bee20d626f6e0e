//! マッピングファイル形式のパースとレンダリング
//!
//! 1行1レコードのフラットファイル形式。カテゴリ行は
//! `<画像の場所><空白><カテゴリ名>`、アイテム行は `>` で始まり
//! 直前のカテゴリに属する: `><画像の場所><空白><読み上げテキスト>`。
//! 名前・テキストには空白を含められる(最初の空白でのみ分割)。
//!
//! 例:
//! ```text
//! img/food/plate.png food
//! >img/food/fries.png french fries
//! >img/food/watermelon.png watermelon
//! img/clothing/hanger.png clothing
//! >img/clothing/shirt.png collared shirt
//! ```

use crate::category::Category;
use crate::mappings::AacMappings;

/// ファイル内容をパースしてマッピングを組み立てる
///
/// パースは失敗しない。カテゴリ行より前に現れたアイテム行と
/// 空行は黙って捨てる。空白のない行は名前/テキストを空として扱う。
///
/// # Arguments
/// * `content` - マッピングファイルの全文
pub fn parse(content: &str) -> AacMappings {
    let mut mappings = AacMappings::new();
    let mut current: Option<(String, Category)> = None;

    for line in content.lines() {
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix('>') {
            // アイテム行: 直前のカテゴリに属する。カテゴリ未出現なら捨てる
            if let Some((_, category)) = current.as_mut() {
                let (image_loc, text) = split_record(rest);
                category.add_item(image_loc, text);
            }
        } else {
            // カテゴリ行: 組み立て中のカテゴリを確定して次を開始
            if let Some((key, category)) = current.take() {
                mappings.insert_category(&key, category);
            }
            let (key, name) = split_record(line);
            current = Some((key.to_string(), Category::new(name)));
        }
    }
    if let Some((key, category)) = current.take() {
        mappings.insert_category(&key, category);
    }

    mappings
}

/// マッピングをファイル形式の文字列に変換する
///
/// `parse` の逆変換。カテゴリとアイテムの順序はそのまま出力される。
pub fn render(mappings: &AacMappings) -> String {
    let mut out = String::new();
    for (key, category) in mappings.iter_categories() {
        out.push_str(key);
        out.push(' ');
        out.push_str(category.name());
        out.push('\n');
        for image_loc in category.image_locs() {
            out.push('>');
            out.push_str(&image_loc);
            out.push(' ');
            // image_locs と items は同期しているので失敗しない
            out.push_str(category.select(&image_loc).unwrap_or(""));
            out.push('\n');
        }
    }
    out
}

/// 最初の空白でキーと残りに分割する。空白がなければ残りは空
fn split_record(line: &str) -> (&str, &str) {
    line.split_once(' ').unwrap_or((line, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
img/food/plate.png food
>img/food/fries.png french fries
>img/food/watermelon.png watermelon
img/clothing/hanger.png clothing
>img/clothing/shirt.png collared shirt
";

    #[test]
    fn test_parse_two_categories() {
        let mut mappings = parse(SAMPLE);

        assert_eq!(
            mappings.image_locs(),
            vec!["img/food/plate.png", "img/clothing/hanger.png"]
        );

        mappings.select("img/food/plate.png").unwrap();
        assert_eq!(mappings.current_category(), "food");
        assert_eq!(
            mappings.image_locs(),
            vec!["img/food/fries.png", "img/food/watermelon.png"]
        );
        assert_eq!(
            mappings.select("img/food/fries.png").unwrap(),
            "french fries"
        );
    }

    #[test]
    fn test_parse_text_with_spaces() {
        let mut mappings = parse(SAMPLE);
        mappings.select("img/clothing/hanger.png").unwrap();

        // 最初の空白でのみ分割される
        assert_eq!(
            mappings.select("img/clothing/shirt.png").unwrap(),
            "collared shirt"
        );
    }

    #[test]
    fn test_parse_item_before_category_dropped() {
        let content = "\
>img/orphan.png orphan text
img/food/plate.png food
>img/food/fries.png french fries
";
        let mut mappings = parse(content);

        assert_eq!(mappings.image_locs(), vec!["img/food/plate.png"]);
        mappings.select("img/food/plate.png").unwrap();
        assert_eq!(mappings.image_locs(), vec!["img/food/fries.png"]);
    }

    #[test]
    fn test_parse_blank_lines_skipped() {
        let content = "\
img/food/plate.png food

>img/food/fries.png french fries

";
        let mut mappings = parse(content);

        mappings.select("img/food/plate.png").unwrap();
        assert_eq!(mappings.image_locs(), vec!["img/food/fries.png"]);
    }

    #[test]
    fn test_parse_record_without_space() {
        // 空白がない行は名前を空として扱う
        let mappings = parse("img/food/plate.png\n");

        assert_eq!(mappings.image_locs(), vec!["img/food/plate.png"]);
    }

    #[test]
    fn test_parse_empty_content() {
        let mappings = parse("");

        assert!(mappings.image_locs().is_empty());
        assert_eq!(mappings.current_category(), "");
    }

    #[test]
    fn test_render_round_trip() {
        let rendered = render(&parse(SAMPLE));
        assert_eq!(rendered, SAMPLE);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&AacMappings::new()), "");
    }

    #[test]
    fn test_render_preserves_order() {
        let content = "\
img/z.png zeta
>img/z/1.png one
img/a.png alpha
>img/a/2.png two
>img/a/3.png three
";
        // ソートされず入力の順序のまま
        assert_eq!(render(&parse(content)), content);
    }

    #[test]
    fn test_parse_duplicate_category_last_wins() {
        let content = "\
img/food/plate.png food
>img/food/fries.png french fries
img/food/plate.png meals
>img/food/soup.png soup
";
        let mut mappings = parse(content);

        // 同じキーのカテゴリは後勝ちで、位置は最初の出現のまま
        assert_eq!(mappings.image_locs(), vec!["img/food/plate.png"]);
        mappings.select("img/food/plate.png").unwrap();
        assert_eq!(mappings.current_category(), "meals");
        assert_eq!(mappings.image_locs(), vec!["img/food/soup.png"]);
    }
}
