//! Built-in roster and equipment series tables.
//!
//! The canonical character table, compiled into the binary. Rows keep the
//! original declaration order, which is the order the catalog reports names
//! in. A data file loaded via [`crate::loaders`] can replace either table at
//! startup; the shape is the same.

use roster_core::{Catalog, Category, CharacterRecord, EquipmentSeries, StatBlock, StatKey};

/// Raw roster rows: category, name, base str/int/vit/agi.
const ROSTER: &[(Category, &str, u32, u32, u32, u32)] = &[
    (Category::Heart, "秋山 駿", 437, 627, 437, 603),
    (Category::Body, "品田 辰雄", 529, 523, 585, 596),
    (Category::Heart, "足立 宏一", 473, 603, 468, 591),
    (Category::Technique, "寺田 行雄", 621, 511, 511, 573),
    (Category::Heart, "澤村 遥", 554, 560, 627, 560),
    (Category::Body, "ソンヒ", 689, 437, 456, 554),
    (Category::Technique, "ﾏｷﾑﾗ ﾏｺﾄ", 523, 523, 708, 548),
    (Category::Heart, "趙 天佑", 498, 498, 627, 542),
    (Category::Technique, "錦山 彰", 646, 431, 431, 535),
    (Category::Technique, "ﾊﾝ・ｼﾞｭﾝｷﾞ", 548, 542, 579, 535),
    (Category::Body, "向田 紗栄子", 542, 529, 689, 535),
    (Category::Technique, "タツ姐", 696, 437, 462, 529),
    (Category::Body, "小野 ミチオ", 603, 480, 696, 529),
    (Category::Technique, "郷田 龍司", 652, 437, 431, 517),
    (Category::Body, "冴島 大河", 517, 511, 646, 517),
    (Category::Heart, "西谷 誉", 437, 696, 468, 511),
    (Category::Heart, "真島 吾朗", 431, 658, 431, 511),
    (Category::Technique, "春日 一番", 431, 640, 486, 456),
    (Category::Body, "桐生 一馬", 542, 486, 652, 419),
    (Category::Body, "柏木 修", 492, 492, 560, 517),
    (Category::Body, "相沢 聖人", 529, 529, 517, 468),
    (Category::Body, "千石 虎之介", 486, 480, 603, 473),
    (Category::Heart, "新藤 浩二", 406, 603, 400, 511),
    (Category::Body, "林 弘", 560, 437, 450, 554),
    (Category::Body, "谷村 正義", 498, 498, 542, 535),
    (Category::Heart, "ｱﾝﾄﾞﾚ・ﾘﾁｬｰﾄﾞｿﾝ", 504, 511, 529, 529),
    (Category::Heart, "星野 龍平", 400, 591, 406, 542),
    (Category::Technique, "森永 悠", 529, 437, 523, 504),
    (Category::Heart, "玉城 鉄生", 480, 486, 603, 480),
    (Category::Heart, "荒瀬 和人", 412, 596, 425, 492),
    (Category::Technique, "伊達 真", 517, 450, 511, 560),
    (Category::Technique, "老鬼", 591, 406, 406, 548),
    (Category::Heart, "渡瀬 勝", 473, 640, 523, 579),
    (Category::Body, "狭山 薫", 683, 431, 462, 560),
    (Category::Technique, "桐生 一馬(龍0)", 517, 517, 719, 566),
    (Category::Heart, "澤村 由美", 554, 554, 671, 554),
    (Category::Technique, "世良 勝", 548, 437, 456, 579),
    (Category::Technique, "田中 シンジ", 412, 596, 406, 523),
];

/// The built-in roster as records, in declaration order.
pub fn builtin_records() -> Vec<CharacterRecord> {
    ROSTER
        .iter()
        .map(|&(category, name, str, int, vit, agi)| {
            CharacterRecord::new(category, name, StatBlock::new(str, int, vit, agi))
        })
        .collect()
}

/// The built-in roster as a ready-to-use catalog.
pub fn builtin_catalog() -> Catalog {
    Catalog::new(builtin_records()).expect("built-in roster names are unique")
}

/// The built-in equipment series table.
///
/// Each series grants a flat bonus to a single stat, on top of whatever the
/// slot it is equipped in grants by itself.
pub fn builtin_series() -> Vec<EquipmentSeries> {
    vec![
        EquipmentSeries::single("サイバー", StatKey::Str, 40),
        EquipmentSeries::single("司祭", StatKey::Int, 40),
        EquipmentSeries::single("浪漫", StatKey::Vit, 55),
        EquipmentSeries::single("ロマン", StatKey::Agi, 40),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_the_full_cast() {
        assert_eq!(builtin_records().len(), 38);
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 38);
    }

    #[test]
    fn declaration_order_is_preserved() {
        let catalog = builtin_catalog();
        let first = catalog.names(None).next().unwrap();
        assert_eq!(first, "秋山 駿");
    }

    #[test]
    fn every_base_stat_is_positive() {
        for record in builtin_records() {
            for value in [
                record.base.str,
                record.base.int,
                record.base.vit,
                record.base.agi,
            ] {
                assert!(value > 0, "{} has a zero base stat", record.name);
            }
        }
    }

    #[test]
    fn series_table_targets_each_stat_once() {
        let series = builtin_series();
        assert_eq!(series.len(), 4);
        assert_eq!(series[0].bonus(StatKey::Str), 40);
        assert_eq!(series[2].bonus(StatKey::Vit), 55);
    }
}
