//! Border styles.
//!
//! | Keyword              | Kind                      |
//! |----------------------|---------------------------|
//! | `none`               | no border                 |
//! | `hidden`             | no border, keeps its space|
//! | `plain` / `solid`    | single line (─│┌┐└┘)      |
//! | `rounded` / `round`  | rounded corners (╭╮╯╰)    |
//! | `double`             | double line (═║╔╗╚╝)      |
//! | `thick` / `heavy`    | heavy line (━┃┏┓┗┛)       |
//! | `dashed`             | dashed line               |
//! | `ascii`              | `+`, `-` and `|`          |
//! | `blank`              | spaces                    |
//! | `block`, `inner`, `outer`, `tall`, `wide` | block-element styles |

use phf::phf_map;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderKind {
    #[default]
    None,
    Hidden,
    Plain,
    Rounded,
    Double,
    Thick,
    Dashed,
    Ascii,
    Blank,
    Block,
    Inner,
    Outer,
    Tall,
    Wide,
}

static BORDER_KEYWORDS: phf::Map<&'static str, BorderKind> = phf_map! {
    "none" => BorderKind::None,
    "hidden" => BorderKind::Hidden,
    "plain" => BorderKind::Plain,
    "solid" => BorderKind::Plain,
    "rounded" => BorderKind::Rounded,
    "round" => BorderKind::Rounded,
    "double" => BorderKind::Double,
    "thick" => BorderKind::Thick,
    "heavy" => BorderKind::Thick,
    "dashed" => BorderKind::Dashed,
    "ascii" => BorderKind::Ascii,
    "blank" => BorderKind::Blank,
    "block" => BorderKind::Block,
    "inner" => BorderKind::Inner,
    "outer" => BorderKind::Outer,
    "tall" => BorderKind::Tall,
    "wide" => BorderKind::Wide,
};

impl BorderKind {
    /// Looks up a border keyword (case-insensitive).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        BORDER_KEYWORDS
            .get(keyword.to_ascii_lowercase().as_str())
            .copied()
    }

    /// Does this border draw anything?
    pub fn is_visible(&self) -> bool {
        !matches!(self, BorderKind::None | BorderKind::Hidden)
    }
}
