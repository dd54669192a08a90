use bitflags::bitflags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

bitflags! {
    /// Text attributes set by `text-style`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifier: u16 {
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINED = 1 << 3;
        const SLOW_BLINK = 1 << 4;
        const RAPID_BLINK = 1 << 5;
        const REVERSED = 1 << 6;
        const HIDDEN = 1 << 7;
        const CROSSED_OUT = 1 << 8;
    }
}

impl Modifier {
    /// Maps one `text-style` keyword to its flag. `none` maps to the empty set.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let flag = match keyword.to_ascii_lowercase().as_str() {
            "none" => Modifier::empty(),
            "bold" => Modifier::BOLD,
            "dim" => Modifier::DIM,
            "italic" => Modifier::ITALIC,
            "underlined" | "underline" => Modifier::UNDERLINED,
            "slow-blink" | "blink" => Modifier::SLOW_BLINK,
            "rapid-blink" => Modifier::RAPID_BLINK,
            "reversed" | "reverse" => Modifier::REVERSED,
            "hidden" => Modifier::HIDDEN,
            "crossed-out" | "strike" => Modifier::CROSSED_OUT,
            _ => return None,
        };
        Some(flag)
    }
}
