use crate::i18n::Lang;

/// Card width in columns, matching the original layout.
pub const WIDTH: usize = 56;

/// Box-drawing card renderer. Persian content is right-justified for RTL
/// reading; glyph shaping is left to the terminal.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    unicode: bool,
}

impl Frame {
    pub fn new(unicode: bool) -> Self {
        Self { unicode }
    }

    fn glyphs(&self) -> (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str) {
        if self.unicode {
            ("╔", "═", "╗", "║", "╚", "╝")
        } else {
            ("+", "-", "+", "|", "+", "+")
        }
    }

    pub fn title(&self, lang: Lang, text: &str) -> String {
        let (tl, h, tr, _, _, _) = self.glyphs();
        let text = format!(" {} ", text.trim());
        let inner = WIDTH - 2;
        let fill = h.repeat(inner.saturating_sub(text.chars().count()));
        if lang.is_rtl() {
            format!("{}{}{}{}", tl, fill, text, tr)
        } else {
            format!("{}{}{}{}", tl, text, fill, tr)
        }
    }

    pub fn line(&self, lang: Lang, content: &str) -> String {
        let (_, _, _, v, _, _) = self.glyphs();
        let inner = WIDTH - 2;
        let clipped: String = content.chars().take(inner).collect();
        let pad = " ".repeat(inner - clipped.chars().count());
        if lang.is_rtl() {
            format!("{}{}{}{}", v, pad, clipped, v)
        } else {
            format!("{}{}{}{}", v, clipped, pad, v)
        }
    }

    /// A `label: value` card row; RTL swaps to `value  label`.
    pub fn label_value(&self, lang: Lang, label: &str, value: &str) -> String {
        let content = if lang.is_rtl() {
            format!("{}  {}", value, label)
        } else {
            format!("{}: {}", label, value)
        };
        self.line(lang, &content)
    }

    /// A numbered menu row; no colon, unlike [`Frame::label_value`].
    pub fn menu_item(&self, lang: Lang, number: &str, text: &str) -> String {
        let content = if lang.is_rtl() {
            format!("{}  {}", text, number)
        } else {
            format!("{} {}", number, text)
        };
        self.line(lang, &content)
    }

    pub fn bottom(&self) -> String {
        let (_, h, _, _, bl, br) = self.glyphs();
        format!("{}{}{}", bl, h.repeat(WIDTH - 2), br)
    }
}
