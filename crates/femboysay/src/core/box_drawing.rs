//! Border characters for the speech bubble
//!
//! The left and right edge of each content line depend only on where the line
//! sits in the bubble, so glyph selection is a pure function of the line index
//! and the total line count.

/// Position of a content line within the bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinePosition {
    /// The only line of a one-line bubble
    Single,
    /// Top line of a multi-line bubble
    First,
    /// Any line between the first and last
    Middle,
    /// Bottom line of a multi-line bubble
    Last,
}

impl LinePosition {
    /// Classify line `index` of a bubble holding `total` lines
    pub fn of(index: usize, total: usize) -> Self {
        if total == 1 {
            LinePosition::Single
        } else if index == 0 {
            LinePosition::First
        } else if index + 1 == total {
            LinePosition::Last
        } else {
            LinePosition::Middle
        }
    }

    /// Edge glyphs drawn around a line at this position
    pub fn glyphs(self) -> EdgeChars {
        match self {
            LinePosition::Single => EdgeChars::new('<', '>'),
            LinePosition::First => EdgeChars::new('/', '\\'),
            LinePosition::Middle => EdgeChars::new('|', '|'),
            LinePosition::Last => EdgeChars::new('\\', '/'),
        }
    }
}

/// Left and right edge characters for one content line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeChars {
    pub left: char,
    pub right: char,
}

impl EdgeChars {
    pub const fn new(left: char, right: char) -> Self {
        Self { left, right }
    }
}

/// Characters for the horizontal top and bottom borders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    /// Character before the fill run
    pub left: char,
    pub fill: char,
    /// Character after the fill run
    pub right: char,
}

impl BorderChars {
    /// Top border: ` ____ `
    pub const fn top() -> Self {
        Self {
            left: ' ',
            fill: '_',
            right: ' ',
        }
    }

    /// Bottom border: ` ---- `
    pub const fn bottom() -> Self {
        Self {
            left: ' ',
            fill: '-',
            right: ' ',
        }
    }

    /// Draw this border around a content column `width` wide
    ///
    /// The fill covers the content plus the space on either side of it.
    pub fn draw(&self, width: usize) -> String {
        let mut line = String::with_capacity(width + 4);
        line.push(self.left);
        line.extend(std::iter::repeat(self.fill).take(width + 2));
        line.push(self.right);
        line
    }
}
