//! Character sets and ready-made glyphs for box drawing

use crate::geometry::{Point, Size};
use crate::glyph::{Color, Glyph, GlyphKind};
use crate::shape::{LineShape, RectangleShape};

/// Box-drawing characters for one rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharSet {
    pub tl: char, // top-left corner
    pub tr: char, // top-right corner
    pub bl: char, // bottom-left corner
    pub br: char, // bottom-right corner
    pub h: char,  // horizontal line
    pub v: char,  // vertical line
    // Diagonal strokes
    pub diag_down: char, // ╲
    pub diag_up: char,   // ╱
    pub arr_r: char,     // arrow right
    pub arr_l: char,     // arrow left
    pub arr_d: char,     // arrow down
    pub arr_u: char,     // arrow up
    pub arr_dr: char,    // arrow down-right (◢)
    pub arr_dl: char,    // arrow down-left (◣)
    pub arr_ur: char,    // arrow up-right (◥)
    pub arr_ul: char,    // arrow up-left (◤)
    pub pin: char,
    // Rounded corners
    pub rtl: char,
    pub rtr: char,
    pub rbl: char,
    pub rbr: char,
    // Double lines
    pub dh: char,
    pub dv: char,
    pub dtl: char,
    pub dtr: char,
    pub dbl: char,
    pub dbr: char,
}

pub const UNICODE_CHARS: CharSet = CharSet {
    tl: '┌',
    tr: '┐',
    bl: '└',
    br: '┘',
    h: '─',
    v: '│',
    diag_down: '╲',
    diag_up: '╱',
    arr_r: '▶',
    arr_l: '◀',
    arr_d: '▼',
    arr_u: '▲',
    arr_dr: '◢',
    arr_dl: '◣',
    arr_ur: '◥',
    arr_ul: '◤',
    pin: '●',
    rtl: '╭',
    rtr: '╮',
    rbl: '╰',
    rbr: '╯',
    dh: '═',
    dv: '║',
    dtl: '╔',
    dtr: '╗',
    dbl: '╚',
    dbr: '╝',
};

pub const ASCII_CHARS: CharSet = CharSet {
    tl: '+',
    tr: '+',
    bl: '+',
    br: '+',
    h: '-',
    v: '|',
    diag_down: '\\',
    diag_up: '/',
    arr_r: '>',
    arr_l: '<',
    arr_d: 'v',
    arr_u: '^',
    arr_dr: '\\',
    arr_dl: '/',
    arr_ur: '/',
    arr_ul: '\\',
    pin: 'o',
    rtl: '+',
    rtr: '+',
    rbl: '+',
    rbr: '+',
    dh: '=',
    dv: '#',
    dtl: '#',
    dtr: '#',
    dbl: '#',
    dbr: '#',
};

/// Border family used by [`Glyphs::rectangle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    #[default]
    Light,
    Rounded,
    Double,
}

/// Glyph presets drawn from a [`CharSet`] in one color pair
#[derive(Debug, Clone, Copy)]
pub struct Glyphs<'a> {
    chars: &'a CharSet,
    background: Color,
    foreground: Color,
}

impl<'a> Glyphs<'a> {
    pub fn new(chars: &'a CharSet) -> Self {
        Self {
            chars,
            background: Color::BACKGROUND,
            foreground: Color::FOREGROUND,
        }
    }

    pub fn with_colors(self, background: Color, foreground: Color) -> Self {
        Self {
            background,
            foreground,
            ..self
        }
    }

    pub fn chars(&self) -> &'a CharSet {
        self.chars
    }

    // Every CharSet character is single-column; see test_charsets_fit_one_cell
    fn simple(&self, value: char) -> Glyph {
        Glyph::trusted(
            self.background,
            self.foreground,
            GlyphKind::Simple { value },
        )
    }

    fn directional(&self, table: [char; 8]) -> Glyph {
        Glyph::trusted(
            self.background,
            self.foreground,
            GlyphKind::Directional { table },
        )
    }

    /// Line body: horizontal, vertical or diagonal stroke depending on orientation
    pub fn stroke(&self) -> Glyph {
        let c = self.chars;
        self.directional([
            c.h,
            c.v,
            c.h,
            c.v,
            c.diag_down,
            c.diag_up,
            c.diag_down,
            c.diag_up,
        ])
    }

    /// Arrow head pointing along the orientation
    pub fn arrow(&self) -> Glyph {
        let c = self.chars;
        self.directional([
            c.arr_r, c.arr_d, c.arr_l, c.arr_u, c.arr_dr, c.arr_dl, c.arr_ul, c.arr_ur,
        ])
    }

    pub fn pin(&self) -> Glyph {
        self.simple(self.chars.pin)
    }

    pub fn horizontal(&self, style: BoxStyle) -> Glyph {
        match style {
            BoxStyle::Double => self.simple(self.chars.dh),
            BoxStyle::Light | BoxStyle::Rounded => self.simple(self.chars.h),
        }
    }

    pub fn vertical(&self, style: BoxStyle) -> Glyph {
        match style {
            BoxStyle::Double => self.simple(self.chars.dv),
            BoxStyle::Light | BoxStyle::Rounded => self.simple(self.chars.v),
        }
    }

    /// Corner glyphs in `[top-left, top-right, bottom-left, bottom-right]` order
    pub fn corners(&self, style: BoxStyle) -> [Glyph; 4] {
        let c = self.chars;
        let [tl, tr, bl, br] = match style {
            BoxStyle::Light => [c.tl, c.tr, c.bl, c.br],
            BoxStyle::Rounded => [c.rtl, c.rtr, c.rbl, c.rbr],
            BoxStyle::Double => [c.dtl, c.dtr, c.dbl, c.dbr],
        };
        [
            self.simple(tl),
            self.simple(tr),
            self.simple(bl),
            self.simple(br),
        ]
    }

    /// Fully populated rectangle builder in the given border style
    pub fn rectangle(&self, source: Point, size: Size, style: BoxStyle) -> RectangleShape {
        let [tl, tr, bl, br] = self.corners(style);
        RectangleShape::new(source, size)
            .horizontal(self.horizontal(style))
            .vertical(self.vertical(style))
            .top_left(tl)
            .top_right(tr)
            .bottom_left(bl)
            .bottom_right(br)
    }

    /// Line builder with a stroke body and an arrow head at its end
    pub fn arrow_line(&self, source: Point, size: Size) -> LineShape {
        LineShape::new(source, size)
            .trait_glyph(self.stroke())
            .end_pin(self.arrow())
    }
}

impl Glyphs<'static> {
    pub fn unicode() -> Self {
        Glyphs::new(&UNICODE_CHARS)
    }

    pub fn ascii() -> Self {
        Glyphs::new(&ASCII_CHARS)
    }
}
