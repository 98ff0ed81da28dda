//! Color themes for the panes

use serde::Deserialize;

use crate::syntax::Color;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Monokai,
}

/// Colors a theme assigns to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub border: Color,
    pub line_number: Color,
    /// Background of the pinned line
    pub highlight: Color,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Light, Theme::Monokai];

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Color::Rgb(0x11, 0x18, 0x27),
                text: Color::Rgb(0xf3, 0xf4, 0xf6),
                border: Color::Rgb(0x37, 0x41, 0x51),
                line_number: Color::Rgb(0x6b, 0x72, 0x80),
                highlight: Color::Rgb(0x1f, 0x29, 0x37),
            },
            Theme::Light => Palette {
                background: Color::Rgb(0xff, 0xff, 0xff),
                text: Color::Rgb(0x11, 0x18, 0x27),
                border: Color::Rgb(0xd1, 0xd5, 0xdb),
                line_number: Color::Rgb(0x9c, 0xa3, 0xaf),
                highlight: Color::Rgb(0xf3, 0xf4, 0xf6),
            },
            Theme::Monokai => Palette {
                background: Color::Rgb(0x1f, 0x29, 0x37),
                text: Color::Rgb(0x4a, 0xde, 0x80),
                border: Color::Rgb(0x22, 0xc5, 0x5e),
                line_number: Color::Rgb(0x86, 0xef, 0xac),
                highlight: Color::Rgb(0x37, 0x41, 0x51),
            },
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Monokai => "Monokai",
        }
    }

    /// The theme after this one, wrapping around
    pub fn next(&self) -> Theme {
        let index = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}
