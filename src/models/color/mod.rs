//! Fixed event colour palette.
//!
//! Events pick one of a small set of tokens instead of a free-form colour.
//! Each token carries a light background, a mid-tone border and a dark text
//! shade so blocks stay readable regardless of the theme.

use serde::{Deserialize, Serialize};

/// Colour token selectable for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    #[default]
    Blue,
    Green,
    Yellow,
    Purple,
    Red,
    Pink,
    Indigo,
}

impl EventColor {
    /// Palette in swatch order.
    pub const ALL: [EventColor; 7] = [
        EventColor::Blue,
        EventColor::Green,
        EventColor::Yellow,
        EventColor::Purple,
        EventColor::Red,
        EventColor::Pink,
        EventColor::Indigo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EventColor::Blue => "Blue",
            EventColor::Green => "Green",
            EventColor::Yellow => "Yellow",
            EventColor::Purple => "Purple",
            EventColor::Red => "Red",
            EventColor::Pink => "Pink",
            EventColor::Indigo => "Indigo",
        }
    }

    /// Block fill
    pub fn background_rgb(&self) -> [u8; 3] {
        match self {
            EventColor::Blue => [219, 234, 254],
            EventColor::Green => [220, 252, 231],
            EventColor::Yellow => [254, 249, 195],
            EventColor::Purple => [243, 232, 255],
            EventColor::Red => [254, 226, 226],
            EventColor::Pink => [252, 231, 243],
            EventColor::Indigo => [224, 231, 255],
        }
    }

    /// Block outline and swatch ring
    pub fn border_rgb(&self) -> [u8; 3] {
        match self {
            EventColor::Blue => [147, 197, 253],
            EventColor::Green => [134, 239, 172],
            EventColor::Yellow => [253, 224, 71],
            EventColor::Purple => [216, 180, 254],
            EventColor::Red => [252, 165, 165],
            EventColor::Pink => [249, 168, 212],
            EventColor::Indigo => [165, 180, 252],
        }
    }

    /// Title and time label
    pub fn text_rgb(&self) -> [u8; 3] {
        match self {
            EventColor::Blue => [30, 64, 175],
            EventColor::Green => [22, 101, 52],
            EventColor::Yellow => [133, 77, 14],
            EventColor::Purple => [107, 33, 168],
            EventColor::Red => [153, 27, 27],
            EventColor::Pink => [157, 23, 77],
            EventColor::Indigo => [55, 48, 163],
        }
    }
}
