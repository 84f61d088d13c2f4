use crate::core::models::element;
use phf::{Map, phf_map};

pub type Rgba = [f32; 4];

pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];
pub const RED: Rgba = [1.0, 0.0, 0.0, 1.0];
pub const GRAY: Rgba = [0.5, 0.5, 0.5, 1.0];
pub const BLUE: Rgba = [0.0, 0.0, 1.0, 1.0];
pub const YELLOW: Rgba = [1.0, 1.0, 0.0, 1.0];
pub const ORANGE: Rgba = [1.0, 0.65, 0.0, 1.0];
pub const PURPLE: Rgba = [0.5, 0.0, 0.5, 1.0];
pub const BOND_COLOR: Rgba = GRAY;

/// Base radius and color used to draw one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomStyle {
    pub radius: f32,
    pub color: Rgba,
}

impl AtomStyle {
    pub const DEFAULT: AtomStyle = AtomStyle {
        radius: 0.17,
        color: PURPLE,
    };

    pub const fn with_alpha(self, alpha: f32) -> Self {
        let [r, g, b, _] = self.color;
        Self {
            radius: self.radius,
            color: [r, g, b, alpha],
        }
    }
}

static STYLES: Map<&'static str, AtomStyle> = phf_map! {
    "H" => AtomStyle { radius: 0.100, color: WHITE },
    "C" => AtomStyle { radius: 0.170, color: GRAY },
    "N" => AtomStyle { radius: 0.155, color: BLUE },
    "O" => AtomStyle { radius: 0.152, color: RED },
    "P" => AtomStyle { radius: 0.180, color: ORANGE },
    "S" => AtomStyle { radius: 0.180, color: YELLOW },
};

/// Style for an atomic number; unlisted and unassigned elements get [`AtomStyle::DEFAULT`].
pub fn style_for(element_number: u32) -> AtomStyle {
    element::symbol(element_number)
        .and_then(|symbol| STYLES.get(symbol))
        .copied()
        .unwrap_or(AtomStyle::DEFAULT)
}
