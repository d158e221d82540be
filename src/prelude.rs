//! Ce fichier est destiné à être `use prelude::*` donc peu de choses sont publiques

pub use crate::units::*;

// Système de log :

#[allow(unused)]
pub use tracing::{trace, debug, info, warn, error};

pub mod colors {
    pub type Color = (u8, u8, u8);

    pub const RED: Color = (255, 0, 0);
    pub const GREEN: Color = (0, 255, 0);
    pub const BLUE: Color = (0, 0, 255);
    pub const WHITE: Color = (255, 255, 255);
    pub const GRAY: Color = (128, 128, 128);
    pub const BLACK: Color = (0, 0, 0);
    pub const ORANGE: Color = (255, 165, 0);
    pub const SILVER: Color = (192, 192, 192);
    pub const LIGHTGRAY: Color = (211, 211, 211);
    pub const DARKGRAY: Color = (169, 169, 169);
    pub const NAVY: Color = (0, 0, 128);
    pub const CYAN: Color = (0, 255, 255);
    pub const TEAL: Color = (0, 128, 128);
    pub const MAGENTA: Color = (255, 0, 255);
    pub const PURPLE: Color = (128, 0, 128);
    pub const MAROON: Color = (128, 0, 0);
    pub const YELLOW: Color = (255, 255, 0);
    pub const OLIVE: Color = (128, 128, 0);
}
