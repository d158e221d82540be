//! Contient tous les types unités utilisés par l'ensemble du code.
//!
//! Ce fichier est destiné à être `use units::*` donc peu de choses sont publiques

pub type Rad = radians::Rad64;
pub type Deg = radians::Deg64;

/// Distance en millimètres, l'unité native du simulateur
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Millimeters(pub i32);

impl Millimeters {
    pub fn to_meters(self) -> f64 {
        f64::from(self.0) / 1000.0
    }
}
