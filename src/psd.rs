//! Capteurs de distance infrarouges (PSD).

use crate::prelude::*;

/// Contrat que doit remplir la liaison native pour les PSD
pub trait PsdDriver {
    /// Distance en millimètres, corrigée par la table de calibration
    fn get(&mut self, psd: i32) -> i32;
    /// Valeur brute du capteur, sans passer par la table de calibration
    fn get_raw(&mut self, psd: i32) -> i32;
}

/// Emplacement d'un capteur sur le robot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PsdPosition {
    Front,
    Left,
    Right,
    Back,
}

impl PsdPosition {
    fn code(self) -> i32 {
        match self {
            PsdPosition::Front => 1,
            PsdPosition::Left => 2,
            PsdPosition::Right => 3,
            PsdPosition::Back => 4,
        }
    }
}

pub struct PsdSensor<D: PsdDriver> {
    driver: D,
}

impl<D: PsdDriver> PsdSensor<D> {
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    pub fn distance(&mut self, psd: PsdPosition) -> Millimeters {
        Millimeters(self.driver.get(psd.code()))
    }

    pub fn raw(&mut self, psd: PsdPosition) -> i32 {
        self.driver.get_raw(psd.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubPsd;

    impl PsdDriver for StubPsd {
        fn get(&mut self, psd: i32) -> i32 {
            psd * 100
        }
        fn get_raw(&mut self, psd: i32) -> i32 {
            psd * 1000
        }
    }

    #[test]
    fn test_positions_reach_their_port() {
        let mut sensors = PsdSensor::new(StubPsd);
        assert_eq!(sensors.distance(PsdPosition::Front), Millimeters(100));
        assert_eq!(sensors.distance(PsdPosition::Back), Millimeters(400));
        assert_eq!(sensors.raw(PsdPosition::Left), 2000);
    }
}
