//! Conduite en (v, ω) : l'interface de pilotage différentiel du simulateur,
//! avec son odométrie.

use std::error::Error;
use std::fmt::Display;

use tracing::instrument;

use crate::prelude::*;

/// Contrat que doit remplir la liaison native pour la conduite
pub trait VwDriver {
    fn set_speed(&mut self, lin_speed: i32, ang_speed: i32) -> i32;
    /// Vitesses mesurées `(mm/s, degrés/s)`
    fn speed(&mut self) -> (i32, i32);
    fn set_position(&mut self, x: i32, y: i32, phi: i32) -> i32;
    /// Pose odométrique `(x mm, y mm, phi degrés)`
    fn position(&mut self) -> (i32, i32, i32);
    fn straight(&mut self, dist: i32, lin_speed: i32) -> i32;
    fn turn(&mut self, angle: i32, ang_speed: i32) -> i32;
    fn curve(&mut self, dist: i32, angle: i32, lin_speed: i32) -> i32;
    fn drive(&mut self, dx: i32, dy: i32, lin_speed: i32) -> i32;
    /// Distance restante du déplacement en cours, en mm
    fn remain(&mut self) -> i32;
    /// `1` si le déplacement en cours est terminé
    fn done(&mut self) -> i32;
    /// Bloque jusqu'à la fin du déplacement en cours
    fn wait(&mut self) -> i32;
    /// Bits de blocage moteur : `0b01` gauche, `0b10` droite
    fn stalled(&mut self) -> i32;
}

/// Pose odométrique du robot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VwPosition {
    pub x: Millimeters,
    pub y: Millimeters,
    /// cap en degrés
    pub phi: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VwError {
    /// `drive_offset` exige `dx > |dy|`
    InvalidOffset { dx: i32, dy: i32 },
    Device { code: i32 },
}

impl Display for VwError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for VwError {}

fn device_ok(code: i32) -> Result<(), VwError> {
    if code == 0 {
        Ok(())
    } else {
        Err(VwError::Device { code })
    }
}

pub struct DriveTrain<D: VwDriver> {
    driver: D,
}

impl<D: VwDriver> DriveTrain<D> {
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// `lin_speed` en mm/s, `ang_speed` en degrés/s
    pub fn set_speed(&mut self, lin_speed: i32, ang_speed: i32) -> Result<(), VwError> {
        device_ok(self.driver.set_speed(lin_speed, ang_speed))
    }

    /// Vitesses mesurées, pas les consignes en cours
    pub fn speed(&mut self) -> (i32, i32) {
        self.driver.speed()
    }

    /// Réinitialise l'odométrie à la pose donnée
    pub fn set_position(&mut self, position: VwPosition) -> Result<(), VwError> {
        device_ok(
            self.driver
                .set_position(position.x.0, position.y.0, position.phi),
        )
    }

    pub fn position(&mut self) -> VwPosition {
        let (x, y, phi) = self.driver.position();
        VwPosition {
            x: Millimeters(x),
            y: Millimeters(y),
            phi,
        }
    }

    /// Avance (ou recule) de `dist` mm à `lin_speed` mm/s
    #[instrument(skip(self))]
    pub fn straight(&mut self, dist: i32, lin_speed: i32) -> Result<(), VwError> {
        device_ok(self.driver.straight(dist, lin_speed))
    }

    /// Tourne sur place de `angle` degrés à `ang_speed` degrés/s
    #[instrument(skip(self))]
    pub fn turn(&mut self, angle: i32, ang_speed: i32) -> Result<(), VwError> {
        device_ok(self.driver.turn(angle, ang_speed))
    }

    /// Avance de `dist` mm en changeant le cap de `angle` degrés
    pub fn curve(&mut self, dist: i32, angle: i32, lin_speed: i32) -> Result<(), VwError> {
        device_ok(self.driver.curve(dist, angle, lin_speed))
    }

    /// Rejoint le point `(dx, dy)` relatif au robot, en mm
    pub fn drive_offset(&mut self, dx: i32, dy: i32, lin_speed: i32) -> Result<(), VwError> {
        if dx <= dy.abs() {
            warn!("Attrapé. Déplacement ({dx}, {dy}) refusé, il faut dx > |dy|.");
            return Err(VwError::InvalidOffset { dx, dy });
        }
        device_ok(self.driver.drive(dx, dy, lin_speed))
    }

    /// Distance restante du déplacement en cours
    pub fn remain(&mut self) -> Millimeters {
        Millimeters(self.driver.remain())
    }

    /// Fin du déplacement en cours, sans bloquer
    pub fn done(&mut self) -> bool {
        self.driver.done() == 1
    }

    /// Suspend le fil courant jusqu'à la fin du déplacement en cours
    pub fn wait_done(&mut self) -> Result<(), VwError> {
        device_ok(self.driver.wait())
    }

    /// Blocage des moteurs `(gauche, droite)`
    pub fn stalled(&mut self) -> (bool, bool) {
        let state = self.driver.stalled();
        ((state & 0b01) != 0, (state & 0b10) != 0)
    }
}
