//! Placement des robots et des objets, disponible uniquement en simulation.

use std::error::Error;
use std::fmt::Display;

use crate::prelude::*;

/// Contrat que doit remplir la liaison native pour la simulation
pub trait SimDriver {
    /// `(code, (x, y, z, phi))`
    fn robot(&mut self, id: i32) -> (i32, (i32, i32, i32, i32));
    fn set_robot(&mut self, id: i32, x: i32, y: i32, z: i32, phi: i32) -> i32;
    fn object(&mut self, id: i32) -> (i32, (i32, i32, i32, i32));
    fn set_object(&mut self, id: i32, x: i32, y: i32, z: i32, phi: i32) -> i32;
}

/// Position et cap dans le monde simulé
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimPose {
    pub x: Millimeters,
    pub y: Millimeters,
    pub z: Millimeters,
    /// cap en degrés
    pub phi: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    Device { code: i32 },
}

impl Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for SimError {}

fn unpack(result: (i32, (i32, i32, i32, i32))) -> Result<SimPose, SimError> {
    let (code, (x, y, z, phi)) = result;
    if code != 0 {
        return Err(SimError::Device { code });
    }
    Ok(SimPose {
        x: Millimeters(x),
        y: Millimeters(y),
        z: Millimeters(z),
        phi,
    })
}

pub struct SimControl<D: SimDriver> {
    driver: D,
}

impl<D: SimDriver> SimControl<D> {
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    pub fn robot(&mut self, id: i32) -> Result<SimPose, SimError> {
        unpack(self.driver.robot(id))
    }

    /// Téléporte le robot à la pose donnée
    pub fn set_robot(&mut self, id: i32, pose: SimPose) -> Result<(), SimError> {
        let code = self
            .driver
            .set_robot(id, pose.x.0, pose.y.0, pose.z.0, pose.phi);
        if code != 0 {
            return Err(SimError::Device { code });
        }
        Ok(())
    }

    pub fn object(&mut self, id: i32) -> Result<SimPose, SimError> {
        unpack(self.driver.object(id))
    }

    pub fn set_object(&mut self, id: i32, pose: SimPose) -> Result<(), SimError> {
        let code = self
            .driver
            .set_object(id, pose.x.0, pose.y.0, pose.z.0, pose.phi);
        if code != 0 {
            return Err(SimError::Device { code });
        }
        Ok(())
    }
}
