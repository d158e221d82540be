//! Moteurs, servomoteurs et encodeurs.

use std::error::Error;
use std::fmt::Display;

use crate::prelude::*;

/// Contrat que doit remplir la liaison native pour les actionneurs
pub trait MotorDriver {
    fn drive(&mut self, motor: i32, speed: i32) -> i32;
    /// Pilotage sans passer par la table de calibration
    fn drive_raw(&mut self, motor: i32, speed: i32) -> i32;
    fn pid(&mut self, motor: i32, p: i32, i: i32, d: i32) -> i32;
    fn pid_off(&mut self, motor: i32) -> i32;
    fn speed(&mut self, motor: i32, ticks: i32) -> i32;
    fn servo_set(&mut self, servo: i32, position: i32) -> i32;
    fn servo_set_raw(&mut self, servo: i32, position: i32) -> i32;
    fn servo_range(&mut self, servo: i32, low: i32, high: i32) -> i32;
    fn encoder_read(&mut self, quad: i32) -> i32;
    fn encoder_reset(&mut self, quad: i32) -> i32;
}

/// Port moteur valide, entre 1 et 4
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotorPort(u8);

impl MotorPort {
    pub const M1: MotorPort = MotorPort(1);
    pub const M2: MotorPort = MotorPort(2);
    pub const M3: MotorPort = MotorPort(3);
    pub const M4: MotorPort = MotorPort(4);

    pub fn new(port: u8) -> Result<MotorPort, MotorError> {
        if (1..=4).contains(&port) {
            Ok(Self(port))
        } else {
            Err(MotorError::InvalidPort { port })
        }
    }

    fn code(self) -> i32 {
        i32::from(self.0)
    }
}

/// Port servomoteur valide, entre 1 et 14
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServoPort(u8);

impl ServoPort {
    pub fn new(port: u8) -> Result<ServoPort, MotorError> {
        if (1..=14).contains(&port) {
            Ok(Self(port))
        } else {
            Err(MotorError::InvalidPort { port })
        }
    }

    fn code(self) -> i32 {
        i32::from(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorError {
    InvalidPort { port: u8 },
    /// Vitesse hors de `-100..=100`
    InvalidSpeed { speed: i32 },
    Device { code: i32 },
}

impl Display for MotorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for MotorError {}

fn device_ok(code: i32) -> Result<(), MotorError> {
    if code == 0 {
        Ok(())
    } else {
        Err(MotorError::Device { code })
    }
}

pub struct Motors<D: MotorDriver> {
    driver: D,
}

impl<D: MotorDriver> Motors<D> {
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Vitesse en pourcentage, entre -100 et 100
    pub fn drive(&mut self, motor: MotorPort, speed: i32) -> Result<(), MotorError> {
        if !(-100..=100).contains(&speed) {
            error!("Attrapé. Valeur de vitesse '{speed}' incorrecte.");
            return Err(MotorError::InvalidSpeed { speed });
        }
        device_ok(self.driver.drive(motor.code(), speed))
    }

    pub fn drive_raw(&mut self, motor: MotorPort, speed: i32) -> Result<(), MotorError> {
        device_ok(self.driver.drive_raw(motor.code(), speed))
    }

    pub fn pid(&mut self, motor: MotorPort, p: i32, i: i32, d: i32) -> Result<(), MotorError> {
        device_ok(self.driver.pid(motor.code(), p, i, d))
    }

    pub fn pid_off(&mut self, motor: MotorPort) -> Result<(), MotorError> {
        device_ok(self.driver.pid_off(motor.code()))
    }

    /// Vitesse régulée, en ticks d'encodeur par seconde
    pub fn speed(&mut self, motor: MotorPort, ticks: i32) -> Result<(), MotorError> {
        device_ok(self.driver.speed(motor.code(), ticks))
    }

    /// Position entre 0 et 255, les extrêmes étant les butées du servo
    pub fn servo_set(&mut self, servo: ServoPort, position: u8) -> Result<(), MotorError> {
        device_ok(self.driver.servo_set(servo.code(), i32::from(position)))
    }

    pub fn servo_set_raw(&mut self, servo: ServoPort, position: u8) -> Result<(), MotorError> {
        device_ok(self.driver.servo_set_raw(servo.code(), i32::from(position)))
    }

    /// Durées d'impulsion en microsecondes pour les deux butées
    pub fn servo_range(&mut self, servo: ServoPort, low: i32, high: i32) -> Result<(), MotorError> {
        device_ok(self.driver.servo_range(servo.code(), low, high))
    }

    /// Ticks cumulés de la quadrature associée au moteur
    pub fn encoder_read(&mut self, motor: MotorPort) -> i32 {
        self.driver.encoder_read(motor.code())
    }

    pub fn encoder_reset(&mut self, motor: MotorPort) -> Result<(), MotorError> {
        device_ok(self.driver.encoder_reset(motor.code()))
    }
}
