//! Horloges et informations machine.

use std::thread::sleep;
use std::time::Duration;

/// Contrat que doit remplir la liaison native pour le système
pub trait OsDriver {
    /// Heure système `(heures, minutes, secondes, millisecondes)`
    fn time(&mut self) -> (i32, i32, i32, i32);
    /// Millisecondes écoulées depuis le démarrage du programme
    fn count(&mut self) -> i32;
    fn machine_name(&mut self) -> String;
    fn machine_speed(&mut self) -> i32;
    fn machine_type(&mut self) -> i32;
    fn machine_id(&mut self) -> i32;
    fn version(&mut self) -> String;
}

/// Attente bloquante.
/// L'attente native devient instable une fois le timer principal lancé, on
/// passe donc par l'horloge du système hôte.
pub fn wait(ms: u64) {
    sleep(Duration::from_millis(ms));
}

/// Heure système (GMT en simulation)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hours: i32,
    pub minutes: i32,
    pub seconds: i32,
    pub milliseconds: i32,
}

pub struct SystemInfo<D: OsDriver> {
    driver: D,
}

impl<D: OsDriver> SystemInfo<D> {
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    pub fn time(&mut self) -> TimeOfDay {
        let (hours, minutes, seconds, milliseconds) = self.driver.time();
        TimeOfDay {
            hours,
            minutes,
            seconds,
            milliseconds,
        }
    }

    /// Temps écoulé depuis le démarrage du programme
    pub fn count(&mut self) -> Duration {
        Duration::from_millis(self.driver.count().max(0) as u64)
    }

    pub fn machine_name(&mut self) -> String {
        self.driver.machine_name()
    }

    pub fn machine_speed(&mut self) -> i32 {
        self.driver.machine_speed()
    }

    pub fn machine_type(&mut self) -> i32 {
        self.driver.machine_type()
    }

    pub fn machine_id(&mut self) -> i32 {
        self.driver.machine_id()
    }

    pub fn version(&mut self) -> String {
        self.driver.version()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubOs;

    impl OsDriver for StubOs {
        fn time(&mut self) -> (i32, i32, i32, i32) {
            (13, 37, 42, 7)
        }
        fn count(&mut self) -> i32 {
            2500
        }
        fn machine_name(&mut self) -> String {
            "sim".to_string()
        }
        fn machine_speed(&mut self) -> i32 {
            1000
        }
        fn machine_type(&mut self) -> i32 {
            1
        }
        fn machine_id(&mut self) -> i32 {
            4242
        }
        fn version(&mut self) -> String {
            "1.0".to_string()
        }
    }

    #[test]
    fn test_time_unpacking() {
        let mut info = SystemInfo::new(StubOs);
        assert_eq!(
            info.time(),
            TimeOfDay {
                hours: 13,
                minutes: 37,
                seconds: 42,
                milliseconds: 7
            }
        );
        assert_eq!(info.count(), Duration::from_millis(2500));
    }
}
