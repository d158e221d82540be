//! Lidar et sa configuration de balayage, gardée côté client pour pouvoir la
//! relire et la réinstaller après un balayage ponctuel.

use std::error::Error;
use std::fmt::Display;

use tracing::instrument;

use crate::prelude::*;

/// Contrat que doit remplir la liaison native pour le lidar
pub trait LidarDriver {
    fn set(&mut self, range: i32, tilt: i32, n_points: i32) -> i32;
    /// Remplit `distances` avec un balayage, en millimètres
    fn get(&mut self, distances: &mut [i32]) -> i32;
}

/// Configuration d'un balayage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LidarConfig {
    /// en degrés, centré vers l'avant
    pub range: i32,
    /// en degrés, positif vers le bas
    pub tilt: i32,
    /// nombre de points mesurés et renvoyés par balayage
    pub n_points: usize,
}

impl Default for LidarConfig {
    fn default() -> Self {
        Self {
            range: 360,
            tilt: 0,
            n_points: 360,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LidarError {
    Device { code: i32 },
}

impl Display for LidarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for LidarError {}

pub struct Lidar<D: LidarDriver> {
    driver: D,
    config: LidarConfig,
}

impl<D: LidarDriver> Lidar<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            config: LidarConfig::default(),
        }
    }

    /// Configuration de balayage courante
    pub fn config(&self) -> LidarConfig {
        self.config
    }

    /// Met à jour la configuration de balayage.
    /// Les champs à `None` gardent leur valeur courante.
    pub fn configure(
        &mut self,
        range: Option<i32>,
        tilt: Option<i32>,
        n_points: Option<usize>,
    ) -> Result<(), LidarError> {
        let mut config = self.config;
        if let Some(range) = range {
            config.range = range;
        }
        if let Some(tilt) = tilt {
            config.tilt = tilt;
        }
        if let Some(n_points) = n_points {
            config.n_points = n_points;
        }
        self.apply(config)
    }

    fn apply(&mut self, config: LidarConfig) -> Result<(), LidarError> {
        let code = self
            .driver
            .set(config.range, config.tilt, config.n_points as i32);
        if code != 0 {
            warn!("Attrapé. Configuration lidar {:?} refusée (code {code}).", config);
            return Err(LidarError::Device { code });
        }
        self.config = config;
        Ok(())
    }

    /// Balayage avec la configuration courante
    #[instrument(skip(self))]
    pub fn scan(&mut self) -> Result<Vec<Millimeters>, LidarError> {
        let mut distances = vec![0i32; self.config.n_points];
        let code = self.driver.get(&mut distances);
        if code != 0 {
            return Err(LidarError::Device { code });
        }
        Ok(distances.into_iter().map(Millimeters).collect())
    }

    /// Balayage avec une configuration ponctuelle : la configuration courante
    /// est réinstallée après le balayage
    pub fn scan_with(
        &mut self,
        range: Option<i32>,
        tilt: Option<i32>,
        n_points: Option<usize>,
    ) -> Result<Vec<Millimeters>, LidarError> {
        if range.is_none() && tilt.is_none() && n_points.is_none() {
            // rien à remplacer, pas besoin de sauvegarder
            return self.scan();
        }
        let saved = self.config;
        self.configure(range, tilt, n_points)?;
        let result = self.scan();
        self.apply(saved)?;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct StubLidar {
        set_calls: Vec<(i32, i32, i32)>,
        scans: usize,
    }

    impl LidarDriver for StubLidar {
        fn set(&mut self, range: i32, tilt: i32, n_points: i32) -> i32 {
            self.set_calls.push((range, tilt, n_points));
            0
        }
        fn get(&mut self, distances: &mut [i32]) -> i32 {
            self.scans += 1;
            for (i, distance) in distances.iter_mut().enumerate() {
                *distance = 1000 + i as i32;
            }
            0
        }
    }

    #[test]
    fn test_scan_uses_current_point_count() {
        let mut lidar = Lidar::new(StubLidar::default());
        let distances = lidar.scan().unwrap();
        assert_eq!(distances.len(), 360);
        assert_eq!(distances[0], Millimeters(1000));

        lidar.configure(None, None, Some(10)).unwrap();
        assert_eq!(lidar.scan().unwrap().len(), 10);
    }

    #[test]
    fn test_configure_keeps_unset_fields() {
        let mut lidar = Lidar::new(StubLidar::default());
        lidar.configure(Some(180), None, None).unwrap();
        assert_eq!(
            lidar.config(),
            LidarConfig {
                range: 180,
                tilt: 0,
                n_points: 360
            }
        );
        assert_eq!(lidar.driver.set_calls, vec![(180, 0, 360)]);
    }

    #[test]
    fn test_scan_with_restores_config() {
        let mut lidar = Lidar::new(StubLidar::default());
        lidar.configure(Some(180), Some(5), None).unwrap();

        let distances = lidar.scan_with(Some(90), None, Some(20)).unwrap();
        assert_eq!(distances.len(), 20);
        assert_eq!(
            lidar.config(),
            LidarConfig {
                range: 180,
                tilt: 5,
                n_points: 360
            }
        );
        // installation de la configuration ponctuelle puis réinstallation
        assert_eq!(
            lidar.driver.set_calls,
            vec![(180, 5, 360), (90, 5, 20), (180, 5, 360)]
        );
    }

    #[test]
    fn test_scan_with_nothing_to_replace_skips_set() {
        let mut lidar = Lidar::new(StubLidar::default());
        lidar.scan_with(None, None, None).unwrap();
        assert!(lidar.driver.set_calls.is_empty());
        assert_eq!(lidar.driver.scans, 1);
    }
}
