//! Caméra du robot. La résolution installée par `init` est gardée côté client
//! pour dimensionner les captures sans réinterroger la liaison native.

use std::error::Error;
use std::fmt::Display;

use tracing::instrument;

use crate::image_data::{Image, ImageDataError, ImageResolution};
use crate::prelude::*;

/// Contrat que doit remplir la liaison native pour la caméra
pub trait CameraDriver {
    fn init(&mut self, resolution_code: i32, width: i32, height: i32) -> i32;
    fn release(&mut self) -> i32;
    /// Remplit `buffer` en RGB, 3 octets par pixel
    fn get(&mut self, buffer: &mut [u8]) -> i32;
    /// Remplit `buffer` en niveaux de gris, 1 octet par pixel
    fn get_gray(&mut self, buffer: &mut [u8]) -> i32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraError {
    /// Capture demandée avant `init`
    NotInitialised,
    Device { code: i32 },
    Data(ImageDataError),
}

impl Display for CameraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for CameraError {}

pub struct Camera<D: CameraDriver> {
    driver: D,
    resolution: Option<ImageResolution>,
}

impl<D: CameraDriver> Camera<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            resolution: None,
        }
    }

    #[instrument(skip(self))]
    pub fn init(&mut self, resolution: ImageResolution) -> Result<(), CameraError> {
        let code = self.driver.init(
            resolution.code(),
            resolution.width as i32,
            resolution.height as i32,
        );
        if code != 0 {
            warn!("Attrapé. Initialisation caméra refusée (code {code}).");
            return Err(CameraError::Device { code });
        }
        self.resolution = Some(resolution);
        Ok(())
    }

    pub fn release(&mut self) -> Result<(), CameraError> {
        let code = self.driver.release();
        if code != 0 {
            return Err(CameraError::Device { code });
        }
        self.resolution = None;
        Ok(())
    }

    /// Résolution installée par le dernier `init`
    pub fn resolution(&self) -> Option<ImageResolution> {
        self.resolution
    }

    /// Capture couleur
    pub fn get(&mut self) -> Result<Image, CameraError> {
        let resolution = self.resolution.ok_or(CameraError::NotInitialised)?;
        let mut buffer = vec![0u8; resolution.byte_size() as usize];
        let code = self.driver.get(&mut buffer);
        if code != 0 {
            return Err(CameraError::Device { code });
        }
        Image::from_raw(buffer, resolution, false).map_err(CameraError::Data)
    }

    /// Capture en niveaux de gris
    pub fn get_gray(&mut self) -> Result<Image, CameraError> {
        let resolution = self.resolution.ok_or(CameraError::NotInitialised)?;
        let mut buffer = vec![0u8; resolution.pixels() as usize];
        let code = self.driver.get_gray(&mut buffer);
        if code != 0 {
            return Err(CameraError::Device { code });
        }
        Image::from_raw(buffer, resolution, true).map_err(CameraError::Data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_data::QQVGA;

    #[derive(Default)]
    struct StubCamera {
        init_codes: Vec<i32>,
        refuse_init: bool,
    }

    impl CameraDriver for StubCamera {
        fn init(&mut self, resolution_code: i32, _width: i32, _height: i32) -> i32 {
            if self.refuse_init {
                return -1;
            }
            self.init_codes.push(resolution_code);
            0
        }
        fn release(&mut self) -> i32 {
            0
        }
        fn get(&mut self, buffer: &mut [u8]) -> i32 {
            for (i, byte) in buffer.iter_mut().enumerate() {
                *byte = (i % 251) as u8;
            }
            0
        }
        fn get_gray(&mut self, buffer: &mut [u8]) -> i32 {
            buffer.fill(42);
            0
        }
    }

    #[test]
    fn test_capture_before_init_is_refused() {
        let mut camera = Camera::new(StubCamera::default());
        assert_eq!(camera.get().err(), Some(CameraError::NotInitialised));
    }

    #[test]
    fn test_init_records_resolution() {
        let mut camera = Camera::new(StubCamera::default());
        camera.init(QQVGA).unwrap();
        assert_eq!(camera.resolution(), Some(QQVGA));
        assert_eq!(camera.driver.init_codes, vec![QQVGA.code()]);

        let image = camera.get().unwrap();
        assert_eq!(image.data().len(), QQVGA.byte_size() as usize);
        assert!(!image.is_gray());

        let gray = camera.get_gray().unwrap();
        assert_eq!(gray.data().len(), QQVGA.pixels() as usize);
        assert!(gray.is_gray());
    }

    #[test]
    fn test_failed_init_keeps_no_resolution() {
        let mut camera = Camera::new(StubCamera {
            refuse_init: true,
            ..StubCamera::default()
        });
        assert_eq!(camera.init(QQVGA).err(), Some(CameraError::Device { code: -1 }));
        assert_eq!(camera.resolution(), None);
    }

    #[test]
    fn test_release_clears_resolution() {
        let mut camera = Camera::new(StubCamera::default());
        camera.init(QQVGA).unwrap();
        camera.release().unwrap();
        assert_eq!(camera.resolution(), None);
        assert_eq!(camera.get().err(), Some(CameraError::NotInitialised));
    }
}
