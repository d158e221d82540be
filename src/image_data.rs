//! Types images échangés avec la caméra et les traitements côté client.

use std::error::Error;
use std::fmt::Display;

use image::{GrayImage, RgbImage};

/// Code natif pour une résolution hors catalogue
const CUSTOM_CODE: i32 = 10;

/// Résolution caméra, avec le code que la liaison native associe aux
/// résolutions de son catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageResolution {
    pub width: u32,
    pub height: u32,
    code: i32,
}

impl ImageResolution {
    const fn catalog(width: u32, height: u32, code: i32) -> Self {
        Self {
            width,
            height,
            code,
        }
    }

    /// Résolution libre. Peu supportée en simulation, préférer le catalogue.
    pub const fn custom(width: u32, height: u32) -> Self {
        Self::catalog(width, height, CUSTOM_CODE)
    }

    pub const fn pixels(self) -> u32 {
        self.width * self.height
    }

    /// Taille en octets d'une image couleur (3 octets par pixel)
    pub const fn byte_size(self) -> u32 {
        self.pixels() * 3
    }

    pub(crate) const fn code(self) -> i32 {
        self.code
    }
}

pub const QQVGA: ImageResolution = ImageResolution::catalog(160, 120, 1);
pub const QVGA: ImageResolution = ImageResolution::catalog(320, 240, 2);
pub const VGA: ImageResolution = ImageResolution::catalog(640, 480, 3);
pub const CAM1MP: ImageResolution = ImageResolution::catalog(1296, 730, 4);
pub const CAMHD: ImageResolution = ImageResolution::catalog(1920, 1080, 5);
pub const CAM5MP: ImageResolution = ImageResolution::catalog(2592, 1944, 6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageDataError {
    /// La taille du tampon ne correspond pas à la résolution annoncée
    SizeMismatch { expected: usize, got: usize },
}

impl Display for ImageDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for ImageDataError {}

/// Tampon d'image possédé, couleur (3 octets par pixel, ordre RGB) ou
/// niveaux de gris (1 octet par pixel)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    data: Vec<u8>,
    resolution: ImageResolution,
    gray: bool,
}

impl Image {
    pub fn from_raw(
        data: Vec<u8>,
        resolution: ImageResolution,
        gray: bool,
    ) -> Result<Self, ImageDataError> {
        let expected = if gray {
            resolution.pixels() as usize
        } else {
            resolution.byte_size() as usize
        };
        if data.len() != expected {
            return Err(ImageDataError::SizeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            resolution,
            gray,
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn resolution(&self) -> ImageResolution {
        self.resolution
    }

    pub fn is_gray(&self) -> bool {
        self.gray
    }

    /// `None` si l'image est en niveaux de gris
    pub fn to_rgb_image(&self) -> Option<RgbImage> {
        if self.gray {
            return None;
        }
        RgbImage::from_raw(self.resolution.width, self.resolution.height, self.data.clone())
    }

    /// `None` si l'image est en couleur
    pub fn to_gray_image(&self) -> Option<GrayImage> {
        if !self.gray {
            return None;
        }
        GrayImage::from_raw(self.resolution.width, self.resolution.height, self.data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_sizes() {
        assert_eq!(QVGA.pixels(), 320 * 240);
        assert_eq!(QVGA.byte_size(), 320 * 240 * 3);
        assert_eq!(ImageResolution::custom(10, 4).pixels(), 40);
    }

    #[test]
    fn test_from_raw_checks_length() {
        let resolution = ImageResolution::custom(2, 2);
        assert!(Image::from_raw(vec![0; 12], resolution, false).is_ok());
        assert!(Image::from_raw(vec![0; 4], resolution, true).is_ok());
        assert_eq!(
            Image::from_raw(vec![0; 5], resolution, true).err(),
            Some(ImageDataError::SizeMismatch {
                expected: 4,
                got: 5
            })
        );
    }

    #[test]
    fn test_image_crate_conversions() {
        let resolution = ImageResolution::custom(2, 1);
        let color = Image::from_raw(vec![1, 2, 3, 4, 5, 6], resolution, false).unwrap();
        let rgb = color.to_rgb_image().unwrap();
        assert_eq!(rgb.get_pixel(1, 0).0, [4, 5, 6]);
        assert!(color.to_gray_image().is_none());

        let gray = Image::from_raw(vec![9, 8], resolution, true).unwrap();
        assert_eq!(gray.to_gray_image().unwrap().get_pixel(0, 0).0, [9]);
    }
}
