//! Traitements d'images côté client : conversions couleur/gris/HSI et
//! opérateurs de contour.

use std::error::Error;
use std::fmt::Display;

use imageproc::filter::laplacian_filter;
use imageproc::gradients::sobel_gradients;

use crate::image_data::{Image, ImageDataError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageProcessingError {
    /// L'opération attendait l'autre format (couleur vs niveaux de gris)
    WrongFormat,
    Data(ImageDataError),
}

impl Display for ImageProcessingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for ImageProcessingError {}

/// Moyenne des trois canaux, comme la conversion native
pub fn color_to_gray(image: &Image) -> Result<Image, ImageProcessingError> {
    if image.is_gray() {
        return Err(ImageProcessingError::WrongFormat);
    }
    let gray: Vec<u8> = image
        .data()
        .chunks_exact(3)
        .map(|rgb| ((u16::from(rgb[0]) + u16::from(rgb[1]) + u16::from(rgb[2])) / 3) as u8)
        .collect();
    Image::from_raw(gray, image.resolution(), true).map_err(ImageProcessingError::Data)
}

/// Recopie le canal gris sur les trois canaux couleur
pub fn gray_to_color(image: &Image) -> Result<Image, ImageProcessingError> {
    if !image.is_gray() {
        return Err(ImageProcessingError::WrongFormat);
    }
    let color: Vec<u8> = image
        .data()
        .iter()
        .flat_map(|&value| [value, value, value])
        .collect();
    Image::from_raw(color, image.resolution(), false).map_err(ImageProcessingError::Data)
}

/// Teinte sur `0..=255` (0 aussi pour un pixel sans teinte)
pub fn rgb_to_hue(r: u8, g: u8, b: u8) -> u8 {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max == min {
        return 0;
    }
    let delta = f64::from(max) - f64::from(min);
    let (rf, gf, bf) = (f64::from(r), f64::from(g), f64::from(b));
    let hue_degrees = if max == r {
        60.0 * ((gf - bf) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((bf - rf) / delta + 2.0)
    } else {
        60.0 * ((rf - gf) / delta + 4.0)
    };
    (hue_degrees / 360.0 * 255.0).round() as u8
}

/// Conversion (teinte, saturation, intensité), chaque composante sur `0..=255`
pub fn rgb_to_hsi(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let sum = u16::from(r) + u16::from(g) + u16::from(b);
    let intensity = (sum / 3) as u8;
    let saturation = if sum == 0 {
        0
    } else {
        let min = u16::from(r.min(g).min(b));
        (255.0 * (1.0 - 3.0 * f64::from(min) / f64::from(sum))).round() as u8
    };
    (rgb_to_hue(r, g, b), saturation, intensity)
}

/// Norme du gradient de Sobel, sur une image en niveaux de gris
pub fn sobel(image: &Image) -> Result<Image, ImageProcessingError> {
    let gray = image
        .to_gray_image()
        .ok_or(ImageProcessingError::WrongFormat)?;
    let gradients = sobel_gradients(&gray);
    let data: Vec<u8> = gradients
        .pixels()
        .map(|p| (p.0[0] / 4).min(255) as u8)
        .collect();
    Image::from_raw(data, image.resolution(), true).map_err(ImageProcessingError::Data)
}

/// Valeur absolue du laplacien, sur une image en niveaux de gris
pub fn laplace(image: &Image) -> Result<Image, ImageProcessingError> {
    let gray = image
        .to_gray_image()
        .ok_or(ImageProcessingError::WrongFormat)?;
    let filtered = laplacian_filter(&gray);
    let data: Vec<u8> = filtered
        .pixels()
        .map(|p| p.0[0].unsigned_abs().min(255) as u8)
        .collect();
    Image::from_raw(data, image.resolution(), true).map_err(ImageProcessingError::Data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_data::ImageResolution;

    fn gray_image(width: u32, height: u32, value: u8) -> Image {
        let resolution = ImageResolution::custom(width, height);
        Image::from_raw(vec![value; (width * height) as usize], resolution, true).unwrap()
    }

    #[test]
    fn test_color_to_gray_averages() {
        let resolution = ImageResolution::custom(2, 1);
        let color = Image::from_raw(vec![30, 60, 90, 0, 0, 255], resolution, false).unwrap();
        let gray = color_to_gray(&color).unwrap();
        assert_eq!(gray.data(), &[60, 85]);
        assert!(gray.is_gray());
    }

    #[test]
    fn test_gray_to_color_replicates() {
        let gray = gray_image(2, 1, 7);
        let color = gray_to_color(&gray).unwrap();
        assert_eq!(color.data(), &[7, 7, 7, 7, 7, 7]);
    }

    #[test]
    fn test_format_checks() {
        let gray = gray_image(2, 2, 0);
        assert_eq!(
            color_to_gray(&gray).err(),
            Some(ImageProcessingError::WrongFormat)
        );
        let color = gray_to_color(&gray).unwrap();
        assert_eq!(
            gray_to_color(&color).err(),
            Some(ImageProcessingError::WrongFormat)
        );
        assert_eq!(sobel(&color).err(), Some(ImageProcessingError::WrongFormat));
    }

    #[test]
    fn test_hue_of_primaries() {
        assert_eq!(rgb_to_hue(255, 0, 0), 0);
        // vert : 120° sur 360 -> 85 sur 255
        assert_eq!(rgb_to_hue(0, 255, 0), 85);
        // bleu : 240° -> 170
        assert_eq!(rgb_to_hue(0, 0, 255), 170);
        // sans teinte
        assert_eq!(rgb_to_hue(128, 128, 128), 0);
    }

    #[test]
    fn test_hsi_components() {
        let (_, s, i) = rgb_to_hsi(255, 0, 0);
        assert_eq!((s, i), (255, 85));
        let (h, s, i) = rgb_to_hsi(100, 100, 100);
        assert_eq!((h, s, i), (0, 0, 100));
        assert_eq!(rgb_to_hsi(0, 0, 0), (0, 0, 0));
    }

    #[test]
    fn test_edge_operators_on_flat_image_are_zero() {
        let flat = gray_image(8, 8, 77);
        assert!(sobel(&flat).unwrap().data().iter().all(|&v| v == 0));
        assert!(laplace(&flat).unwrap().data().iter().all(|&v| v == 0));
    }
}
