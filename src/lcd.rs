//! Écran LCD : texte, primitives de dessin, et conversion de coordonnées.
//!
//! Toutes les primitives de dessin prennent des `Point` dans le repère monde
//! de l'utilisateur et les passent dans la fonction de conversion active (ou
//! dans celle fournie à l'appel) avant de transmettre des pixels entiers au
//! binding natif.

use std::error::Error;
use std::fmt::Display;

use crate::coord_map::{make_coord_map, CoordMapError, DisplayPointMap};
use crate::geometry::{IntPoint, Point};
use crate::prelude::colors::Color;
use crate::prelude::*;

/// Côté du carré monde conventionnel couvert par la conversion par défaut
pub const WORLD_SIZE: f64 = 2000.0;

/// Polices acceptées par l'écran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    Times,
    Courier,
}

impl Font {
    fn code(self) -> i32 {
        match self {
            Font::Helvetica => 0,
            Font::Times => 1,
            Font::Courier => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Bold,
    Italics,
}

impl FontStyle {
    fn code(self) -> i32 {
        match self {
            FontStyle::Normal => 0,
            FontStyle::Bold => 1,
            FontStyle::Italics => 2,
        }
    }
}

/// Contrat que doit remplir la liaison native pour l'écran.
/// Les appels parlent en pixels et en codes de retour C (0 = ok).
pub trait LcdDriver {
    /// Taille de l'écran en pixels, interrogeable avant tout dessin
    fn size(&mut self) -> (i32, i32);
    fn clear(&mut self) -> i32;
    fn refresh(&mut self) -> i32;
    fn print(&mut self, text: &str) -> i32;
    fn set_pos(&mut self, row: i32, column: i32) -> i32;
    fn pos(&mut self) -> (i32, i32);
    fn set_color(&mut self, foreground: u32, background: u32) -> i32;
    fn set_font(&mut self, font: i32, style: i32) -> i32;
    fn set_font_size(&mut self, size: i32) -> i32;
    fn set_mode(&mut self, mode: i32) -> i32;
    fn menu(&mut self, entries: [&str; 4]) -> i32;
    fn pixel(&mut self, x: i32, y: i32, color: u32) -> i32;
    fn read_pixel(&mut self, x: i32, y: i32) -> u32;
    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: u32) -> i32;
    fn area(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: u32, filled: bool) -> i32;
    fn circle(&mut self, x: i32, y: i32, size: i32, color: u32, filled: bool) -> i32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LcdError {
    /// Code de retour non nul de la liaison native
    Device { code: i32 },
    Map(CoordMapError),
}

impl Display for LcdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for LcdError {}

fn device_ok(code: i32) -> Result<(), LcdError> {
    if code == 0 {
        Ok(())
    } else {
        Err(LcdError::Device { code })
    }
}

fn pack_color((r, g, b): Color) -> u32 {
    u32::from(r) << 16 | u32::from(g) << 8 | u32::from(b)
}

fn unpack_color(raw: u32) -> Color {
    ((raw >> 16) as u8, (raw >> 8) as u8, raw as u8)
}

/// Conversion par défaut : arrondi direct, correspondance 1:1 monde/pixel
pub fn default_point_map() -> DisplayPointMap {
    Box::new(|p: Point| p.round())
}

pub struct Lcd<D: LcdDriver> {
    driver: D,
    point_map: DisplayPointMap,
}

impl<D: LcdDriver> Lcd<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            point_map: default_point_map(),
        }
    }

    /// Taille de l'écran en pixels
    pub fn size(&mut self) -> (i32, i32) {
        self.driver.size()
    }

    // ---------- conversion de coordonnées ----------

    /// Construit la conversion envoyant le rectangle monde
    /// `[bottom_left, top_right]` sur le rectangle pixel de l'écran.
    ///
    /// Le pixel en bas à gauche `(0, hauteur-1)` correspond à `bottom_left` et
    /// le pixel en haut à droite `(largeur-1, 0)` à `top_right` : l'axe y du
    /// monde monte, celui de l'écran descend. Le résultat est arrondi au pixel.
    pub fn point_map_for_world(
        &mut self,
        bottom_left: Point,
        top_right: Point,
    ) -> Result<DisplayPointMap, LcdError> {
        let (width, height) = self.driver.size();
        let stretch = make_coord_map(
            (bottom_left, top_right),
            (
                Point::new(0.0, f64::from(height - 1)),
                Point::new(f64::from(width - 1), 0.0),
            ),
        )
        .map_err(LcdError::Map)?;
        Ok(Box::new(move |p: Point| stretch(p).round()))
    }

    /// Comme [`Lcd::point_map_for_world`] avec l'origine du monde en `(0, 0)`
    pub fn point_map_for_world_size(
        &mut self,
        top_right: Point,
    ) -> Result<DisplayPointMap, LcdError> {
        self.point_map_for_world(Point::new(0.0, 0.0), top_right)
    }

    /// Conversion pré-construite pour le carré monde conventionnel
    /// de `2000x2000`
    pub fn default_world_map(&mut self) -> Result<DisplayPointMap, LcdError> {
        self.point_map_for_world_size(Point::new(WORLD_SIZE, WORLD_SIZE))
    }

    /// Installe la conversion utilisée par toutes les primitives de dessin.
    /// Une conversion cassée ne peut pas arriver ici : sa construction a déjà
    /// échoué en amont.
    pub fn set_point_map(&mut self, map: DisplayPointMap) {
        self.point_map = map;
    }

    /// Convertit un point monde en pixel, avec la conversion active ou celle
    /// passée en paramètre. Le paramètre ne modifie jamais la conversion
    /// installée.
    pub fn map_point(&self, position: Point, map_override: Option<&DisplayPointMap>) -> IntPoint {
        match map_override {
            Some(map) => map(position),
            None => (self.point_map)(position),
        }
    }

    // ---------- primitives de dessin ----------

    pub fn pixel(
        &mut self,
        position: Point,
        color: Color,
        map_override: Option<&DisplayPointMap>,
    ) -> Result<(), LcdError> {
        let pix = self.map_point(position, map_override);
        device_ok(self.driver.pixel(pix.x, pix.y, pack_color(color)))
    }

    /// Couleur du pixel sous un point monde
    pub fn get_pixel(&mut self, position: Point, map_override: Option<&DisplayPointMap>) -> Color {
        let pix = self.map_point(position, map_override);
        unpack_color(self.driver.read_pixel(pix.x, pix.y))
    }

    pub fn line(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        map_override: Option<&DisplayPointMap>,
    ) -> Result<(), LcdError> {
        let a = self.map_point(from, map_override);
        let b = self.map_point(to, map_override);
        device_ok(self.driver.line(a.x, a.y, b.x, b.y, pack_color(color)))
    }

    /// Rectangle défini par deux coins opposés
    pub fn area(
        &mut self,
        corner_a: Point,
        corner_b: Point,
        color: Color,
        filled: bool,
        map_override: Option<&DisplayPointMap>,
    ) -> Result<(), LcdError> {
        let a = self.map_point(corner_a, map_override);
        let b = self.map_point(corner_b, map_override);
        device_ok(
            self.driver
                .area(a.x, a.y, b.x, b.y, pack_color(color), filled),
        )
    }

    /// Cercle de centre monde et de rayon en pixels.
    /// Le rayon n'est pas converti : une conversion à échelles x/y
    /// indépendantes n'a pas d'image unique pour une longueur.
    pub fn circle(
        &mut self,
        center: Point,
        radius: i32,
        color: Color,
        filled: bool,
        map_override: Option<&DisplayPointMap>,
    ) -> Result<(), LcdError> {
        let c = self.map_point(center, map_override);
        device_ok(
            self.driver
                .circle(c.x, c.y, radius, pack_color(color), filled),
        )
    }

    // ---------- texte ----------

    pub fn print(&mut self, text: &str) -> Result<(), LcdError> {
        device_ok(self.driver.print(text))
    }

    pub fn print_at(&mut self, row: i32, column: i32, text: &str) -> Result<(), LcdError> {
        device_ok(self.driver.set_pos(row, column))?;
        device_ok(self.driver.print(text))
    }

    pub fn set_pos(&mut self, row: i32, column: i32) -> Result<(), LcdError> {
        device_ok(self.driver.set_pos(row, column))
    }

    /// Position courante du curseur texte `(ligne, colonne)`
    pub fn pos(&mut self) -> (i32, i32) {
        self.driver.pos()
    }

    pub fn set_color(&mut self, foreground: Color, background: Color) -> Result<(), LcdError> {
        device_ok(
            self.driver
                .set_color(pack_color(foreground), pack_color(background)),
        )
    }

    pub fn set_font(&mut self, font: Font, style: FontStyle) -> Result<(), LcdError> {
        device_ok(self.driver.set_font(font.code(), style.code()))
    }

    /// Ne fonctionne pas avec x11 sous linux
    pub fn set_font_size(&mut self, size: i32) -> Result<(), LcdError> {
        device_ok(self.driver.set_font_size(size))
    }

    pub fn set_mode(&mut self, mode: i32) -> Result<(), LcdError> {
        device_ok(self.driver.set_mode(mode))
    }

    /// Libellés des quatre touches programmables affichées en bas d'écran
    pub fn menu(&mut self, entries: [&str; 4]) -> Result<(), LcdError> {
        device_ok(self.driver.menu(entries))
    }

    pub fn clear(&mut self) -> Result<(), LcdError> {
        device_ok(self.driver.clear())
    }

    pub fn refresh(&mut self) -> Result<(), LcdError> {
        device_ok(self.driver.refresh())
    }
}
