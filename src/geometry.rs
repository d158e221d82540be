//! Algèbre de points et de vecteurs pour passer du repère "monde" choisi par
//! l'utilisateur au repère pixel de l'écran LCD.
//!
//! Convention trigonométrique classique : les angles sont mesurés en radians,
//! dans le sens inverse des aiguilles d'une montre depuis l'axe x positif.

use nalgebra::{Matrix2, Vector2};

use crate::units::*;

/// Stockage interne des coordonnées continues
type Coords = Vector2<f64>;

/// Matrice 2x2 applicable à un `Vector` (multiplication à gauche uniquement)
pub type Mat2 = Matrix2<f64>;

// see https://doc.rust-lang.org/rust-by-example/generics/new_types.html
// Permet d'être sûr à la compilation que l'on ne confond pas une position,
// un déplacement et une coordonnée pixel

/// Position continue dans un repère 2D (monde ou écran)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(Coords);

/// Déplacement continu entre deux positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector(Coords);

/// Coordonnée pixel entière de l'écran.
/// Ne se construit qu'en discrétisant un `Point`, jamais directement
/// à partir de valeurs fractionnaires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntPoint {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self(Vector2::new(x, y))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Translation par un déplacement
    pub fn add(&self, displacement: Vector) -> Point {
        Point(self.0 + displacement.0)
    }

    /// Déplacement allant de `other` vers `self`
    pub fn sub(&self, other: Point) -> Vector {
        Vector(self.0 - other.0)
    }

    /// Translation par l'opposé d'un déplacement
    pub fn sub_vector(&self, displacement: Vector) -> Point {
        Point(self.0 - displacement.0)
    }

    pub fn scale(&self, factor: f64) -> Point {
        Point(self.0 * factor)
    }

    /// Distance à l'origine du repère
    pub fn magnitude(&self) -> f64 {
        self.0.norm()
    }

    /// Arrondi au pixel le plus proche (jamais une troncature)
    pub fn round(&self) -> IntPoint {
        IntPoint {
            x: self.0.x.round() as i32,
            y: self.0.y.round() as i32,
        }
    }

    pub fn floor(&self) -> IntPoint {
        IntPoint {
            x: self.0.x.floor() as i32,
            y: self.0.y.floor() as i32,
        }
    }

    pub fn ceil(&self) -> IntPoint {
        IntPoint {
            x: self.0.x.ceil() as i32,
            y: self.0.y.ceil() as i32,
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.0.x.is_finite() && self.0.y.is_finite()
    }
}

impl Vector {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self(Vector2::new(dx, dy))
    }

    /// Vecteur unitaire dans la direction donnée
    pub fn from_angle(angle: Rad) -> Vector {
        Self::from_polar(angle, 1.0)
    }

    /// Construction depuis la forme polaire
    pub fn from_polar(angle: Rad, magnitude: f64) -> Vector {
        Vector::new(angle.cos() * magnitude, angle.sin() * magnitude)
    }

    #[inline]
    pub fn dx(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn dy(&self) -> f64 {
        self.0.y
    }

    pub fn add(&self, other: Vector) -> Vector {
        Vector(self.0 + other.0)
    }

    pub fn sub(&self, other: Vector) -> Vector {
        Vector(self.0 - other.0)
    }

    pub fn neg(&self) -> Vector {
        Vector(-self.0)
    }

    pub fn scale(&self, factor: f64) -> Vector {
        Vector(self.0 * factor)
    }

    pub fn magnitude(&self) -> f64 {
        self.0.norm()
    }

    /// Angle du déplacement, dans `(-π, π]`.
    /// Le vecteur nul a un angle de zéro.
    pub fn angle(&self) -> Rad {
        Rad::atan2(self.0.y, self.0.x)
    }

    /// Rotation d'un angle signé (positif = sens trigonométrique)
    pub fn rotate(&self, angle: Rad) -> Vector {
        let rotation = Mat2::new(angle.cos(), -angle.sin(), angle.sin(), angle.cos());
        self.mul_matrix(&rotation)
    }

    /// Multiplication à gauche par une matrice 2x2 : `M @ v`
    pub fn mul_matrix(&self, matrix: &Mat2) -> Vector {
        Vector(matrix * self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const APPROX_LIMIT: f64 = 1e-10;

    fn approx_equal_vector(a: Vector, b: Vector, epsilon: f64) -> Result<(), String> {
        if (a.dx() - b.dx()).abs() >= epsilon || (a.dy() - b.dy()).abs() >= epsilon {
            return Err(format!("{:?} ~!= {:?}", a, b));
        }
        Ok(())
    }

    fn approx_equal_point(a: Point, b: Point, epsilon: f64) -> Result<(), String> {
        if (a.x() - b.x()).abs() >= epsilon || (a.y() - b.y()).abs() >= epsilon {
            return Err(format!("{:?} ~!= {:?}", a, b));
        }
        Ok(())
    }

    #[test]
    fn test_point_vector_arithmetic() {
        let p = Point::new(1.0, 2.0);
        let v = Vector::new(3.0, -1.0);
        approx_equal_point(p.add(v), Point::new(4.0, 1.0), APPROX_LIMIT).unwrap();
        approx_equal_point(p.add(v).sub_vector(v), p, APPROX_LIMIT).unwrap();
        approx_equal_vector(p.add(v).sub(p), v, APPROX_LIMIT).unwrap();
        approx_equal_vector(v.add(v.neg()), Vector::new(0.0, 0.0), APPROX_LIMIT).unwrap();
        approx_equal_vector(v.scale(2.0), Vector::new(6.0, -2.0), APPROX_LIMIT).unwrap();
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Vector::new(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Point::new(-3.0, 4.0).magnitude(), 5.0);
    }

    #[test]
    fn test_angle_convention() {
        assert_eq!(Vector::new(1.0, 0.0).angle(), Rad::ZERO);
        approx_equal_vector(
            Vector::new(1.0, 0.0).rotate(Rad::QUARTER_TURN),
            Vector::new(0.0, 1.0),
            APPROX_LIMIT,
        )
        .unwrap();
        // angle dans (-π, π]
        assert!((Vector::new(-1.0, 0.0).angle() - Rad::HALF_TURN).mag() < Rad::new(APPROX_LIMIT));
        assert!(
            (Vector::new(0.0, -1.0).angle() + Rad::QUARTER_TURN).mag() < Rad::new(APPROX_LIMIT)
        );
    }

    #[test]
    fn test_rotation_round_trip() {
        let v = Vector::new(2.5, -7.0);
        for angle in [0.3, -1.2, 3.0, Rad::HALF_TURN.val(), 10.0] {
            let angle = Rad::new(angle);
            approx_equal_vector(v.rotate(angle).rotate(-angle), v, APPROX_LIMIT).unwrap();
        }
    }

    #[test]
    fn test_polar_round_trip() {
        for v in [
            Vector::new(1.0, 0.0),
            Vector::new(-2.0, 5.0),
            Vector::new(0.0, -3.5),
        ] {
            approx_equal_vector(
                Vector::from_polar(v.angle(), v.magnitude()),
                v,
                APPROX_LIMIT,
            )
            .unwrap();
        }
    }

    #[test]
    fn test_from_angle_is_unit() {
        let v = Vector::from_angle(Rad::new(0.77));
        assert!((v.magnitude() - 1.0).abs() < APPROX_LIMIT);
    }

    #[test]
    fn test_matrix_application() {
        // rotation d'un quart de tour sous forme matricielle
        let m = Mat2::new(0.0, -1.0, 1.0, 0.0);
        approx_equal_vector(
            Vector::new(1.0, 0.0).mul_matrix(&m),
            Vector::new(0.0, 1.0),
            APPROX_LIMIT,
        )
        .unwrap();
        approx_equal_vector(
            Vector::new(2.0, 3.0).mul_matrix(&m),
            Vector::new(-3.0, 2.0),
            APPROX_LIMIT,
        )
        .unwrap();
    }

    #[test]
    fn test_discretisations() {
        let p = Point::new(1.4, 1.6);
        assert_eq!(p.round(), IntPoint { x: 1, y: 2 });
        assert_eq!(p.floor(), IntPoint { x: 1, y: 1 });
        assert_eq!(p.ceil(), IntPoint { x: 2, y: 2 });

        let n = Point::new(-1.4, -1.6);
        assert_eq!(n.round(), IntPoint { x: -1, y: -2 });
        assert_eq!(n.floor(), IntPoint { x: -2, y: -2 });
        assert_eq!(n.ceil(), IntPoint { x: -1, y: -1 });
    }
}
