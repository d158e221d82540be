//! Construction des conversions affines entre deux repères 2D, typiquement le
//! repère "monde" de l'utilisateur et le repère pixel de l'écran.
//!
//! Chaque constructeur prend deux paires de points de contrôle qui se
//! correspondent (`source` et `dest`), valide une seule fois ses entrées, puis
//! renvoie une fonction pure qui capture les paramètres dérivés. La fonction
//! renvoyée est totale : toute la validation a lieu à la construction.

use std::error::Error;
use std::fmt::Display;

use crate::geometry::{IntPoint, Mat2, Point};

/// Conversion pure d'un repère continu vers un autre
pub type PointMap = Box<dyn Fn(Point) -> Point>;

/// Conversion d'un point monde vers un pixel de l'écran
pub type DisplayPointMap = Box<dyn Fn(Point) -> IntPoint>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordMapError {
    /// Vecteur de contrôle source de longueur nulle (ou de composante nulle
    /// pour la version étirement) : l'échelle serait une division par zéro
    DegenerateSourcePair,
    /// Les deux points de contrôle destination sont confondus
    DegenerateDestPair,
    /// Une coordonnée de contrôle n'est pas un nombre fini
    NonFiniteControlPoint,
}

impl Display for CoordMapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for CoordMapError {}

fn check_finite(points: [Point; 4]) -> Result<(), CoordMapError> {
    if points.iter().all(Point::is_finite) {
        Ok(())
    } else {
        Err(CoordMapError::NonFiniteControlPoint)
    }
}

/// Construit une similitude (rotation + échelle uniforme + translation,
/// réflexion optionnelle) envoyant `source.0` sur `dest.0` et `source.1` sur
/// `dest.1`.
///
/// À utiliser quand les axes des deux repères ne sont pas forcément alignés,
/// par exemple pour une calibration par deux points quelconques. Avec
/// `mirror`, le plan est d'abord réfléchi par rapport à la droite passant par
/// `source.0` dans la direction de l'axe de contrôle : les points situés sur
/// cet axe sont envoyés au même endroit avec ou sans réflexion.
pub fn make_linear_point_mapping(
    source: (Point, Point),
    dest: (Point, Point),
    mirror: bool,
) -> Result<PointMap, CoordMapError> {
    check_finite([source.0, source.1, dest.0, dest.1])?;
    let control = source.1.sub(source.0);
    let dest_control = dest.1.sub(dest.0);
    if control.magnitude() == 0.0 {
        return Err(CoordMapError::DegenerateSourcePair);
    }
    if dest_control.magnitude() == 0.0 {
        return Err(CoordMapError::DegenerateDestPair);
    }

    let axis_angle = control.angle();
    let rotation = dest_control.angle() - axis_angle;
    let scale = dest_control.magnitude() / control.magnitude();
    let origin = source.0;
    let dest_origin = dest.0;

    Ok(Box::new(move |p: Point| {
        let mut v = p.sub(origin);
        if mirror {
            // Réflexion par rapport à l'axe de contrôle : on tourne de deux
            // fois l'écart angulaire, en sens inverse
            let gap = v.angle() - axis_angle;
            v = v.rotate(-(gap * 2.0));
        }
        dest_origin.add(v.rotate(rotation).scale(scale))
    }))
}

/// Construit un étirement aligné sur les axes (échelles x et y indépendantes,
/// sans rotation) envoyant `source.0` sur `dest.0` et `source.1` sur `dest.1`.
///
/// Sert à plaquer un rectangle "monde" déclaré par l'utilisateur sur le
/// rectangle pixel de l'écran. L'inversion de l'axe y des écrans s'obtient en
/// passant une paire destination dont le delta y est négatif, comme le fait
/// [`crate::lcd::Lcd::point_map_for_world`].
pub fn make_coord_map(
    source: (Point, Point),
    dest: (Point, Point),
) -> Result<PointMap, CoordMapError> {
    check_finite([source.0, source.1, dest.0, dest.1])?;
    let source_delta = source.1.sub(source.0);
    let dest_delta = dest.1.sub(dest.0);
    if source_delta.dx() == 0.0 || source_delta.dy() == 0.0 {
        return Err(CoordMapError::DegenerateSourcePair);
    }
    if dest_delta.magnitude() == 0.0 {
        return Err(CoordMapError::DegenerateDestPair);
    }

    let stretch = Mat2::new(
        dest_delta.dx() / source_delta.dx(),
        0.0,
        0.0,
        dest_delta.dy() / source_delta.dy(),
    );
    let origin = source.0;
    let dest_origin = dest.0;

    Ok(Box::new(move |p: Point| {
        dest_origin.add(p.sub(origin).mul_matrix(&stretch))
    }))
}
