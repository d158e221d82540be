//! Couche client typée au-dessus de l'interface native d'un simulateur de robot.
//!
//! Le binding natif (écran LCD, touches, caméra, capteurs de distance, moteurs,
//! contrôle en vitesse) fait tout le vrai travail ; cette couche rend les appels
//! bruts plus sûrs et plus agréables : validation des entrées, conversion des
//! codes de retour en `Result`, types unités, et un petit état côté client
//! (résolution caméra courante, fonction de conversion de coordonnées courante
//! de l'écran, configuration courante du lidar).
//!
//! Le binding lui-même est représenté par des traits (un par sous-système),
//! implémentés d'un côté par la vraie liaison native et de l'autre par des
//! bouchons dans les tests.

pub mod camera;
pub mod coord_map;
pub mod geometry;
pub mod image_data;
pub mod image_processing;
pub mod keys;
pub mod lcd;
pub mod lidar;
pub mod log_manager;
pub mod motors;
pub mod os_funcs;
pub mod prelude;
pub mod psd;
pub mod sim;
pub mod units;
pub mod vw;
