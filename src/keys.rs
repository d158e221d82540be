//! Touches programmables et écran tactile.

/// Code natif renvoyé quand aucune touche n'est appuyée
const NOKEY_CODE: i32 = 0;
/// Masque natif acceptant n'importe quelle touche
const ANYKEY_MASK: i32 = 0x0F;

/// Les quatre touches programmables sous l'écran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Key1,
    Key2,
    Key3,
    Key4,
}

impl Key {
    fn code(self) -> i32 {
        match self {
            Key::Key1 => 0x01,
            Key::Key2 => 0x02,
            Key::Key3 => 0x04,
            Key::Key4 => 0x08,
        }
    }

    fn from_code(code: i32) -> Option<Key> {
        match code {
            0x01 => Some(Key::Key1),
            0x02 => Some(Key::Key2),
            0x04 => Some(Key::Key3),
            0x08 => Some(Key::Key4),
            _ => None,
        }
    }
}

/// Contrat que doit remplir la liaison native pour les touches
pub trait KeyDriver {
    /// Bloque jusqu'à l'appui d'une touche, renvoie son code
    fn get(&mut self) -> i32;
    /// Code de la touche actuellement appuyée, `0` sinon
    fn read(&mut self) -> i32;
    /// Bloque jusqu'à l'appui d'une touche du masque, renvoie son code
    fn wait(&mut self, mask: i32) -> i32;
    /// Bloque jusqu'à un toucher de l'écran, renvoie sa position en pixels
    fn get_xy(&mut self) -> (i32, i32);
    /// `(code, x, y)`, code `1` si aucun toucher en cours
    fn read_xy(&mut self) -> (i32, i32, i32);
}

pub struct Keys<D: KeyDriver> {
    driver: D,
}

impl<D: KeyDriver> Keys<D> {
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Bloque jusqu'à l'appui d'une touche
    pub fn get(&mut self) -> Option<Key> {
        Key::from_code(self.driver.get())
    }

    /// Touche actuellement appuyée, sans bloquer
    pub fn read(&mut self) -> Option<Key> {
        let code = self.driver.read();
        if code == NOKEY_CODE {
            return None;
        }
        Key::from_code(code)
    }

    /// Bloque jusqu'à l'appui d'une touche précise
    pub fn wait(&mut self, key: Key) {
        self.driver.wait(key.code());
    }

    /// Bloque jusqu'à l'appui de n'importe quelle touche
    pub fn wait_any(&mut self) -> Option<Key> {
        Key::from_code(self.driver.wait(ANYKEY_MASK))
    }

    /// Bloque jusqu'à un toucher de l'écran
    pub fn get_xy(&mut self) -> (i32, i32) {
        self.driver.get_xy()
    }

    /// Position du toucher en cours, sans bloquer
    pub fn read_xy(&mut self) -> Option<(i32, i32)> {
        let (code, x, y) = self.driver.read_xy();
        if code == 1 {
            // pas de toucher
            return None;
        }
        Some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubKeys {
        pressed: i32,
        touch: Option<(i32, i32)>,
        waited_masks: Vec<i32>,
    }

    impl KeyDriver for StubKeys {
        fn get(&mut self) -> i32 {
            self.pressed
        }
        fn read(&mut self) -> i32 {
            self.pressed
        }
        fn wait(&mut self, mask: i32) -> i32 {
            self.waited_masks.push(mask);
            self.pressed
        }
        fn get_xy(&mut self) -> (i32, i32) {
            self.touch.unwrap_or((0, 0))
        }
        fn read_xy(&mut self) -> (i32, i32, i32) {
            match self.touch {
                Some((x, y)) => (0, x, y),
                None => (1, 0, 0),
            }
        }
    }

    fn stub(pressed: i32, touch: Option<(i32, i32)>) -> Keys<StubKeys> {
        Keys::new(StubKeys {
            pressed,
            touch,
            waited_masks: Vec::new(),
        })
    }

    #[test]
    fn test_read_converts_codes() {
        assert_eq!(stub(0, None).read(), None);
        assert_eq!(stub(0x02, None).read(), Some(Key::Key2));
        assert_eq!(stub(0x08, None).read(), Some(Key::Key4));
    }

    #[test]
    fn test_wait_sends_mask() {
        let mut keys = stub(0x01, None);
        keys.wait(Key::Key3);
        assert_eq!(keys.wait_any(), Some(Key::Key1));
        assert_eq!(keys.driver.waited_masks, vec![0x04, 0x0F]);
    }

    #[test]
    fn test_read_xy_maps_no_touch_to_none() {
        assert_eq!(stub(0, None).read_xy(), None);
        assert_eq!(stub(0, Some((12, 34))).read_xy(), Some((12, 34)));
    }
}
