use crate::algos::caesar::rotate;
use crate::structs::Caesar;

pub trait Encryptor: Send + Sync {
    fn encrypt(&self, message: &str) -> String;
}

pub trait Decryptor: Send + Sync {
    fn decrypt(&self, message: &str) -> String;
}

impl Encryptor for Caesar {
    fn encrypt(&self, message: &str) -> String {
        rotate(message, self.shift())
    }
}

impl Decryptor for Caesar {
    fn decrypt(&self, message: &str) -> String {
        rotate(message, self.shift().inverse())
    }
}

#[cfg(test)]
mod tests {
    use super::{Decryptor, Encryptor};
    use crate::structs::{Caesar, Shift};

    #[test]
    fn decrypt_reverses_encrypt() {
        for raw in [-53, -1, 0, 3, 25, 26, 1_000_003] {
            let cipher = Caesar::new(Shift::new(raw));
            let encrypted = cipher.encrypt("Attack at Dawn!");
            assert_eq!(cipher.decrypt(&encrypted), "ATTACK AT DAWN!");
        }
    }

    #[test]
    fn decrypt_is_encrypt_with_negated_shift() {
        let cipher = Caesar::new(Shift::new(3));
        let negated = Caesar::new(Shift::new(-3));
        assert_eq!(cipher.decrypt("DWWDFN"), negated.encrypt("DWWDFN"));
        assert_eq!(cipher.decrypt("DWWDFN"), "ATTACK");
    }

    #[test]
    fn usable_behind_trait_objects() {
        let (encryptor, decryptor): (Box<dyn Encryptor>, Box<dyn Decryptor>) = (
            Box::new(Caesar::new(Shift::new(13))),
            Box::new(Caesar::new(Shift::new(13))),
        );
        assert_eq!(encryptor.encrypt("uryyb"), "HELLO");
        assert_eq!(decryptor.decrypt("URYYB"), "HELLO");
    }
}
