use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::entities::Place;

pub use fast_chemail::is_valid_email;

/// Maximum number of characters of a text message.
pub const MAX_MESSAGE_LEN: usize = 4_000;

lazy_static! {
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9]{6,15}$").unwrap();
    static ref CODE_REGEX: Regex = Regex::new(r"^[A-Z0-9_-]{3,32}$").unwrap();
}

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

/// Phone numbers are accepted with blanks, dashes and parentheses
/// as long as 6 to 15 digits with an optional leading `+` remain.
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '/'))
        .collect()
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(&normalize_phone(phone))
}

/// Promo codes are compared case-insensitively.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaceInvalidation {
    #[error("Invalid name")]
    Name,
    #[error("Invalid category")]
    Category,
    #[error("Invalid position")]
    Position,
    #[error("Invalid phone number")]
    Phone,
}

impl Validate for Place {
    type Error = PlaceInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !is_valid_name(&self.name) {
            return Err(Self::Error::Name);
        }
        if self.category.trim().is_empty() {
            return Err(Self::Error::Category);
        }
        if let Some(pos) = self.pos {
            if !pos.is_valid() {
                return Err(Self::Error::Position);
            }
        }
        if self
            .phones
            .iter()
            .chain(self.whatsapp.iter())
            .any(|p| !is_valid_phone(p))
        {
            return Err(Self::Error::Phone);
        }
        Ok(())
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

impl AutoCorrect for Place {
    fn auto_correct(mut self) -> Self {
        self.name = self.name.trim().to_owned();
        self.category = self.category.trim().to_lowercase();
        self.description = non_empty(self.description);
        self.city = non_empty(self.city);
        self.address = non_empty(self.address);
        self.phones = self
            .phones
            .iter()
            .map(|p| normalize_phone(p.trim()))
            .filter(|p| !p.is_empty())
            .collect();
        self.whatsapp = non_empty(self.whatsapp).map(|p| normalize_phone(&p));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dalil_entities::{builders::*, geo::MapPoint};

    #[test]
    fn phone_numbers() {
        assert!(is_valid_phone("+963 11 223344"));
        assert!(is_valid_phone("0944-123-456"));
        assert!(is_valid_phone("(011) 2233445"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("+1234567890123456"));
        assert!(!is_valid_phone("++123456"));
        assert!(!is_valid_phone("call me"));
    }

    #[test]
    fn codes() {
        assert_eq!("SUMMER_24", normalize_code(" summer_24 "));
        assert!(is_valid_code("SUMMER_24"));
        assert!(is_valid_code("A-1"));
        assert!(!is_valid_code("AB"));
        assert!(!is_valid_code("summer"));
        assert!(!is_valid_code("WITH SPACE"));
        assert!(!is_valid_code(&"X".repeat(33)));
    }

    #[test]
    fn validate_place() {
        let place = Place::build().name("Bakery").finish();
        assert!(place.validate().is_ok());

        let place = Place::build().name("  ").finish();
        assert_eq!(Err(PlaceInvalidation::Name), place.validate());

        let mut place = Place::build().name("Bakery").finish();
        place.pos = Some(MapPoint::new_unchecked(91.0, 0.0));
        assert_eq!(Err(PlaceInvalidation::Position), place.validate());

        let mut place = Place::build().name("Bakery").finish();
        place.whatsapp = Some("abc".into());
        assert_eq!(Err(PlaceInvalidation::Phone), place.validate());
    }

    #[test]
    fn auto_correct_place() {
        let mut place = Place::build().name(" Bakery ").category(" Food ").finish();
        place.city = Some("   ".into());
        place.phones = vec![" 0944 123 456 ".into(), "".into()];
        let place = place.auto_correct();
        assert_eq!("Bakery", place.name);
        assert_eq!("food", place.category);
        assert_eq!(None, place.city);
        assert_eq!(vec!["0944123456".to_string()], place.phones);
    }
}
