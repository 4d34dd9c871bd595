use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EmailAddress {
    address: String,
    display_name: Option<String>,
}

impl EmailAddress {
    pub const fn new_unchecked(address: String) -> Self {
        Self {
            address,
            display_name: None,
        }
    }
    pub fn into_string(self) -> String {
        self.address
    }
    pub fn as_str(&self) -> &str {
        self.address.as_str()
    }
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

#[derive(Debug, Error)]
#[error("Invalid E-Mail address")]
pub struct EmailAddressParseError;

impl FromStr for EmailAddress {
    type Err = EmailAddressParseError;
    fn from_str(s: &str) -> Result<EmailAddress, Self::Err> {
        let info = mailparse::addrparse(s)
            .ok()
            .and_then(|list| list.extract_single_info())
            .ok_or(EmailAddressParseError)?;
        // Addresses are compared case-insensitively
        Ok(Self {
            address: info.addr.to_lowercase(),
            display_name: info.display_name,
        })
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let EmailAddress {
            address,
            display_name,
        } = self;
        if let Some(display_name) = &display_name {
            write!(
                f,
                r#""{display_name}" <{address}>"#,
                display_name = display_name.replace('"', r#"\""#)
            )
        } else {
            write!(f, "{address}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lowercases_address() {
        let email: EmailAddress = "Owner@Example.COM".parse().unwrap();
        assert_eq!("owner@example.com", email.as_str());
    }

    #[test]
    fn parse_with_display_name() {
        let email: EmailAddress = r#""Shop Owner" <shop@example.com>"#.parse().unwrap();
        assert_eq!("shop@example.com", email.as_str());
        assert_eq!(Some("Shop Owner"), email.display_name());
        assert_eq!(r#""Shop Owner" <shop@example.com>"#, email.to_string());
    }

    #[test]
    fn reject_garbage() {
        assert!("not an address".parse::<EmailAddress>().is_err());
    }
}
