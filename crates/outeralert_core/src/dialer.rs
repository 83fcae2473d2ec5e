//! Emergency responder dialing.
//!
//! # Responsibility
//! - Produce call confirmations for first/other responder actions.
//! - Hold the fixed emergency hotline roster.
//! - Build platform dial requests with formatting separators stripped.
//!
//! # Invariants
//! - A dial action never proceeds without a non-blank number.
//! - Confirmation text embeds the number exactly as supplied (trimmed);
//!   normalization only touches the platform dial string.
//! - Dial requests always ask the platform to prompt before placing a call.

use crate::error::{require_filled, DomainResult};
use once_cell::sync::Lazy;
use regex::Regex;

static DIAL_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-().]+").expect("valid dial separator regex"));

/// Confirms a call to the user's first emergency contact.
pub fn call_first_responder(number: &str) -> DomainResult<String> {
    let number = require_filled(number, "number")?;
    Ok(format!("Calling first responder at {number}"))
}

/// Confirms a call to any other emergency contact.
pub fn call_other_responder(number: &str) -> DomainResult<String> {
    let number = require_filled(number, "number")?;
    Ok(format!("Calling other responder at {number}"))
}

/// Strips whitespace, hyphens, dots and parentheses from a dial string.
///
/// Only formatting is removed. Anything else, including a leading `+`,
/// passes through untouched; whether the result is dialable is the
/// platform's call.
pub fn normalize_dial_string(raw: &str) -> String {
    DIAL_SEPARATOR_RE.replace_all(raw.trim(), "").into_owned()
}

/// Instruction handed to the platform shell to place a phone call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialRequest {
    /// Normalized number to dial.
    pub number: String,
    /// Ask the platform to confirm before dialing.
    pub prompt: bool,
}

/// Builds a prompted dial request from user-supplied input.
pub fn dial_request(number: &str) -> DomainResult<DialRequest> {
    let number = require_filled(number, "number")?;
    Ok(DialRequest {
        number: normalize_dial_string(number),
        prompt: true,
    })
}

/// Emergency services reachable from the SOS screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Responder {
    Paramedic,
    Police,
    FireFighters,
    PublicService,
    Maritimes,
    StJohn,
}

impl Responder {
    /// Roster order as presented on the SOS screen.
    pub const ALL: [Responder; 6] = [
        Responder::Paramedic,
        Responder::Police,
        Responder::FireFighters,
        Responder::PublicService,
        Responder::Maritimes,
        Responder::StJohn,
    ];

    /// Display label for the roster entry.
    pub fn label(self) -> &'static str {
        match self {
            Self::Paramedic => "PARAMEDIC",
            Self::Police => "POLICE",
            Self::FireFighters => "FIRE FIGHTERS",
            Self::PublicService => "PUBLIC SERVICE",
            Self::Maritimes => "MARITIMES",
            Self::StJohn => "ST.JOHN",
        }
    }

    /// Hotline number for the service.
    ///
    /// Every national service shares the 999 line; St. John Ambulance keeps
    /// its own direct number.
    pub fn hotline(self) -> &'static str {
        match self {
            Self::StJohn => "0137056504",
            _ => "999",
        }
    }

    /// Looks a roster entry up by its display label.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|responder| responder.label().eq_ignore_ascii_case(normalized))
    }

    /// Prompted dial request for this service's hotline.
    pub fn dial(self) -> DialRequest {
        DialRequest {
            number: self.hotline().to_string(),
            prompt: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        call_first_responder, call_other_responder, dial_request, normalize_dial_string, Responder,
    };
    use crate::error::{DomainError, ErrorKind};

    #[test]
    fn confirmations_embed_the_number() {
        assert_eq!(
            call_first_responder("999").unwrap(),
            "Calling first responder at 999"
        );
        assert_eq!(
            call_other_responder("0137056504").unwrap(),
            "Calling other responder at 0137056504"
        );
    }

    #[test]
    fn blank_numbers_are_rejected() {
        for input in ["", "   "] {
            let err = call_first_responder(input).unwrap_err();
            assert!(matches!(err, DomainError::BlankField("number")));
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert!(call_other_responder(input).is_err());
        }
    }

    #[test]
    fn normalization_strips_formatting_only() {
        assert_eq!(normalize_dial_string("(03) 7056-504"), "037056504");
        assert_eq!(normalize_dial_string(" 999 "), "999");
        assert_eq!(normalize_dial_string("+60.12-345"), "+6012345");
        assert_eq!(normalize_dial_string("abc"), "abc");
    }

    #[test]
    fn dial_requests_always_prompt() {
        let request = dial_request(" 013-705 6504 ").unwrap();
        assert_eq!(request.number, "0137056504");
        assert!(request.prompt);
    }

    #[test]
    fn roster_shares_the_national_line() {
        for responder in Responder::ALL {
            match responder {
                Responder::StJohn => assert_eq!(responder.hotline(), "0137056504"),
                _ => assert_eq!(responder.hotline(), "999"),
            }
        }
    }

    #[test]
    fn roster_lookup_by_label() {
        assert_eq!(Responder::parse("fire fighters"), Some(Responder::FireFighters));
        assert_eq!(Responder::parse("COAST GUARD"), None);
        let request = Responder::Police.dial();
        assert_eq!(request.number, "999");
        assert!(request.prompt);
    }
}
