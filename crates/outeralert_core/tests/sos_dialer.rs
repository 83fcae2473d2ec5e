use outeralert_core::dialer::{dial_request, normalize_dial_string};
use outeralert_core::{
    call_first_responder, call_other_responder, DomainError, ErrorKind, Responder,
};

#[test]
fn first_responder_calls_are_confirmed() {
    let confirmation = call_first_responder("999").unwrap();
    assert_eq!(confirmation, "Calling first responder at 999");
}

#[test]
fn other_responder_calls_are_confirmed() {
    let confirmation = call_other_responder("0137056504").unwrap();
    assert_eq!(confirmation, "Calling other responder at 0137056504");
}

#[test]
fn confirmations_use_the_trimmed_input_verbatim() {
    let confirmation = call_first_responder(" 013-705 6504 ").unwrap();
    assert_eq!(confirmation, "Calling first responder at 013-705 6504");
}

#[test]
fn missing_numbers_abort_the_call() {
    for input in ["", "   ", "\t"] {
        let err = call_first_responder(input).unwrap_err();
        assert!(matches!(err, DomainError::BlankField("number")));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.to_string(), "number is required");

        assert!(call_other_responder(input).is_err());
        assert!(dial_request(input).is_err());
    }
}

#[test]
fn dial_requests_normalize_and_prompt() {
    let request = dial_request("(60) 13-705 6504").unwrap();
    assert_eq!(request.number, "60137056504");
    assert!(request.prompt);
}

#[test]
fn normalization_never_invents_or_rejects() {
    assert_eq!(normalize_dial_string("999"), "999");
    assert_eq!(normalize_dial_string("0137.056.504"), "0137056504");
    assert_eq!(normalize_dial_string("+60 13 705"), "+6013705");
    // Non-numeric input passes through; dialability is the platform's call.
    assert_eq!(normalize_dial_string("help"), "help");
}

#[test]
fn the_roster_lists_six_services_in_screen_order() {
    let labels: Vec<&str> = Responder::ALL.iter().map(|r| r.label()).collect();
    assert_eq!(
        labels,
        [
            "PARAMEDIC",
            "POLICE",
            "FIRE FIGHTERS",
            "PUBLIC SERVICE",
            "MARITIMES",
            "ST.JOHN"
        ]
    );
}

#[test]
fn national_services_share_the_999_line() {
    for responder in Responder::ALL {
        let expected = if responder == Responder::StJohn {
            "0137056504"
        } else {
            "999"
        };
        assert_eq!(responder.hotline(), expected);
    }
}

#[test]
fn roster_dials_are_prompted_hotline_requests() {
    let request = Responder::Paramedic.dial();
    assert_eq!(request.number, "999");
    assert!(request.prompt);

    let st_john = Responder::StJohn.dial();
    assert_eq!(st_john.number, "0137056504");
}

#[test]
fn roster_entries_resolve_from_labels() {
    assert_eq!(Responder::parse("police"), Some(Responder::Police));
    assert_eq!(Responder::parse(" ST.JOHN "), Some(Responder::StJohn));
    assert_eq!(Responder::parse("COAST GUARD"), None);
}
