use patent_fetch::normalize::pad_publication_number;

#[test]
fn pads_to_eight_digits() {
    assert_eq!(pad_publication_number("US7654321B2").unwrap(), "07654321");
    assert_eq!(pad_publication_number("US10734122B2").unwrap(), "10734122");
    assert_eq!(pad_publication_number("US10283223B2").unwrap(), "10283223");
}

#[test]
fn accepts_reissues_lowercase_and_bare_numbers() {
    assert_eq!(pad_publication_number("USRE46310A1").unwrap(), "00046310");
    assert_eq!(pad_publication_number("us7654321b2").unwrap(), "07654321");
    assert_eq!(pad_publication_number("US7654321").unwrap(), "07654321");
    assert_eq!(pad_publication_number("US7654321A").unwrap(), "07654321");
    assert_eq!(pad_publication_number("US0007654321B2").unwrap(), "07654321");
}

#[test]
fn rejects_malformed_numbers() {
    let bad = [
        "7654321",
        "USABC123",
        "",
        "US",
        "USB2",
        "EP7654321B2",
        "US7654321C2",
        "US7654321B22",
        "US7654321B2 ",
    ];
    for input in bad {
        assert!(
            pad_publication_number(input).is_err(),
            "accepted {input:?}"
        );
    }
}

#[test]
fn parse_error_reports_the_offending_input() {
    let err = pad_publication_number("bogus").unwrap_err();
    assert!(err.to_string().contains("bogus"));
}
