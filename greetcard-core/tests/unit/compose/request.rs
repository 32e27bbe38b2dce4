use super::*;

#[test]
fn display_name_is_trimmed() {
    let name = DisplayName::parse("  Asha \n").unwrap();
    assert_eq!(name.as_str(), "Asha");
    assert_eq!(name.to_string(), "Asha");
}

#[test]
fn blank_display_name_is_rejected() {
    assert!(matches!(DisplayName::parse(""), Err(CardError::Validation(_))));
    assert!(matches!(
        " \t ".parse::<DisplayName>(),
        Err(CardError::Validation(_))
    ));
}
