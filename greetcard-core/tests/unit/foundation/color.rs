use super::*;

#[test]
fn hex_literal_matches_parsed_hex() {
    assert_eq!(Rgba8::hex(0x8B5CF6), Rgba8::parse_hex("#8b5cf6").unwrap());
    assert_eq!(Rgba8::hex(0x8B5CF6), Rgba8::parse_hex("8B5CF6").unwrap());
    assert_eq!(Rgba8::GOLD, Rgba8::rgb(255, 215, 0));
}

#[test]
fn parse_hex_with_alpha() {
    let c = Rgba8::parse_hex("#FFFFFF1A").unwrap();
    assert_eq!(c, Rgba8::WHITE.with_alpha(0x1A));
}

#[test]
fn parse_hex_rejects_garbage() {
    assert!(Rgba8::parse_hex("purple-900").is_err());
    assert!(Rgba8::parse_hex("#12345").is_err());
    assert!(Rgba8::parse_hex("#GG0000").is_err());
    assert!(Rgba8::parse_hex("#ééé").is_err());
}

#[test]
fn premul_scales_color_channels() {
    assert_eq!(Rgba8::WHITE.to_premul(), [255, 255, 255, 255]);
    assert_eq!(Rgba8::WHITE.with_alpha(0).to_premul(), [0, 0, 0, 0]);
    assert_eq!(
        Rgba8::rgb(100, 50, 200).with_alpha(128).to_premul(),
        [
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128
        ]
    );
}

#[test]
fn display_round_trips_through_parse() {
    let c = Rgba8::hex(0x7C2D12);
    assert_eq!(c.to_string(), "#7C2D12");
    assert_eq!(Rgba8::parse_hex(&c.to_string()).unwrap(), c);
    assert_eq!(Rgba8::WHITE.with_alpha(0x4D).to_string(), "#FFFFFF4D");
}
