use color_dropper::hex_from_rgb;

fn assert_hex_shape(hex: &str) {
    assert_eq!(hex.len(), 7, "unexpected width for {hex}");
    assert!(hex.starts_with('#'), "missing # in {hex}");
    assert!(
        hex[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)),
        "not uppercase hex: {hex}"
    );
}

#[test]
fn known_values() {
    assert_eq!(hex_from_rgb(0, 0, 0), "#000000");
    assert_eq!(hex_from_rgb(255, 255, 255), "#FFFFFF");
    assert_eq!(hex_from_rgb(18, 52, 86), "#123456");
    assert_eq!(hex_from_rgb(10, 20, 30), "#0A141E");
}

#[test]
fn leading_zero_channels_keep_fixed_width() {
    assert_eq!(hex_from_rgb(0, 0, 1), "#000001");
    assert_eq!(hex_from_rgb(0, 15, 0), "#000F00");
    assert_eq!(hex_from_rgb(1, 0, 0), "#010000");
}

#[test]
fn every_channel_value_is_fixed_width_and_decodes_back() {
    for r in 0..=255u8 {
        for g in (0..=255u8).step_by(15) {
            for b in (0..=255u8).step_by(17) {
                let hex = hex_from_rgb(r, g, b);
                assert_hex_shape(&hex);
                let packed = u32::from_str_radix(&hex[1..], 16).expect("valid hex");
                assert_eq!(packed, ((r as u32) << 16) | ((g as u32) << 8) | b as u32);
            }
        }
    }
}
