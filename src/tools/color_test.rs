use super::*;

#[test]
fn parses_long_and_short_hex() {
    assert_eq!(parse_hex("#ff8800").unwrap(), Rgb { r: 255, g: 136, b: 0 });
    assert_eq!(parse_hex("FF8800").unwrap(), Rgb { r: 255, g: 136, b: 0 });
    assert_eq!(parse_hex("#f80").unwrap(), Rgb { r: 255, g: 136, b: 0 });
    assert_eq!(parse_hex(" #000 ").unwrap(), Rgb { r: 0, g: 0, b: 0 });
}

#[test]
fn rejects_malformed_hex() {
    for bad in ["", "#", "#12", "#12345", "#gggggg", "#ff88001", "#+f+f+f", "##336699"] {
        assert!(parse_hex(bad).is_err(), "accepted {bad}");
    }
}

#[test]
fn rgb_to_hsl_known_values() {
    assert_eq!(rgb_to_hsl(Rgb { r: 255, g: 136, b: 0 }), Hsl { h: 32, s: 100, l: 50 });
    assert_eq!(rgb_to_hsl(Rgb { r: 51, g: 102, b: 153 }), Hsl { h: 210, s: 50, l: 40 });
    assert_eq!(rgb_to_hsl(Rgb { r: 128, g: 128, b: 128 }), Hsl { h: 0, s: 0, l: 50 });
    assert_eq!(rgb_to_hsl(Rgb { r: 255, g: 0, b: 255 }), Hsl { h: 300, s: 100, l: 50 });
}

#[test]
fn hsl_to_rgb_known_values() {
    assert_eq!(hsl_to_rgb(Hsl { h: 0, s: 100, l: 50 }).unwrap(), Rgb { r: 255, g: 0, b: 0 });
    assert_eq!(hsl_to_rgb(Hsl { h: 120, s: 100, l: 25 }).unwrap(), Rgb { r: 0, g: 128, b: 0 });
    assert_eq!(hsl_to_rgb(Hsl { h: 360, s: 100, l: 50 }).unwrap(), Rgb { r: 255, g: 0, b: 0 });
    assert_eq!(hsl_to_rgb(Hsl { h: 0, s: 0, l: 100 }).unwrap(), Rgb { r: 255, g: 255, b: 255 });
    assert!(hsl_to_rgb(Hsl { h: 10, s: 101, l: 50 }).is_err());
}

#[test]
fn round_trip_stays_close() {
    let samples = ["#ff8800", "#336699", "#123456", "#fa8072", "#000000", "#ffffff", "#7f7f7f"];
    for hex in samples {
        let rgb = parse_hex(hex).unwrap();
        let back = hsl_to_rgb(rgb_to_hsl(rgb)).unwrap();
        for (a, b) in [(rgb.r, back.r), (rgb.g, back.g), (rgb.b, back.b)] {
            assert!(a.abs_diff(b) <= 3, "{hex}: {rgb:?} -> {back:?}");
        }
    }
}

#[test]
fn convert_from_each_input_form() {
    let from_hex = convert(&ColorInput::Hex { hex: "#336699".into() }).unwrap();
    assert_eq!(from_hex.rgb_css, "rgb(51, 102, 153)");
    assert_eq!(from_hex.hsl_css, "hsl(210, 50%, 40%)");

    let from_rgb = convert(&ColorInput::Rgb { r: 51, g: 102, b: 153 }).unwrap();
    assert_eq!(from_rgb, from_hex);

    let from_hsl = convert(&ColorInput::Hsl { h: 210, s: 50, l: 40 }).unwrap();
    assert_eq!(from_hsl.hex, "#336699");
}

#[test]
fn untagged_input_deserializes() {
    let hex: ColorInput = serde_json::from_str(r##"{"hex":"#abc"}"##).unwrap();
    assert!(matches!(hex, ColorInput::Hex { .. }));
    let rgb: ColorInput = serde_json::from_str(r#"{"r":1,"g":2,"b":3}"#).unwrap();
    assert!(matches!(rgb, ColorInput::Rgb { r: 1, g: 2, b: 3 }));
    let hsl: ColorInput = serde_json::from_str(r#"{"h":200,"s":10,"l":10}"#).unwrap();
    assert!(matches!(hsl, ColorInput::Hsl { h: 200, .. }));
}
