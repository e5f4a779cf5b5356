//! Unit tests for the customization policy and the background script it drives.

use rstest::rstest;
use spectra::services::customization_policy::evaluate;
use spectra::types::customization::{
    BackgroundOverride, BackgroundStyle, CustomizationAction, HexColor, ImagePath,
};

const HOST: &str = "www.google.com";

fn with_color(hex: &str) -> BackgroundOverride {
    BackgroundOverride {
        color: Some(hex.parse().unwrap()),
        image: None,
    }
}

#[rstest]
#[case("https://example.com")]
#[case("https://google.com")]
#[case("https://mail.google.com/")]
#[case("https://www.google.com.evil.example/")]
#[case("not a url")]
#[case("about:blank")]
fn test_other_hosts_get_no_action(#[case] address: &str) {
    let action = evaluate(address, &with_color("#000000"), HOST);
    assert_eq!(action, CustomizationAction::NoAction);
}

#[rstest]
#[case("https://www.google.com")]
#[case("http://www.google.com/")]
#[case("https://www.google.com/search?q=rust")]
fn test_designated_host_runs_script(#[case] address: &str) {
    let action = evaluate(address, &with_color("#000000"), HOST);
    match action {
        CustomizationAction::RunScript(style) => {
            assert_eq!(style.color.as_str(), "#000000");
            assert_eq!(style.image_url(), "");
        }
        other => panic!("expected a script, got {:?}", other),
    }
}

#[test]
fn test_unset_override_falls_back_to_white() {
    let action = evaluate("https://www.google.com", &BackgroundOverride::default(), HOST);
    assert_eq!(
        action,
        CustomizationAction::RunScript(BackgroundStyle {
            color: HexColor::default(),
            image: None,
        })
    );
}

#[test]
fn test_host_is_configurable() {
    let action = evaluate("https://docs.rs/", &with_color("#abc"), "docs.rs");
    assert!(matches!(action, CustomizationAction::RunScript(_)));
    let action = evaluate("https://www.google.com/", &with_color("#abc"), "docs.rs");
    assert_eq!(action, CustomizationAction::NoAction);
}

#[test]
fn test_script_carries_color_and_image() {
    let style = BackgroundStyle {
        color: "#ADD8E6".parse().unwrap(),
        image: Some(ImagePath::new("/home/me/bg.png")),
    };
    let script = style.script();
    assert!(script.as_str().contains("\"#add8e6\""));
    assert!(script.as_str().contains("\"file:///home/me/bg.png\""));
    assert!(script.as_str().contains("console.error"));
}

#[test]
fn test_script_escapes_hostile_paths() {
    let style = BackgroundStyle {
        color: HexColor::default(),
        image: Some(ImagePath::new("/tmp/a\"b.png")),
    };
    let script = style.script();
    assert!(!script.as_str().contains("a\"b"));
}

#[rstest]
#[case("#fff")]
#[case("#000000")]
#[case(" #D3D3D3 ")]
fn test_valid_colors_parse(#[case] raw: &str) {
    assert!(raw.parse::<HexColor>().is_ok());
}

#[rstest]
#[case("white")]
#[case("#ffff")]
#[case("#gggggg")]
#[case("ffffff")]
#[case("")]
fn test_invalid_colors_are_rejected(#[case] raw: &str) {
    assert!(raw.parse::<HexColor>().is_err());
}
