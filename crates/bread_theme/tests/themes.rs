use bread_theme::{BreadTheme, ColorToken, ThemeVariant};

#[test]
fn records_carry_their_own_variant() {
    assert_eq!(BreadTheme::light().variant(), ThemeVariant::Light);
    assert_eq!(BreadTheme::dark().variant(), ThemeVariant::Dark);
}

#[test]
fn light_and_dark_have_distinct_backgrounds() {
    let light = BreadTheme::light();
    let dark = BreadTheme::dark();
    assert_ne!(
        light.colors().get(ColorToken::BackgroundMain),
        dark.colors().get(ColorToken::BackgroundMain),
    );
    assert_ne!(
        light.colors().get(ColorToken::TextMain),
        dark.colors().get(ColorToken::TextMain),
    );
}

#[test]
fn bundle_resolves_every_known_variant_to_itself() {
    let bundle = BreadTheme::bundle();
    for variant in ThemeVariant::all() {
        assert_eq!(bundle.resolve(Some(variant.id())).variant(), *variant);
    }
}

#[test]
fn unknown_selector_resolves_to_light() {
    let bundle = BreadTheme::bundle();
    for selector in ["solarized", "DARK", "Light", "0"] {
        assert_eq!(
            bundle.resolve(Some(selector)).variant(),
            ThemeVariant::Light,
            "selector {selector:?} should fall back",
        );
    }
}

#[test]
fn light_record_matches_shipped_palette() {
    let light = BreadTheme::light();
    assert_eq!(light.colors().get(ColorToken::BackgroundMain).to_css(), "#ffc9a9");
    assert_eq!(light.colors().get(ColorToken::AccentMain).to_css(), "#ce7575");
}
