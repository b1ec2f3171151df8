//! End-to-end tests over the whole theming pipeline: mode flag in, tokens,
//! templates, presets, and baseline stylesheet out.

use std::rc::Rc;

use proptest::prelude::*;
use webtint::{
    global_stylesheet, Breakpoint, ColorToken, MediaQueries, Palette, PaletteOverrides,
    SharedMode, TextStyle, TextVariant, Theme, ThemeProvider, ZIndex,
};

#[test]
fn key_set_identical_for_both_modes() {
    let dark = serde_json::to_value(Palette::build(true)).unwrap();
    let light = serde_json::to_value(Palette::build(false)).unwrap();

    let dark_keys: Vec<&String> = dark.as_object().unwrap().keys().collect();
    let light_keys: Vec<&String> = light.as_object().unwrap().keys().collect();
    assert_eq!(dark_keys, light_keys);
}

#[test]
fn composition_is_deterministic_per_mode() {
    for dark in [false, true] {
        assert_eq!(Theme::from_mode(dark), Theme::from_mode(dark));
    }
}

#[test]
fn primary_family_and_aliases_are_mode_invariant() {
    let dark = Palette::build(true);
    let light = Palette::build(false);

    assert_eq!(dark.white, light.white);
    assert_eq!(dark.black, light.black);
    for token in [
        ColorToken::Primary1,
        ColorToken::Primary2,
        ColorToken::Primary3,
        ColorToken::Primary4,
        ColorToken::Primary5,
        ColorToken::Secondary1,
        ColorToken::Secondary2,
        ColorToken::Secondary3,
    ] {
        assert_eq!(dark.color(token), light.color(token));
    }
}

#[test]
fn each_breakpoint_has_one_template_with_its_width() {
    let media = MediaQueries::new();
    for bp in Breakpoint::ALL {
        let wrapped = media.get(bp).wrap("");
        assert!(wrapped.contains(&format!("max-width: {}px", bp.max_width())));
        assert_eq!(wrapped.matches('{').count(), wrapped.matches('}').count());
    }
}

#[test]
fn caller_override_beats_preset_default() {
    let theme = Theme::from_mode(true);
    for variant in TextVariant::ALL {
        let resolved =
            variant.resolve(&TextStyle::default().color(ColorToken::Success), &theme);
        assert_eq!(resolved.color, Some(theme.color(ColorToken::Success)));
    }
}

#[test]
fn error_preset_discriminator_selects_token() {
    for dark in [false, true] {
        let theme = Theme::from_mode(dark);

        let alert = TextVariant::Error { error: true }.resolve(&TextStyle::default(), &theme);
        assert_eq!(alert.color, Some(theme.color(ColorToken::Error)));

        let neutral = TextVariant::Error { error: false }.resolve(&TextStyle::default(), &theme);
        assert_eq!(neutral.color, Some(theme.color(ColorToken::Text2)));
    }
}

#[test]
fn provider_recomputes_only_on_change() {
    let mode = SharedMode::new(false);
    let provider = ThemeProvider::new(mode.clone());

    let first = provider.current();
    let second = provider.current();
    assert!(Rc::ptr_eq(&first, &second));

    mode.set_dark_mode(true);
    let third = provider.current();
    assert!(!Rc::ptr_eq(&second, &third));
    assert_eq!(*third, Theme::from_mode(true));

    // Toggling back rebuilds again; equality is structural, not cached.
    mode.set_dark_mode(false);
    let fourth = provider.current();
    assert!(!Rc::ptr_eq(&first, &fourth));
    assert_eq!(*fourth, *first);
}

#[test]
fn baseline_stylesheet_tracks_the_provider() {
    let mode = SharedMode::new(false);
    let provider = ThemeProvider::new(mode.clone());

    let light_css = provider.global_stylesheet().unwrap();
    assert!(light_css.contains(&Theme::from_mode(false).palette.bg1.to_string()));

    mode.set_dark_mode(true);
    let dark_css = provider.global_stylesheet().unwrap();
    assert!(dark_css.contains(&Theme::from_mode(true).palette.bg1.to_string()));
    assert_ne!(light_css, dark_css);
}

#[test]
fn overridden_palette_flows_through_presets() {
    let overrides = PaletteOverrides::from_yaml("text2: \"#c0ffee\"").unwrap();
    let mut theme = Theme::from_mode(false);
    theme.palette = overrides.apply(&theme.palette, false);

    let main = TextVariant::Main.resolve(&TextStyle::default(), &theme);
    assert_eq!(main.color.unwrap().to_string(), "#c0ffee");
}

#[test]
fn baseline_rules_are_generated_from_global_stylesheet() {
    let css = global_stylesheet(&Theme::from_mode(false)).unwrap();
    assert!(css.contains("html {"));
    assert!(css.contains("a {"));
}

#[test]
fn zindex_ladder_sits_above_content() {
    assert!(ZIndex::ALL
        .iter()
        .skip(2)
        .all(|layer| layer.value() >= 1000));
}

proptest! {
    // Wrapping is total: any printable fragment comes back verbatim inside a
    // rule that names the breakpoint's exact width.
    #[test]
    fn wrap_preserves_fragment_and_width(
        fragment in "[ -~]{0,60}",
        index in 0usize..Breakpoint::ALL.len(),
    ) {
        let bp = Breakpoint::ALL[index];
        let wrapped = MediaQueries::new().wrap(bp, &fragment);

        // Bound to locals: prop_assert! reuses the stringified condition as a
        // format string, and the brace literals here would break it.
        let starts_with_media_prefix =
            wrapped.starts_with(&format!("@media (max-width: {}px) {{", bp.max_width()));
        prop_assert!(starts_with_media_prefix);
        prop_assert!(wrapped.contains(&fragment));
        let ends_with_closing_brace = wrapped.ends_with('}');
        prop_assert!(ends_with_closing_brace);
    }

    // Token lookup is closed over names: every name round-trips, and the
    // resolved value matches the struct field the serializer wrote.
    #[test]
    fn token_lookup_matches_serialized_palette(dark in any::<bool>()) {
        let palette = Palette::build(dark);
        let json = serde_json::to_value(palette).unwrap();

        for token in ColorToken::ALL {
            let serialized = json[token.name()].as_str().unwrap();
            prop_assert_eq!(palette.color(token).to_string(), serialized);
        }
    }
}
