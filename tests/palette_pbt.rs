mod common;

use common::gray_strip;
use lifealgo_core::colors::{apply_default_fallback, defaults_look_unset};
use lifealgo_core::icons::{complete_icon_sets, rescale, slice_strip};
use lifealgo_core::{AlgoConfig, Creator, IconSize, RegistryBuilder};
use lifealgo_data::{status_color, Rgb, DEFAULT_PALETTE, MAX_ICON_STATES};
use proptest::prelude::*;

prop_compose! {
    fn arb_rgb()(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) -> Rgb {
        Rgb::new(r, g, b)
    }
}

prop_compose! {
    fn arb_defaults()(colors in prop::collection::vec(arb_rgb(), 2..=256)) -> Vec<Rgb> {
        colors
    }
}

fn finished(colors: &[Rgb]) -> lifealgo_core::Registry {
    let mut builder = RegistryBuilder::new();
    let ad = builder.tick();
    ad.set_name("Prop").set_creator(Creator::new(|| None));
    ad.max_states = colors.len();
    ad.set_default_colors(colors);
    builder.finish(&AlgoConfig::default()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn status_color_has_period_nine(index in 0usize..10_000) {
        prop_assert_eq!(status_color(index), status_color(index + 9));
        prop_assert_eq!(status_color(index), status_color(index % 9));
    }

    #[test]
    fn fallback_iff_first_two_match(colors in arb_defaults()) {
        let registry = finished(&colors);
        let ad = registry.algo(0);
        if colors[0] == colors[1] {
            for (state, color) in ad.default_colors().iter().enumerate() {
                let p = &DEFAULT_PALETTE[state * 3..state * 3 + 3];
                prop_assert_eq!(*color, Rgb::new(p[0], p[1], p[2]));
            }
        } else {
            prop_assert_eq!(ad.default_colors(), &colors[..]);
        }
        prop_assert_eq!(ad.colors(), ad.default_colors());
    }

    #[test]
    fn forced_match_always_falls_back(shared in arb_rgb(), rest in prop::collection::vec(arb_rgb(), 0..10)) {
        let mut colors = vec![shared, shared];
        colors.extend(rest);
        prop_assert!(defaults_look_unset(&colors));

        let mut builder = RegistryBuilder::new();
        let ad = builder.tick();
        ad.max_states = colors.len();
        ad.set_default_colors(&colors);
        prop_assert!(apply_default_fallback(ad));
        prop_assert_eq!(ad.default_colors()[0], Rgb::new(255, 127, 0));
    }

    #[test]
    fn slicing_counts_whole_squares(size in 1u32..16, count in 0u32..40) {
        let set = slice_strip(&gray_strip(size, count), size);
        prop_assert_eq!(set.present(), (count as usize).min(MAX_ICON_STATES));
        prop_assert!(set.get(0).is_none());
    }

    #[test]
    fn rescale_preserves_occupancy(count in 0u32..20, target in 1u32..32) {
        let source = slice_strip(&gray_strip(7, count), 7);
        let scaled = rescale(Some(&source), target).unwrap();
        let before: Vec<usize> = source.iter().map(|(s, _)| s).collect();
        let after: Vec<usize> = scaled.iter().map(|(s, _)| s).collect();
        prop_assert_eq!(before, after);
        prop_assert!(scaled.iter().all(|(_, icon)| icon.dimensions() == (target, target)));
    }

    #[test]
    fn completion_fills_missing_resolution(count in 0u32..20, small_only in any::<bool>()) {
        let (given, missing) = if small_only {
            (IconSize::Small, IconSize::Large)
        } else {
            (IconSize::Large, IconSize::Small)
        };
        let mut builder = RegistryBuilder::new();
        let ad = builder.tick();
        let px = given.pixels();
        let supplied = slice_strip(&gray_strip(px, count), px);
        match given {
            IconSize::Small => ad.icons7x7 = Some(supplied.clone()),
            IconSize::Large => ad.icons15x15 = Some(supplied.clone()),
        }

        prop_assert_eq!(complete_icon_sets(ad), Some(missing));
        prop_assert_eq!(ad.icons(given), Some(&supplied));
        let derived = ad.icons(missing).unwrap();
        prop_assert_eq!(derived.size(), missing.pixels());
        let before: Vec<usize> = supplied.iter().map(|(s, _)| s).collect();
        let after: Vec<usize> = derived.iter().map(|(s, _)| s).collect();
        prop_assert_eq!(before, after);
        let side = missing.pixels();
        prop_assert!(derived.iter().all(|(_, icon)| icon.dimensions() == (side, side)));
    }
}
