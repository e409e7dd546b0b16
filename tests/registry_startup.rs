mod common;

use common::named;
use lifealgo_core::{AlgoConfig, AlgoError, IconSize, RegistryBuilder};
use lifealgo_data::{Rgb, STATUS_COLORS};
use lifealgo_lib::algos::{self, HLIFE_ALGO, QLIFE_ALGO};

#[test]
fn test_builtin_order() {
    let registry = algos::init_algorithms(&AlgoConfig::default()).unwrap();
    let names: Vec<&str> = registry.iter().map(|ad| ad.name()).collect();
    assert_eq!(
        names,
        vec![
            "QuickLife",
            "HashLife",
            "Generations",
            "JvN",
            "RuleTable",
            "SlowLife",
            "WireWorld"
        ]
    );
    assert_eq!(registry.name_of(QLIFE_ALGO), "QuickLife");
    assert_eq!(registry.name_of(HLIFE_ALGO), "HashLife");
}

#[test]
fn test_special_slots_ignore_names() {
    let mut builder = RegistryBuilder::new();
    for name in ["Zebra", "Aardvark", "Middle"] {
        named(builder.tick(), name);
    }
    let registry = builder.finish(&AlgoConfig::default()).unwrap();
    assert_eq!(registry.count(), 3);
    assert_eq!(registry.name_of(0), "Zebra");
    assert_eq!(registry.name_of(1), "Aardvark");
}

#[test]
fn test_icons_both_or_neither() {
    let registry = algos::init_algorithms(&AlgoConfig::default()).unwrap();
    for ad in registry.iter() {
        let small = ad.icons(IconSize::Small);
        let large = ad.icons(IconSize::Large);
        assert_eq!(small.is_some(), large.is_some(), "{}", ad.name());
        if let (Some(small), Some(large)) = (small, large) {
            assert_eq!(small.present(), large.present(), "{}", ad.name());
            assert!(small.iter().all(|(_, icon)| icon.dimensions() == (7, 7)));
            assert!(large.iter().all(|(_, icon)| icon.dimensions() == (15, 15)));
        }
    }

    let jvn = registry.algo(registry.find("JvN").unwrap());
    assert_eq!(jvn.icons(IconSize::Large).unwrap().present(), 3);
    let wireworld = registry.algo(registry.find("WireWorld").unwrap());
    assert_eq!(wireworld.icons(IconSize::Small).unwrap().present(), 3);
    let generations = registry.algo(registry.find("Generations").unwrap());
    assert!(generations.icons(IconSize::Small).is_none());
}

#[test]
fn test_status_colors_cycle() {
    let mut builder = RegistryBuilder::new();
    for i in 0..20 {
        named(builder.tick(), &format!("Algo{i}"));
    }
    let registry = builder.finish(&AlgoConfig::default()).unwrap();

    assert_eq!(registry.algo(0).status_rgb(), Rgb::new(255, 255, 206));
    assert_eq!(registry.algo(1).status_rgb(), Rgb::new(226, 250, 248));
    assert_eq!(registry.algo(8).status_rgb(), Rgb::new(255, 255, 255));
    for i in 0..11 {
        assert_eq!(
            registry.algo(i).status_rgb(),
            registry.algo(i + 9).status_rgb()
        );
    }
    for i in 0..9 {
        assert_eq!(registry.algo(i).status_rgb(), STATUS_COLORS[i]);
    }
}

#[test]
fn test_builtin_colors() {
    let registry = algos::init_algorithms(&AlgoConfig::default()).unwrap();

    let quick = registry.algo(QLIFE_ALGO);
    assert_eq!(quick.default_colors(), &[Rgb::new(48, 48, 48), Rgb::WHITE]);
    assert_eq!(quick.colors(), quick.default_colors());

    // unset colors come from the shared palette
    let rules = registry.algo(registry.find("RuleTable").unwrap());
    assert_eq!(rules.default_colors().len(), 256);
    assert_eq!(rules.default_colors()[0], Rgb::new(255, 127, 0));
    assert_eq!(rules.colors(), rules.default_colors());

    let generations = registry.algo(registry.find("Generations").unwrap());
    assert!(generations.gradient().enabled);
    assert_eq!(generations.gradient(), generations.def_gradient);
}

#[test]
fn test_hashing_flags() {
    let registry = algos::init_algorithms(&AlgoConfig::default()).unwrap();
    assert!(!registry.algo(QLIFE_ALGO).can_hash());
    assert!(registry.algo(HLIFE_ALGO).can_hash());
    assert!(!registry.algo(registry.find("SlowLife").unwrap()).can_hash());
}

#[test]
fn test_defect_leaves_no_menu() {
    let mut builder = RegistryBuilder::new();
    algos::register_all(&mut builder).unwrap();
    builder.tick().set_name("Broken");
    let count = builder.len();

    let err = builder.finish(&AlgoConfig::default()).unwrap_err();
    assert!(err.is_fatal());
    match err {
        AlgoError::MissingCreator { index, name } => {
            assert_eq!(index, count - 1);
            assert_eq!(name, "Broken");
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn test_menu_ids_follow_config() {
    let config = AlgoConfig::from_toml_str("menu_base_id = 700").unwrap();
    let registry = algos::init_algorithms(&config).unwrap();
    for (i, entry) in registry.menu().entries().iter().enumerate() {
        assert_eq!(entry.id, 700 + i as u32);
        assert_eq!(entry.label, registry.name_of(i));
    }
}

#[test]
fn test_menu_base_without_room_is_config_error() {
    let config = AlgoConfig::from_toml_str("menu_base_id = 4294967295").unwrap();
    let err = algos::init_algorithms(&config).unwrap_err();
    assert!(matches!(err, AlgoError::Config(_)));

    let config = AlgoConfig::from_toml_str("menu_base_id = 4294967289").unwrap();
    let registry = algos::init_algorithms(&config).unwrap();
    assert_eq!(registry.action_id(registry.count() - 1), u32::MAX);
}
