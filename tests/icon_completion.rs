mod common;

use common::{gray_strip, named};
use lifealgo_core::icons::slice_strip;
use lifealgo_core::{AlgoConfig, IconSize, RegistryBuilder};

#[test]
fn test_large_only_strip_derives_small_set() {
    let mut builder = RegistryBuilder::new();
    let ad = builder.tick();
    named(ad, "Fourway");
    ad.max_states = 5;
    ad.icons15x15 = Some(slice_strip(&gray_strip(15, 4), 15));

    let registry = builder.finish(&AlgoConfig::default()).unwrap();
    let ad = registry.algo(0);
    let small = ad.icons(IconSize::Small).expect("derived 7x7 set");

    for state in 0..256 {
        match small.get(state) {
            Some(icon) => {
                assert!((1..=4).contains(&state), "unexpected icon at {state}");
                assert_eq!(icon.dimensions(), (7, 7));
            }
            None => assert!(!(1..=4).contains(&state), "missing icon at {state}"),
        }
    }
}

#[test]
fn test_small_only_strip_derives_large_set() {
    let mut builder = RegistryBuilder::new();
    let ad = builder.tick();
    named(ad, "Tiny");
    ad.icons7x7 = Some(slice_strip(&gray_strip(7, 2), 7));

    let registry = builder.finish(&AlgoConfig::default()).unwrap();
    let large = registry.algo(0).icons(IconSize::Large).unwrap();
    assert_eq!(large.size(), 15);
    assert_eq!(large.present(), 2);
    assert_eq!(large.get(2).unwrap().dimensions(), (15, 15));
}

#[test]
fn test_supplied_sets_kept_verbatim() {
    let small = slice_strip(&gray_strip(7, 3), 7);
    let large = slice_strip(&gray_strip(15, 1), 15);

    let mut builder = RegistryBuilder::new();
    let ad = builder.tick();
    named(ad, "Both");
    ad.icons7x7 = Some(small.clone());
    ad.icons15x15 = Some(large.clone());

    let registry = builder.finish(&AlgoConfig::default()).unwrap();
    assert_eq!(registry.algo(0).icons(IconSize::Small), Some(&small));
    assert_eq!(registry.algo(0).icons(IconSize::Large), Some(&large));
}

#[test]
fn test_xpm_strip_registration() {
    let mut builder = RegistryBuilder::new();
    let ad = builder.tick();
    named(ad, "Xpm");
    ad.create_icon_sets(
        IconSize::Small,
        &["1 2 2 1", ". c #000000", "o c #FF0000", "o", "."],
    )
    .unwrap();

    let registry = builder.finish(&AlgoConfig::default()).unwrap();
    let ad = registry.algo(0);
    let small = ad.icons(IconSize::Small).unwrap();
    // 1x1 icons were rescaled into the 7x7 slot
    assert_eq!(small.get(1).unwrap().dimensions(), (7, 7));
    assert_eq!(small.get(1).unwrap().get_pixel(3, 3).0, [255, 0, 0, 255]);
    // the black icon is fully transparent
    assert!(small.get(2).unwrap().pixels().all(|p| p.0[3] == 0));
    assert_eq!(ad.icons(IconSize::Large).unwrap().present(), 2);
}

#[test]
fn test_bad_xpm_is_reported() {
    let mut builder = RegistryBuilder::new();
    let err = builder
        .tick()
        .create_icon_sets(IconSize::Large, &["not an xpm"])
        .unwrap_err();
    assert!(!err.is_fatal());
}
