use easel_core::blades::blades_in_slot;
use easel_core::prelude::*;
use rand::{Rng, SeedableRng};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn reference_print_on_eight_by_ten() {
    let blades = fit_and_calculate(10.0, 8.0, "4x5", 0.5).unwrap();
    assert!(approx(blades.left, 9.0), "{blades:?}");
    assert!(approx(blades.right, 5.0), "{blades:?}");
    assert!(approx(blades.top, 3.6), "{blades:?}");
    assert!(approx(blades.bottom, 7.6), "{blades:?}");
}

#[test]
fn blades_for_known_image() {
    let blades = blades_for(10.0, 8.0, 5.6, 7.0).unwrap();
    let fitted = fit_and_calculate(10.0, 8.0, "4x5", 0.5).unwrap();
    assert!(approx(blades.left, fitted.left));
    assert!(approx(blades.bottom, fitted.bottom));
}

#[test]
fn paper_matching_slot_is_symmetric() {
    // Paper fills the slot, so the image is centered on the easel too.
    let blades = blades_for(8.0, 10.0, 6.0, 9.0).unwrap();
    assert_eq!(blades, EaselBlades::new(9.0, 9.0, 6.0, 6.0));
}

#[test]
fn blades_use_slot_center_not_paper_center() {
    let slot = Size::new(8.0, 10.0);
    let paper = Size::new(6.0, 8.0);
    let blades = blades_in_slot(slot, paper, paper);
    // Image edge at x=0, easel center at x=5: left = 10; right edge at 8 -> 6.
    assert_eq!(blades, EaselBlades::new(10.0, 6.0, 8.0, 4.0));
}

#[test]
fn too_wide_paper_fails() {
    assert!(matches!(
        blades_for(30.0, 25.0, 10.0, 10.0),
        Err(EaselError::OutOfRange { .. })
    ));
}

#[test]
fn blades_non_negative_for_full_height_paper() {
    // Offsets are measured from the slot's top edge, so only paper as tall as its
    // slot guarantees non-negative vertical blades.
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    for _ in 0..2000 {
        let paper_width: f64 = rng.gen_range(1.0..=24.0);
        let slot = slot_for(paper_width).unwrap();
        let paper = Size::new(slot.height, paper_width);
        let image = Size::new(
            rng.gen_range(0.0..=paper.height),
            rng.gen_range(0.0..=paper.width),
        );
        assert!(image.fits_within(&paper) && paper.fits_within(&slot));

        let blades = blades_for(paper.height, paper.width, image.height, image.width).unwrap();
        assert!(blades.top >= -1e-9, "{blades:?}");
        assert!(blades.bottom >= -1e-9, "{blades:?}");
        assert!(blades.left >= -1e-9, "{blades:?}");
    }
}

#[test]
fn short_paper_can_push_bottom_blade_negative() {
    let paper = Size::new(6.0, 8.0);
    let image = Size::new(1.0, 1.0);
    let slot = slot_for(paper.width).unwrap();
    assert!(image.fits_within(&paper) && paper.fits_within(&slot));
    assert!(!slot.fits_within(&paper));

    let blades = blades_for(paper.height, paper.width, image.height, image.width).unwrap();
    // bottom = paper height + image height - slot height
    assert_eq!(blades.bottom, -1.0);
    assert_eq!(blades.top, 3.0);
}

#[test]
fn opposite_blades_span_twice_the_image() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(11);
    for _ in 0..2000 {
        let paper_width: f64 = rng.gen_range(1.0..=24.0);
        let paper_height: f64 = rng.gen_range(1.0..=30.0);
        let image_height = rng.gen_range(0.0..=paper_height);
        let image_width = rng.gen_range(0.0..=paper_width);

        let blades = blades_for(paper_height, paper_width, image_height, image_width).unwrap();
        assert!(approx(blades.left + blades.right, 2.0 * image_width));
        assert!(approx(blades.top + blades.bottom, 2.0 * image_height));
    }
}

#[test]
fn plan_bundles_all_three_results() {
    let plan = Easel::standard().plan(10.0, 8.0, "4x5", 0.5).unwrap();
    assert_eq!(plan.slot, Size::new(8.0, 10.0));
    assert_eq!(plan.image, fit_image(10.0, 8.0, "4x5", 0.5).unwrap());
    assert_eq!(plan.blades, fit_and_calculate(10.0, 8.0, "4x5", 0.5).unwrap());
}
