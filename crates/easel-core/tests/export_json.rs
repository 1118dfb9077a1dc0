use easel_core::prelude::*;
use easel_core::to_json;

#[test]
fn plan_json_shape() {
    let plan = Easel::standard().plan(8.0, 10.0, "6x6", 1.0).unwrap();
    let v = to_json(&plan);
    assert_eq!(v["slot"]["height"], 8.0);
    assert_eq!(v["slot"]["width"], 10.0);
    assert_eq!(v["image"]["height"], 6.0);
    assert_eq!(v["image"]["width"], 6.0);
    for key in ["left", "right", "top", "bottom"] {
        assert!(v["blades"][key].is_f64(), "missing blade {key}");
    }
    assert_eq!(v["blades"]["left"], 6.0);
    assert_eq!(v["blades"]["top"], 6.0);
}

#[test]
fn plan_serde_matches_export() {
    let plan = Easel::standard().plan(10.0, 8.0, "4x5", 0.5).unwrap();
    let via_serde = serde_json::to_value(plan).unwrap();
    assert_eq!(via_serde, to_json(&plan));
}
