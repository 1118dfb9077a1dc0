use crate::model::EaselPlan;
use serde_json::{json, Value};

/// Serialize a plan as `{ slot, image, blades }` with named fields throughout.
pub fn to_json(plan: &EaselPlan) -> Value {
    json!({
        "slot": {"height": plan.slot.height, "width": plan.slot.width},
        "image": {"height": plan.image.height, "width": plan.image.width},
        "blades": {
            "left": plan.blades.left,
            "right": plan.blades.right,
            "top": plan.blades.top,
            "bottom": plan.blades.bottom,
        },
    })
}
