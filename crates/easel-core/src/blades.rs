use crate::model::{EaselBlades, Point, Size};

/// Blade offsets for an image centered on a sheet that sits centered in `slot`.
///
/// Each offset is twice the distance from the slot center to the matching image edge.
/// Nothing here checks that the image fits the paper or the paper fits the slot, so
/// extreme inputs can give negative offsets.
pub fn blades_in_slot(slot: Size, paper: Size, image: Size) -> EaselBlades {
    let center = slot.center();
    let top_left = Point::new(
        (paper.width - image.width) / 2.0,
        (paper.height - image.height) / 2.0,
    );
    let bottom_right = Point::new(paper.width - top_left.x, paper.height - top_left.y);

    EaselBlades::new(
        (center.x - top_left.x) * 2.0,
        (bottom_right.x - center.x) * 2.0,
        (center.y - top_left.y) * 2.0,
        (bottom_right.y - center.y) * 2.0,
    )
}
