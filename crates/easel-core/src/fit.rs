use crate::model::Size;

/// Content area left on a sheet after a uniform border. Not clamped: a border wider
/// than half the sheet yields negative dimensions.
pub fn printable_area(paper: Size, border: f64) -> Size {
    Size::new(paper.height - border * 2.0, paper.width - border * 2.0)
}

/// Largest `height / width == ratio` rectangle inside `bounds`.
///
/// Tries the height-bound candidate first and falls back to the width-bound one when
/// the former would overflow horizontally.
pub fn fit_to_ratio(bounds: Size, ratio: f64) -> Size {
    let height_bound = Size::new(bounds.height, bounds.height / ratio);
    let width_bound = Size::new(bounds.width * ratio, bounds.width);

    let chosen = if height_bound.width > bounds.width {
        width_bound
    } else {
        height_bound
    };
    tracing::trace!(
        ratio,
        max_height = bounds.height,
        max_width = bounds.width,
        height = chosen.height,
        width = chosen.width,
        "image fitted"
    );
    chosen
}
