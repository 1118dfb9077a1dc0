use std::sync::LazyLock;

use crate::error::{EaselError, Result};
use crate::model::Size;

/// Standard easel slots (height, width), ascending by width.
pub const STANDARD_EASEL_SLOTS: [Size; 5] = [
    Size::new(5.0, 7.0),
    Size::new(8.0, 10.0),
    Size::new(11.0, 14.0),
    Size::new(16.0, 20.0),
    Size::new(20.0, 24.0),
];

static STANDARD: LazyLock<EaselSlots> = LazyLock::new(|| EaselSlots {
    slots: STANDARD_EASEL_SLOTS.to_vec(),
});

/// Paper-size slots of an easel, kept sorted by width for first-fit lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct EaselSlots {
    slots: Vec<Size>,
}

impl EaselSlots {
    pub fn standard() -> &'static EaselSlots {
        &STANDARD
    }

    /// Builds a slot list from arbitrary input. Slots are sorted by width (stable, so
    /// equal widths keep their given order).
    pub fn new(mut slots: Vec<Size>) -> Result<Self> {
        if slots.is_empty() {
            return Err(EaselError::InvalidConfig(
                "at least one easel slot is required".into(),
            ));
        }
        for s in &slots {
            validate_slot(s)?;
        }
        slots.sort_by(|a, b| a.width.total_cmp(&b.width));
        Ok(Self { slots })
    }

    /// Smallest slot whose width is at least `paper_width`. Equal widths fit.
    pub fn slot_for(&self, paper_width: f64) -> Result<Size> {
        let slot = self
            .slots
            .iter()
            .find(|slot| paper_width <= slot.width)
            .copied()
            .ok_or(EaselError::OutOfRange {
                width: paper_width,
                max: self.widest(),
            })?;
        tracing::trace!(
            paper_width,
            height = slot.height,
            width = slot.width,
            "easel slot selected"
        );
        Ok(slot)
    }

    /// Width of the widest slot.
    pub fn widest(&self) -> f64 {
        self.slots.last().map_or(0.0, |s| s.width)
    }

    pub fn as_slice(&self) -> &[Size] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

pub(crate) fn validate_slot(slot: &Size) -> Result<()> {
    if slot.height.is_finite()
        && slot.width.is_finite()
        && slot.height > 0.0
        && slot.width > 0.0
    {
        return Ok(());
    }
    Err(EaselError::InvalidConfig(format!(
        "easel slot {} x {} must have finite positive dimensions",
        slot.height, slot.width
    )))
}
