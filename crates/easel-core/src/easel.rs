use std::sync::LazyLock;

use tracing::instrument;

use crate::blades::blades_in_slot;
use crate::config::EaselConfig;
use crate::error::Result;
use crate::fit::{fit_to_ratio, printable_area};
use crate::model::{EaselBlades, EaselPlan, Size};
use crate::ratios::{AspectRatios, FLIPPED_PREFIX};
use crate::slots::EaselSlots;

static STANDARD: LazyLock<Easel> = LazyLock::new(|| {
    Easel::new(
        AspectRatios::standard().clone(),
        EaselSlots::standard().clone(),
    )
});

/// An easel: the slots it offers and the aspect ratios it knows how to mask.
#[derive(Debug, Clone, PartialEq)]
pub struct Easel {
    ratios: AspectRatios,
    slots: EaselSlots,
}

impl Easel {
    pub fn new(ratios: AspectRatios, slots: EaselSlots) -> Self {
        Self { ratios, slots }
    }

    /// Built-in film formats and standard slots.
    pub fn standard() -> &'static Easel {
        &STANDARD
    }

    /// Standard tables with the config's additions applied.
    pub fn from_config(cfg: &EaselConfig) -> Result<Self> {
        cfg.validate()?;
        let extra = cfg.ratios.iter().map(|(name, ratio)| (name.clone(), *ratio));
        let ratios = AspectRatios::standard().extended(extra)?;
        let slots = match &cfg.slots {
            Some(slots) => EaselSlots::new(slots.clone())?,
            None => EaselSlots::standard().clone(),
        };
        tracing::debug!(
            ratios = ratios.len(),
            slots = slots.len(),
            "easel configured"
        );
        Ok(Self::new(ratios, slots))
    }

    /// The tables this easel actually uses, as a config: base ratios only (rotated
    /// variants are derived again on load) and the full slot list.
    pub fn to_config(&self) -> EaselConfig {
        EaselConfig {
            ratios: self
                .ratios
                .iter()
                .filter(|(name, _)| !name.starts_with(FLIPPED_PREFIX))
                .map(|(name, ratio)| (name.to_string(), ratio))
                .collect(),
            slots: Some(self.slots.as_slice().to_vec()),
        }
    }

    pub fn ratios(&self) -> &AspectRatios {
        &self.ratios
    }

    pub fn slots(&self) -> &EaselSlots {
        &self.slots
    }

    /// Smallest slot that holds a sheet of `paper_width`.
    pub fn slot_for(&self, paper_width: f64) -> Result<Size> {
        self.slots.slot_for(paper_width)
    }

    /// Largest image of the named ratio that fits on the paper inside `border`.
    pub fn fit_image(
        &self,
        paper_height: f64,
        paper_width: f64,
        ratio_name: &str,
        border: f64,
    ) -> Result<Size> {
        let ratio = self.ratios.get(ratio_name)?;
        let bounds = printable_area(Size::new(paper_height, paper_width), border);
        Ok(fit_to_ratio(bounds, ratio))
    }

    /// Blade offsets for an image of known size, centered on the paper.
    pub fn blades_for(
        &self,
        paper_height: f64,
        paper_width: f64,
        image_height: f64,
        image_width: f64,
    ) -> Result<EaselBlades> {
        let slot = self.slot_for(paper_width)?;
        Ok(blades_in_slot(
            slot,
            Size::new(paper_height, paper_width),
            Size::new(image_height, image_width),
        ))
    }

    /// Fits the image and derives the blades in one go.
    pub fn fit_and_calculate(
        &self,
        paper_height: f64,
        paper_width: f64,
        ratio_name: &str,
        border: f64,
    ) -> Result<EaselBlades> {
        let image = self.fit_image(paper_height, paper_width, ratio_name, border)?;
        self.blades_for(paper_height, paper_width, image.height, image.width)
    }

    /// Slot, fitted image and blade settings for one print.
    #[instrument(level = "debug", skip(self))]
    pub fn plan(
        &self,
        paper_height: f64,
        paper_width: f64,
        ratio_name: &str,
        border: f64,
    ) -> Result<EaselPlan> {
        let image = self.fit_image(paper_height, paper_width, ratio_name, border)?;
        self.plan_with_image(paper_height, paper_width, image)
    }

    /// Like [`Easel::plan`] but with the image size given rather than fitted.
    pub fn plan_with_image(
        &self,
        paper_height: f64,
        paper_width: f64,
        image: Size,
    ) -> Result<EaselPlan> {
        let slot = self.slot_for(paper_width)?;
        let blades = blades_in_slot(slot, Size::new(paper_height, paper_width), image);
        tracing::debug!(
            left = blades.left,
            right = blades.right,
            top = blades.top,
            bottom = blades.bottom,
            "blades computed"
        );
        Ok(EaselPlan {
            slot,
            image,
            blades,
        })
    }
}

/// [`Easel::slot_for`] on the standard easel.
pub fn slot_for(paper_width: f64) -> Result<Size> {
    Easel::standard().slot_for(paper_width)
}

/// [`Easel::fit_image`] on the standard easel.
pub fn fit_image(
    paper_height: f64,
    paper_width: f64,
    ratio_name: &str,
    border: f64,
) -> Result<Size> {
    Easel::standard().fit_image(paper_height, paper_width, ratio_name, border)
}

/// [`Easel::blades_for`] on the standard easel.
pub fn blades_for(
    paper_height: f64,
    paper_width: f64,
    image_height: f64,
    image_width: f64,
) -> Result<EaselBlades> {
    Easel::standard().blades_for(paper_height, paper_width, image_height, image_width)
}

/// [`Easel::fit_and_calculate`] on the standard easel.
pub fn fit_and_calculate(
    paper_height: f64,
    paper_width: f64,
    ratio_name: &str,
    border: f64,
) -> Result<EaselBlades> {
    Easel::standard().fit_and_calculate(paper_height, paper_width, ratio_name, border)
}
