use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Size;

/// User-supplied additions to the built-in tables.
/// Key notes:
///   - `ratios` are base entries (height/width); `-name` rotated variants are derived
///     and must not be listed
///   - `slots`, when present, replaces the standard slot list entirely; order does not
///     matter, slots are sorted by width when the easel is built
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EaselConfig {
    /// Extra aspect ratios, merged over the built-in film formats.
    pub ratios: BTreeMap<String, f64>,
    /// Custom easel slots. `None` keeps the standard set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots: Option<Vec<Size>>,
}

impl EaselConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns an error if:
    /// - A ratio name is empty or starts with `-`
    /// - A ratio is zero, negative or not finite
    /// - `slots` is present but empty, or a slot has a non-positive dimension
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::EaselError;

        for (name, ratio) in &self.ratios {
            crate::ratios::validate_entry(name, *ratio)?;
        }

        if let Some(slots) = &self.slots {
            if slots.is_empty() {
                return Err(EaselError::InvalidConfig(
                    "slots is present but empty".into(),
                ));
            }
            for s in slots {
                crate::slots::validate_slot(s)?;
            }
        }

        Ok(())
    }

    /// Create a fluent builder for `EaselConfig`.
    pub fn builder() -> EaselConfigBuilder {
        EaselConfigBuilder::new()
    }
}

/// Builder for `EaselConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct EaselConfigBuilder {
    cfg: EaselConfig,
}

impl EaselConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: EaselConfig::default(),
        }
    }
    pub fn ratio(mut self, name: impl Into<String>, height_over_width: f64) -> Self {
        self.cfg.ratios.insert(name.into(), height_over_width);
        self
    }
    /// Adds a ratio given as film frame dimensions, e.g. `("xpan", 24.0, 65.0)`.
    pub fn frame(self, name: impl Into<String>, height: f64, width: f64) -> Self {
        self.ratio(name, height / width)
    }
    pub fn slot(mut self, height: f64, width: f64) -> Self {
        self.cfg
            .slots
            .get_or_insert_with(Vec::new)
            .push(Size::new(height, width));
        self
    }
    pub fn slots(mut self, v: Option<Vec<Size>>) -> Self {
        self.cfg.slots = v;
        self
    }
    pub fn build(self) -> EaselConfig {
        self.cfg
    }
}
