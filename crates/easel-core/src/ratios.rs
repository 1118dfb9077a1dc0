use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::error::{EaselError, Result};

/// Prefix marking a format rotated by 90°, e.g. `-4x5` is `4x5` in landscape.
pub const FLIPPED_PREFIX: char = '-';

/// Film and print formats as height/width.
pub const BASE_ASPECT_RATIOS: [(&str, f64); 9] = [
    ("135F", 24.0 / 36.0),
    ("135H", 18.0 / 24.0),
    ("135FP", 24.0 / 65.0),
    ("6x4.5", 4.5 / 6.0),
    ("6x6", 6.0 / 6.0),
    ("6x7", 6.0 / 7.0),
    ("6x8", 6.0 / 8.0),
    ("6x9", 6.0 / 9.0),
    ("4x5", 4.0 / 5.0),
];

static STANDARD: LazyLock<AspectRatios> = LazyLock::new(|| {
    AspectRatios::with_flipped(
        BASE_ASPECT_RATIOS
            .iter()
            .map(|(name, ratio)| ((*name).to_string(), *ratio)),
    )
});

/// Named aspect ratios (height/width). Every base entry `k` is paired with a rotated
/// entry `-k` holding the reciprocal.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectRatios {
    entries: BTreeMap<String, f64>,
}

impl AspectRatios {
    /// The built-in film formats, initialized once per process.
    pub fn standard() -> &'static AspectRatios {
        &STANDARD
    }

    /// Builds a table from base entries, deriving the rotated variants.
    ///
    /// Fails if a name is empty or already carries the rotation prefix, or if a ratio
    /// is not a finite positive number.
    pub fn from_base<I, S>(base: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let base: Vec<(String, f64)> = base
            .into_iter()
            .map(|(name, ratio)| (name.into(), ratio))
            .collect();
        for (name, ratio) in &base {
            validate_entry(name, *ratio)?;
        }
        Ok(Self::with_flipped(base))
    }

    /// Returns a copy of this table with `extra` base entries (and their rotated
    /// variants) added. Existing names are overridden.
    pub fn extended<I, S>(&self, extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let extra = Self::from_base(extra)?;
        let mut entries = self.entries.clone();
        for (name, ratio) in extra.entries {
            if let Some(previous) = entries.insert(name.clone(), ratio) {
                tracing::debug!(%name, previous, ratio, "aspect ratio overridden");
            }
        }
        Ok(Self { entries })
    }

    fn with_flipped<I>(base: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let mut entries = BTreeMap::new();
        let mut flipped = Vec::new();
        for (name, ratio) in base {
            flipped.push((format!("{FLIPPED_PREFIX}{name}"), 1.0 / ratio));
            entries.insert(name, ratio);
        }
        entries.extend(flipped);
        Self { entries }
    }

    /// Looks up a ratio by name.
    pub fn get(&self, name: &str) -> Result<f64> {
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| EaselError::UnknownRatio {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Entries in name order, rotated variants included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub(crate) fn validate_entry(name: &str, ratio: f64) -> Result<()> {
    if name.is_empty() {
        return Err(EaselError::InvalidConfig(
            "aspect ratio name must not be empty".into(),
        ));
    }
    if name.starts_with(FLIPPED_PREFIX) {
        return Err(EaselError::InvalidConfig(format!(
            "aspect ratio name '{name}' must not start with '{FLIPPED_PREFIX}' (rotated variants are derived)"
        )));
    }
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(EaselError::InvalidConfig(format!(
            "aspect ratio '{name}' must be a finite positive number, got {ratio}"
        )));
    }
    Ok(())
}
