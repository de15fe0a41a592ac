use std::fmt;

use serde::Serialize;

/// Qualitative movement pattern categories for one sensor channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternLabel {
    /// Net drift larger than the noise scale of the series.
    Progressive,
    /// Movement correlated with the temperature series.
    Thermal,
    /// Dominant low-frequency spectral peak.
    Seasonal,
    /// No test triggered.
    None,
    /// Fewer samples than the classification floor.
    InsufficientData,
}

impl fmt::Display for PatternLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PatternLabel::Progressive => "progressive",
            PatternLabel::Thermal => "thermal",
            PatternLabel::Seasonal => "seasonal",
            PatternLabel::None => "none",
            PatternLabel::InsufficientData => "insufficient_data",
        };
        f.write_str(name)
    }
}

/// Duplicate-free set of pattern labels, in insertion order.
///
/// Backed by a Vec: the label domain is tiny and display order matters to
/// the reporting collaborator. The sentinels `None` and `InsufficientData`
/// only ever appear as singleton sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelSet(Vec<PatternLabel>);

impl LabelSet {
    pub(crate) fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn sentinel(label: PatternLabel) -> Self {
        Self(vec![label])
    }

    pub(crate) fn insert(&mut self, label: PatternLabel) {
        if !self.0.contains(&label) {
            self.0.push(label);
        }
    }

    pub fn contains(&self, label: PatternLabel) -> bool {
        self.0.contains(&label)
    }

    pub fn labels(&self) -> &[PatternLabel] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{label}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a LabelSet {
    type Item = &'a PatternLabel;
    type IntoIter = std::slice::Iter<'a, PatternLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
