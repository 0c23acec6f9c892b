use serde::{Deserialize, Serialize};

/// Semantic tag of a metric; drives wording only, never ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Monetary cost per completion.
    Cost,
    /// Wall-clock latency.
    Duration,
    /// Untagged custom metric; rendered without a directional word.
    Custom,
}

impl MetricKind {
    fn word(&self, is_best: bool) -> Option<&'static str> {
        match (self, is_best) {
            (MetricKind::Cost, true) => Some("cheaper"),
            (MetricKind::Cost, false) => Some("more expensive"),
            (MetricKind::Duration, true) => Some("faster"),
            (MetricKind::Duration, false) => Some("slower"),
            (MetricKind::Custom, _) => None,
        }
    }
}

/// Display tone attached to a ranked value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// The best value of the population.
    Favorable,
    /// The worst value of the population.
    Unfavorable,
    /// Mid-field, or no ranking applies.
    Neutral,
}

impl Tone {
    /// CSS class the rendering layer attaches to the value.
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Favorable => "text-positive",
            Tone::Unfavorable => "text-negative",
            Tone::Neutral => "",
        }
    }
}

/// Classification of one value against its population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricBadge {
    /// Whether the value is the best of the population.
    pub is_best: bool,
    /// Whether the value is the worst of the population.
    pub is_worst: bool,
    /// Relative difference, e.g. `"3.0x cheaper"`; absent when no ratio is
    /// computable or the population carries no spread.
    pub relative_text: Option<String>,
    /// Display tone for the value.
    pub tone: Tone,
}

impl MetricBadge {
    /// CSS class shorthand for the rendering layer.
    pub fn color_class(&self) -> &'static str {
        self.tone.css_class()
    }

    fn neutral() -> Self {
        Self {
            is_best: false,
            is_worst: false,
            relative_text: None,
            tone: Tone::Neutral,
        }
    }
}

/// Ranks `value` within `population` and renders its relative difference.
///
/// An empty or spread-free population is neutral. The ratio is always ≥ 1:
/// the best value reports its margin over the worst (`max/min`), any other
/// value reports its distance from the best. Ratios are only rendered when
/// the divisor is strictly positive (`min` for the best case and the
/// higher-is-better direction, the value itself for the lower-is-better
/// non-best case); otherwise the text is omitted.
pub fn rank_and_badge(
    value: f64,
    population: &[f64],
    higher_is_better: bool,
    kind: MetricKind,
) -> MetricBadge {
    let Some(min) = population.iter().copied().reduce(f64::min) else {
        return MetricBadge::neutral();
    };
    let max = population.iter().copied().fold(min, f64::max);
    if min == max {
        return MetricBadge::neutral();
    }

    let is_best = if higher_is_better { value == max } else { value == min };
    let is_worst = if higher_is_better { value == min } else { value == max };

    let ratio = if is_best {
        (min > 0.0).then(|| max / min)
    } else if higher_is_better {
        (min > 0.0).then(|| max / value)
    } else {
        (value > 0.0).then(|| value / min)
    };
    let relative_text = ratio.filter(|ratio| ratio.is_finite()).map(|ratio| {
        match kind.word(is_best) {
            Some(word) => format!("{ratio:.1}x {word}"),
            None => format!("{ratio:.1}x"),
        }
    });

    let tone = if is_best {
        Tone::Favorable
    } else if is_worst {
        Tone::Unfavorable
    } else {
        Tone::Neutral
    };

    MetricBadge {
        is_best,
        is_worst,
        relative_text,
        tone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_population_is_neutral() {
        let badge = rank_and_badge(5.0, &[5.0, 5.0, 5.0], false, MetricKind::Cost);
        assert!(!badge.is_best);
        assert!(!badge.is_worst);
        assert_eq!(badge.relative_text, None);
        assert_eq!(badge.color_class(), "");
    }

    #[test]
    fn zero_divisor_omits_the_text() {
        let badge = rank_and_badge(0.0, &[0.0, 10.0], false, MetricKind::Cost);
        assert!(badge.is_best);
        assert_eq!(badge.relative_text, None);
    }
}
