//! Round outcome classification
//!
//! Rules are evaluated in order. A loss short-circuits; every other rule falls
//! through, so one round can fire several of them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Recurring error tag reported by the round collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPattern {
    VowelPattern,
    BlendPosition,
    MorphemeEnding,
}

impl ErrorPattern {
    /// Tag as used in review reasons
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::VowelPattern => "vowel-pattern",
            Self::BlendPosition => "blend-position",
            Self::MorphemeEnding => "morpheme-ending",
        }
    }

    /// Rounds after which the word comes back
    #[must_use]
    pub const fn delays(self) -> &'static [u64] {
        match self {
            Self::VowelPattern => &[2, 5],
            Self::BlendPosition => &[2, 6],
            Self::MorphemeEnding => &[3, 8],
        }
    }

    /// Parse a tag such as `vowel-pattern`
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "vowel-pattern" => Some(Self::VowelPattern),
            "blend-position" => Some(Self::BlendPosition),
            "morpheme-ending" => Some(Self::MorphemeEnding),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Completion metrics of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub won: bool,
    pub guesses_used: usize,
    pub max_guesses: usize,
    pub hint_used: bool,
    pub error_pattern: Option<ErrorPattern>,
    pub duration: Duration,
}

impl RoundOutcome {
    /// A plain win with no hint and no error pattern
    #[must_use]
    pub const fn won(guesses_used: usize, max_guesses: usize, duration: Duration) -> Self {
        Self {
            won: true,
            guesses_used,
            max_guesses,
            hint_used: false,
            error_pattern: None,
            duration,
        }
    }

    /// A loss after using every guess
    #[must_use]
    pub const fn lost(max_guesses: usize, duration: Duration) -> Self {
        Self {
            won: false,
            guesses_used: max_guesses,
            max_guesses,
            hint_used: false,
            error_pattern: None,
            duration,
        }
    }

    #[must_use]
    pub const fn with_hint(mut self) -> Self {
        self.hint_used = true;
        self
    }

    #[must_use]
    pub const fn with_error_pattern(mut self, pattern: ErrorPattern) -> Self {
        self.error_pattern = Some(pattern);
        self
    }
}

/// One fired scheduling rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRule {
    pub reason: String,
    pub delays: Vec<u64>,
}

impl ScheduleRule {
    fn new(reason: impl Into<String>, delays: &[u64]) -> Self {
        Self {
            reason: reason.into(),
            delays: delays.to_vec(),
        }
    }
}

pub const LOST_DELAYS: &[u64] = &[1, 3, 7];
pub const HARD_SOLVE_DELAYS: &[u64] = &[3, 6];
pub const HINT_DELAYS: &[u64] = &[4];
pub const SLOW_DELAYS: &[u64] = &[5];

/// Classify `outcome` into the rules that fire for it
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use wordquest_engine::review::{RoundOutcome, classify};
///
/// let rules = classify(&RoundOutcome::lost(6, Duration::from_secs(30)), Duration::from_secs(90));
/// assert_eq!(rules.len(), 1);
/// assert_eq!(rules[0].delays, vec![1, 3, 7]);
/// ```
#[must_use]
pub fn classify(outcome: &RoundOutcome, slow_threshold: Duration) -> Vec<ScheduleRule> {
    if !outcome.won {
        return vec![ScheduleRule::new("lost", LOST_DELAYS)];
    }

    let mut rules = Vec::new();

    if outcome.guesses_used >= outcome.max_guesses.saturating_sub(1) {
        rules.push(ScheduleRule::new("hard-solve", HARD_SOLVE_DELAYS));
    }

    if outcome.hint_used {
        rules.push(ScheduleRule::new("hint-used", HINT_DELAYS));
    }

    if let Some(pattern) = outcome.error_pattern {
        rules.push(ScheduleRule::new(
            format!("pattern:{}", pattern.tag()),
            pattern.delays(),
        ));
    }

    if outcome.duration > slow_threshold {
        rules.push(ScheduleRule::new("slow-solve", SLOW_DELAYS));
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: Duration = Duration::from_secs(90);
    const QUICK: Duration = Duration::from_secs(20);

    fn reasons(outcome: &RoundOutcome) -> Vec<String> {
        classify(outcome, THRESHOLD)
            .into_iter()
            .map(|r| r.reason)
            .collect()
    }

    #[test]
    fn easy_win_fires_nothing() {
        assert!(reasons(&RoundOutcome::won(3, 6, QUICK)).is_empty());
    }

    #[test]
    fn loss_returns_early() {
        let outcome = RoundOutcome::lost(6, Duration::from_secs(600))
            .with_hint()
            .with_error_pattern(ErrorPattern::VowelPattern);
        let rules = classify(&outcome, THRESHOLD);

        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].reason, "lost");
        assert_eq!(rules[0].delays, LOST_DELAYS);
    }

    #[test]
    fn hard_solve_threshold() {
        assert_eq!(reasons(&RoundOutcome::won(5, 6, QUICK)), vec!["hard-solve"]);
        assert_eq!(reasons(&RoundOutcome::won(6, 6, QUICK)), vec!["hard-solve"]);
        assert!(reasons(&RoundOutcome::won(4, 6, QUICK)).is_empty());
    }

    #[test]
    fn rules_fall_through_in_order() {
        let outcome = RoundOutcome::won(6, 6, Duration::from_secs(120))
            .with_hint()
            .with_error_pattern(ErrorPattern::MorphemeEnding);

        assert_eq!(
            reasons(&outcome),
            vec!["hard-solve", "hint-used", "pattern:morpheme-ending", "slow-solve"]
        );
    }

    #[test]
    fn slow_needs_strictly_more_than_threshold() {
        assert!(reasons(&RoundOutcome::won(2, 6, THRESHOLD)).is_empty());
        assert_eq!(
            reasons(&RoundOutcome::won(2, 6, THRESHOLD + Duration::from_secs(1))),
            vec!["slow-solve"]
        );
    }

    #[test]
    fn pattern_tags_round_trip() {
        for pattern in [
            ErrorPattern::VowelPattern,
            ErrorPattern::BlendPosition,
            ErrorPattern::MorphemeEnding,
        ] {
            assert_eq!(ErrorPattern::from_tag(pattern.tag()), Some(pattern));
        }
        assert_eq!(
            ErrorPattern::from_tag("Vowel_Pattern"),
            Some(ErrorPattern::VowelPattern)
        );
        assert_eq!(ErrorPattern::from_tag("spelling"), None);
    }
}
