use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result band of a finished review drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    /// At least 80% correct.
    Excellent,
    /// At least 50% correct.
    Good,
    NeedsPractice,
}

impl ScoreBand {
    /// Bands a score using exact integer ratios. An empty drill needs practice.
    #[must_use]
    pub fn from_score(correct: u32, total: u32) -> Self {
        if total == 0 {
            return Self::NeedsPractice;
        }
        let (correct, total) = (u64::from(correct), u64::from(total));
        if correct * 10 >= total * 8 {
            Self::Excellent
        } else if correct * 2 >= total {
            Self::Good
        } else {
            Self::NeedsPractice
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::NeedsPractice => "needs practice",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReviewSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("correct count ({correct}) exceeds total ({total})")]
    CountMismatch { correct: u32, total: u32 },
}

/// Outcome of a completed review drill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    correct: u32,
    total: u32,
    band: ScoreBand,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl ReviewSummary {
    /// # Errors
    ///
    /// Returns `ReviewSummaryError` if the counts or timestamps are inconsistent.
    pub fn new(
        correct: u32,
        total: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, ReviewSummaryError> {
        if completed_at < started_at {
            return Err(ReviewSummaryError::InvalidTimeRange);
        }
        if correct > total {
            return Err(ReviewSummaryError::CountMismatch { correct, total });
        }
        Ok(Self {
            correct,
            total,
            band: ScoreBand::from_score(correct, total),
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn band(&self) -> ScoreBand {
        self.band
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}
