use serde::{Deserialize, Serialize};

use crate::models::{Comment, Sentiment};

/// Share of each label in percent, one decimal place.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct SentimentDistribution {
    pub agree: f64,
    pub disagree: f64,
    pub neutral: f64,
}

impl SentimentDistribution {
    pub fn from_comments(comments: &[Comment]) -> Self {
        let stats = CommentStatistics::from_comments(comments);
        if stats.total == 0 {
            return Self::default();
        }

        let share = |count: usize| round_one_decimal(count as f64 / stats.total as f64 * 100.0);
        Self {
            agree: share(stats.agree),
            disagree: share(stats.disagree),
            neutral: share(stats.neutral),
        }
    }

    #[inline]
    pub fn get(&self, sentiment: Sentiment) -> f64 {
        match sentiment {
            Sentiment::Agree => self.agree,
            Sentiment::Disagree => self.disagree,
            Sentiment::Neutral => self.neutral,
        }
    }
}

/// Absolute counts per label.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentStatistics {
    pub total: usize,
    pub agree: usize,
    pub disagree: usize,
    pub neutral: usize,
}

impl CommentStatistics {
    pub fn from_comments(comments: &[Comment]) -> Self {
        comments.iter().fold(Self::default(), |mut acc, comment| {
            acc.total += 1;
            match comment.sentiment {
                Sentiment::Agree => acc.agree += 1,
                Sentiment::Disagree => acc.disagree += 1,
                Sentiment::Neutral => acc.neutral += 1,
            }
            acc
        })
    }

    #[inline]
    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Agree => self.agree,
            Sentiment::Disagree => self.disagree,
            Sentiment::Neutral => self.neutral,
        }
    }
}

#[inline]
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `60.0` renders as `60`, `33.3` stays `33.3`.
pub fn format_percentage(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::comment;

    #[test]
    fn test_empty_list_is_all_zero() {
        assert_eq!(SentimentDistribution::from_comments(&[]), SentimentDistribution::default());
        assert_eq!(CommentStatistics::from_comments(&[]), CommentStatistics::default());
    }

    #[test]
    fn test_three_one_one_split() {
        let comments = vec![
            comment("1", "first", "2024-01-01T00:00:00Z", Sentiment::Agree),
            comment("2", "second", "2024-01-02T00:00:00Z", Sentiment::Agree),
            comment("3", "third", "2024-01-03T00:00:00Z", Sentiment::Agree),
            comment("4", "fourth", "2024-01-04T00:00:00Z", Sentiment::Disagree),
            comment("5", "fifth", "2024-01-05T00:00:00Z", Sentiment::Neutral),
        ];

        let distribution = SentimentDistribution::from_comments(&comments);
        assert_eq!(distribution.agree, 60.0);
        assert_eq!(distribution.disagree, 20.0);
        assert_eq!(distribution.neutral, 20.0);

        let stats = CommentStatistics::from_comments(&comments);
        assert_eq!(
            stats,
            CommentStatistics {
                total: 5,
                agree: 3,
                disagree: 1,
                neutral: 1
            }
        );
        assert_eq!(stats.get(Sentiment::Disagree), 1);
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        let comments = vec![
            comment("1", "a", "2024-01-01T00:00:00Z", Sentiment::Agree),
            comment("2", "b", "2024-01-01T00:00:00Z", Sentiment::Disagree),
            comment("3", "c", "2024-01-01T00:00:00Z", Sentiment::Neutral),
        ];

        let distribution = SentimentDistribution::from_comments(&comments);
        assert_eq!(distribution.get(Sentiment::Agree), 33.3);
        assert_eq!(distribution.get(Sentiment::Neutral), 33.3);
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(60.0), "60");
        assert_eq!(format_percentage(0.0), "0");
        assert_eq!(format_percentage(33.3), "33.3");
    }
}
