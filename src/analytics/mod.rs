//! Client-side aggregation over an already labeled comment list.
//!
//! Everything here is pure and synchronous; the dashboard recomputes each view
//! only when the comment list itself changes.

mod export;
mod keywords;
mod sentiment;
mod timeline;

pub use export::{comments_to_csv, export_file_name, CSV_HEADER, CSV_MIME_TYPE};
pub use keywords::{tokenize, top_keywords, Keyword, TOP_KEYWORD_LIMIT};
pub use sentiment::{format_percentage, CommentStatistics, SentimentDistribution};
pub use timeline::{month_index, monthly_distribution, MonthlyBucket, MONTH_LABELS};

use crate::models::Comment;

/// Everything the results page draws, derived from one comment list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardInsights {
    pub distribution: SentimentDistribution,
    pub statistics: CommentStatistics,
    pub monthly: Vec<MonthlyBucket>,
    pub keywords: Vec<Keyword>,
}

impl DashboardInsights {
    pub fn from_comments(comments: &[Comment]) -> Self {
        Self {
            distribution: SentimentDistribution::from_comments(comments),
            statistics: CommentStatistics::from_comments(comments),
            monthly: monthly_distribution(comments),
            keywords: top_keywords(comments),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.statistics.total == 0
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::{Comment, Sentiment};

    pub fn comment(id: &str, text: &str, timestamp: &str, sentiment: Sentiment) -> Comment {
        Comment {
            video_id: "dQw4w9WgXcQ".into(),
            comment_id: id.into(),
            masked_username: format!("user_{id}"),
            text: text.into(),
            timestamp: timestamp.into(),
            sentiment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::comment;
    use super::*;
    use crate::models::Sentiment;

    #[test]
    fn test_insights_for_empty_list() {
        let insights = DashboardInsights::from_comments(&[]);
        assert!(insights.is_empty());
        assert_eq!(insights, DashboardInsights::default());
    }

    #[test]
    fn test_insights_bundle() {
        let comments = vec![
            comment("1", "Brilliant breakdown of the problem", "2024-02-14T12:00:00", Sentiment::Agree),
            comment("2", "Brilliant, though slightly rushed", "2023-02-11T12:00:00", Sentiment::Neutral),
        ];

        let insights = DashboardInsights::from_comments(&comments);
        assert_eq!(insights.statistics.total, 2);
        assert_eq!(insights.distribution.agree, 50.0);
        assert_eq!(insights.monthly[1].count, Some(2));
        assert_eq!(insights.keywords[0], Keyword { word: "brilliant".into(), count: 2 });
    }
}
