use chrono::NaiveDate;

use crate::models::Comment;

pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";
pub const CSV_HEADER: &str = "Comment ID,Masked Username,Text,Timestamp,Sentiment";

/// Renders comments as CSV. The text column is always quoted; other columns
/// are quoted only when they would otherwise break the row.
pub fn comments_to_csv(comments: &[Comment]) -> String {
    let mut csv = String::with_capacity(CSV_HEADER.len() + 1 + comments.len() * 96);
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for comment in comments {
        let row = [
            escape_field(&comment.comment_id),
            escape_field(&comment.masked_username),
            quote(&comment.text),
            escape_field(&comment.timestamp),
            comment.sentiment.label().to_string(),
        ];
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    csv
}

/// `comments_2024-05-01.csv`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("comments_{}.csv", date.format("%Y-%m-%d"))
}

#[inline]
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        quote(field)
    } else {
        field.to_string()
    }
}
