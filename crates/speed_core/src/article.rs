use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub type ArticleId = String;

/// Workflow stage of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Queue {
    /// Submitted, awaiting the searcher.
    Searcher,
    /// Awaiting moderation.
    Moderator,
    /// Approved by a moderator, awaiting analysis.
    Analyst,
    /// Rejected by a moderator.
    Rejected,
}

impl Queue {
    /// Literal value stored in the `queue` field of the article document.
    pub fn as_str(self) -> &'static str {
        match self {
            Queue::Searcher => "searcher",
            Queue::Moderator => "moderator",
            Queue::Analyst => "analyst",
            Queue::Rejected => "rejected",
        }
    }
}

impl fmt::Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A moderator's verdict on an article in the `moderator` queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    /// Queue the article moves to once the decision is persisted.
    pub fn target_queue(self) -> Queue {
        match self {
            Decision::Approve => Queue::Analyst,
            Decision::Reject => Queue::Rejected,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Approve => f.write_str("approve"),
            Decision::Reject => f.write_str("reject"),
        }
    }
}

/// One submitted research paper, as stored in the `articles` collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "_id")]
    pub id: ArticleId,
    #[serde(default, deserialize_with = "loose_string")]
    pub title: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub author: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub date_published: String,
    #[serde(
        rename = "DOI",
        default,
        deserialize_with = "loose_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub doi: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub journal: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub volume: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub pages: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue: Option<Queue>,
}

impl Article {
    /// `date_published` as `YYYY-MM-DD`.
    ///
    /// Accepts a plain date or an RFC 3339 timestamp; anything else is
    /// returned verbatim.
    pub fn formatted_date(&self) -> String {
        format_date(&self.date_published)
    }

    /// Whether the article belongs in the moderator's working set.
    ///
    /// Documents without a queue value are kept.
    pub fn awaits_moderation(&self) -> bool {
        matches!(self.queue, None | Some(Queue::Moderator))
    }

    /// Id and descriptive field values in display order (queue excluded).
    pub fn field_values(&self) -> [&str; 8] {
        [
            &self.id,
            &self.title,
            &self.author,
            &self.date_published,
            self.doi.as_deref().unwrap_or(""),
            &self.journal,
            &self.volume,
            &self.pages,
        ]
    }
}

pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return timestamp.with_timezone(&Utc).date_naive().format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

/// Scalar a stored document may hold where text is expected.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseScalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl From<LooseScalar> for String {
    fn from(value: LooseScalar) -> Self {
        match value {
            LooseScalar::Text(text) => text,
            LooseScalar::Integer(number) => number.to_string(),
            LooseScalar::Float(number) => number.to_string(),
            LooseScalar::Flag(flag) => flag.to_string(),
        }
    }
}

// Null becomes an empty string; numbers and booleans keep their text form.
fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LooseScalar>::deserialize(deserializer)?
        .map(String::from)
        .unwrap_or_default())
}

fn loose_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LooseScalar>::deserialize(deserializer)?.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decisions_map_to_terminal_queues() {
        assert_eq!(Decision::Approve.target_queue(), Queue::Analyst);
        assert_eq!(Decision::Reject.target_queue(), Queue::Rejected);
    }

    #[test]
    fn dates_are_normalized_to_calendar_day() {
        assert_eq!(format_date("2023-10-11"), "2023-10-11");
        assert_eq!(format_date("2023-10-11T08:30:00Z"), "2023-10-11");
        assert_eq!(format_date("2023-10-11T23:30:00-02:00"), "2023-10-12");
        assert_eq!(format_date("2023-10-11T00:30:00+02:00"), "2023-10-10");
        assert_eq!(format_date("sometime in 2020"), "sometime in 2020");
    }

    #[test]
    fn missing_queue_still_awaits_moderation() {
        let mut article = Article {
            id: "a".into(),
            ..Article::default()
        };
        assert!(article.awaits_moderation());
        article.queue = Some(Queue::Analyst);
        assert!(!article.awaits_moderation());
    }
}
