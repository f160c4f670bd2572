//! Metric name and metric data query types.
//!
//! Shared by every metric-bearing resource (applications, hosts, instances,
//! components, mobile applications, servers).

use chrono::{DateTime, Utc};

/// Query for `.../metrics.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricNamesQuery {
    /// Substring filter on metric names.
    pub name: Option<String>,
    pub page: Option<u32>,
    /// Continuation cursor; only honored by mobile applications.
    pub cursor: Option<String>,
}

/// Query for `.../metrics/data.json`.
///
/// `names` must hold at least one non-blank name. When `from`/`to` are omitted the API
/// defaults to the last 30 minutes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricDataQuery {
    pub names: Vec<String>,
    pub values: Vec<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub summarize: bool,
    /// Timeslice length in seconds; only honored by mobile applications.
    pub period: Option<u32>,
}

impl MetricDataQuery {
    /// Query for the given metric names over the default window.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Restrict to specific values (`average_response_time`, `call_count`, ...).
    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Start of the window.
    pub fn since(mut self, from: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self
    }

    /// End of the window.
    pub fn until(mut self, to: DateTime<Utc>) -> Self {
        self.to = Some(to);
        self
    }

    pub fn period(mut self, seconds: u32) -> Self {
        self.period = Some(seconds);
        self
    }

    /// Collapse the timeslices into a single summary value.
    pub fn summarize(mut self, summarize: bool) -> Self {
        self.summarize = summarize;
        self
    }
}
