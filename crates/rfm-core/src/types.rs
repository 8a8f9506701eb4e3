//! Data model shared by every pipeline stage
//!
//! Records flow strictly forward: [`TransactionRecord`] rows are aggregated
//! into [`CustomerMetrics`], binned into [`CustomerScores`] and finally
//! labelled into a [`SegmentedCustomer`]. Every value is immutable once a
//! stage hands it on.

use crate::error::{Error, Result};
use crate::record::parse_purchase_date;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Opaque customer identifier
    CustomerId
);

string_id!(
    /// Opaque order identifier
    OrderId
);

/// A single purchase, as supplied by the ingestion collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub customer_id: CustomerId,
    pub order_id: OrderId,
    pub purchase_date: NaiveDateTime,
    /// Non-negative, finite amount
    pub amount: f64,
}

impl TransactionRecord {
    /// Create a record, rejecting negative or non-finite amounts
    pub fn new(
        customer_id: impl Into<CustomerId>,
        order_id: impl Into<OrderId>,
        purchase_date: NaiveDateTime,
        amount: f64,
    ) -> Result<Self> {
        let order_id = order_id.into();
        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::malformed_unpositioned(format!(
                "order {order_id}: transaction amount {amount} must be a non-negative number"
            )));
        }

        Ok(Self {
            customer_id: customer_id.into(),
            order_id,
            purchase_date,
            amount,
        })
    }

    /// Create a record from its textual fields
    ///
    /// Accepts any of the date layouts understood by [`parse_purchase_date`].
    pub fn parse(
        customer_id: &str,
        order_id: &str,
        purchase_date: &str,
        amount: &str,
    ) -> Result<Self> {
        let date = parse_purchase_date(purchase_date)?;
        let value: f64 = amount.trim().parse().map_err(|_| {
            Error::malformed_unpositioned(format!(
                "order {order_id}: non-numeric transaction amount '{amount}'"
            ))
        })?;
        Self::new(customer_id.trim(), order_id.trim(), date, value)
    }
}

/// The three behavioural measurements of a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Metric {
    Recency,
    Frequency,
    Monetary,
}

impl Metric {
    /// All metrics in R, F, M order
    pub const ALL: [Metric; 3] = [Metric::Recency, Metric::Frequency, Metric::Monetary];

    /// Column name of the raw metric
    pub fn name(&self) -> &'static str {
        match self {
            Self::Recency => "Recency",
            Self::Frequency => "Frequency",
            Self::Monetary => "MonetaryValue",
        }
    }

    /// Column name of the ordinal score derived from the metric
    pub fn score_name(&self) -> &'static str {
        match self {
            Self::Recency => "RecencyScore",
            Self::Frequency => "FrequencyScore",
            Self::Monetary => "MonetaryScore",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-customer raw metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerMetrics {
    pub customer_id: CustomerId,
    /// Whole days since the most recent purchase
    pub recency: u32,
    /// Number of transactions
    pub frequency: u32,
    /// Sum of transaction amounts
    pub monetary: f64,
}

impl CustomerMetrics {
    /// Get a metric as a float, for binning
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Recency => f64::from(self.recency),
            Metric::Frequency => f64::from(self.frequency),
            Metric::Monetary => self.monetary,
        }
    }
}

/// Highest ordinal score a single metric can take
///
/// Three component scores of this size still sum into a `u8`.
pub const MAX_SCORE: u8 = 85;

/// Ordinal R, F and M scores plus their sum
///
/// Every component lies in `1..=MAX_SCORE` and the composite is computed on
/// construction, so `rfm_score == recency + frequency + monetary` holds for
/// every value, deserialized ones included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCustomerScores")]
pub struct CustomerScores {
    customer_id: CustomerId,
    recency_score: u8,
    frequency_score: u8,
    monetary_score: u8,
    rfm_score: u8,
}

#[derive(Deserialize)]
struct RawCustomerScores {
    customer_id: CustomerId,
    recency_score: u8,
    frequency_score: u8,
    monetary_score: u8,
    rfm_score: u8,
}

impl TryFrom<RawCustomerScores> for CustomerScores {
    type Error = Error;

    fn try_from(raw: RawCustomerScores) -> Result<Self> {
        let scores = Self::new(
            raw.customer_id,
            raw.recency_score,
            raw.frequency_score,
            raw.monetary_score,
        )?;
        if scores.rfm_score != raw.rfm_score {
            return Err(Error::InvalidInput(format!(
                "customer {}: rfm_score {} does not equal the component sum {}",
                scores.customer_id, raw.rfm_score, scores.rfm_score
            )));
        }
        Ok(scores)
    }
}

impl CustomerScores {
    /// Build the scores of one customer
    ///
    /// Fails with [`Error::InvalidParameter`] when a component lies outside
    /// `1..=MAX_SCORE`.
    pub fn new(customer_id: CustomerId, recency: u8, frequency: u8, monetary: u8) -> Result<Self> {
        for (metric, score) in Metric::ALL.into_iter().zip([recency, frequency, monetary]) {
            if !(1..=MAX_SCORE).contains(&score) {
                return Err(Error::InvalidParameter(format!(
                    "customer {customer_id}: {} {score} outside 1..={MAX_SCORE}",
                    metric.score_name()
                )));
            }
        }
        let rfm_score = recency
            .checked_add(frequency)
            .and_then(|sum| sum.checked_add(monetary))
            .ok_or_else(|| {
                Error::InvalidParameter(format!("customer {customer_id}: rfm_score overflows u8"))
            })?;
        Ok(Self {
            customer_id,
            recency_score: recency,
            frequency_score: frequency,
            monetary_score: monetary,
            rfm_score,
        })
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn recency_score(&self) -> u8 {
        self.recency_score
    }

    pub fn frequency_score(&self) -> u8 {
        self.frequency_score
    }

    pub fn monetary_score(&self) -> u8 {
        self.monetary_score
    }

    /// Composite score (sum of the three components)
    pub fn rfm_score(&self) -> u8 {
        self.rfm_score
    }

    /// Get the score for one metric
    pub fn score(&self, metric: Metric) -> u8 {
        match metric {
            Metric::Recency => self.recency_score,
            Metric::Frequency => self.frequency_score,
            Metric::Monetary => self.monetary_score,
        }
    }
}

/// Equal-population value tier of the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValueSegment {
    #[serde(rename = "Low-Value")]
    Low,
    #[serde(rename = "Mid-Value")]
    Mid,
    #[serde(rename = "High-Value")]
    High,
}

impl ValueSegment {
    /// All tiers in ascending order
    pub const ALL: [ValueSegment; 3] = [ValueSegment::Low, ValueSegment::Mid, ValueSegment::High];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low-Value",
            Self::Mid => "Mid-Value",
            Self::High => "High-Value",
        }
    }

    /// Tier for a 0-based group index, if there is one
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for ValueSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named behavioural segment derived from fixed composite-score thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SegmentLabel {
    Champions,
    #[serde(rename = "Potential Loyalists")]
    PotentialLoyalists,
    #[serde(rename = "At Risk Customers")]
    AtRiskCustomers,
    #[serde(rename = "Can't Lose")]
    CantLose,
    Lost,
    Unclassified,
}

impl SegmentLabel {
    pub const ALL: [SegmentLabel; 6] = [
        SegmentLabel::Champions,
        SegmentLabel::PotentialLoyalists,
        SegmentLabel::AtRiskCustomers,
        SegmentLabel::CantLose,
        SegmentLabel::Lost,
        SegmentLabel::Unclassified,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Champions => "Champions",
            Self::PotentialLoyalists => "Potential Loyalists",
            Self::AtRiskCustomers => "At Risk Customers",
            Self::CantLose => "Can't Lose",
            Self::Lost => "Lost",
            Self::Unclassified => "Unclassified",
        }
    }
}

impl fmt::Display for SegmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for SegmentLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|label| label.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidParameter(format!("unknown segment label '{s}'")))
    }
}

/// A fully processed customer row handed to presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentedCustomer {
    pub metrics: CustomerMetrics,
    pub scores: CustomerScores,
    pub value_segment: ValueSegment,
    pub label: SegmentLabel,
}

impl SegmentedCustomer {
    pub fn customer_id(&self) -> &CustomerId {
        &self.metrics.customer_id
    }
}
