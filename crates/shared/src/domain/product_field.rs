//! The editable product columns and the value type each one accepts.
//!
//! This is the single allow-list for single-field updates. The service layer
//! parses field names through [`ProductField::from_str`], the repository only
//! ever receives a parsed [`ProductField`], and the client uses the same enum to
//! lay out editable cells.

use crate::errors::ServiceError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProductField {
    ArticleNo,
    ProductService,
    InPrice,
    Price,
    Unit,
    InStock,
    Description,
}

/// Value type of a column, with the bounds of its Postgres declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `VARCHAR(max_chars)`, or `TEXT` when unbounded.
    Text { max_chars: Option<usize> },
    /// Unscaled `NUMERIC`; prices keep at most this many digits either side of the point.
    Decimal {
        integer_digits: usize,
        fraction_digits: usize,
    },
    Integer,
}

const PRICE: FieldKind = FieldKind::Decimal {
    integer_digits: 10,
    fraction_digits: 2,
};

/// A value that has passed the field's type check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Canonical decimal literal, bound as NUMERIC.
    Decimal(String),
    Integer(i32),
}

impl ProductField {
    pub const ALL: [ProductField; 7] = [
        ProductField::ArticleNo,
        ProductField::ProductService,
        ProductField::InPrice,
        ProductField::Price,
        ProductField::Unit,
        ProductField::InStock,
        ProductField::Description,
    ];

    pub fn column(self) -> &'static str {
        match self {
            ProductField::ArticleNo => "article_no",
            ProductField::ProductService => "product_service",
            ProductField::InPrice => "in_price",
            ProductField::Price => "price",
            ProductField::Unit => "unit",
            ProductField::InStock => "in_stock",
            ProductField::Description => "description",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            ProductField::ArticleNo => FieldKind::Text {
                max_chars: Some(100),
            },
            ProductField::ProductService => FieldKind::Text {
                max_chars: Some(255),
            },
            ProductField::Unit => FieldKind::Text {
                max_chars: Some(50),
            },
            ProductField::Description => FieldKind::Text { max_chars: None },
            ProductField::InPrice | ProductField::Price => PRICE,
            ProductField::InStock => FieldKind::Integer,
        }
    }

    /// Type-checks a raw JSON value for this field.
    pub fn coerce(self, value: &Value) -> Result<FieldValue, ServiceError> {
        let invalid = |reason: &str| ServiceError::InvalidValue {
            field: self.column().to_string(),
            reason: reason.to_string(),
        };

        match self.kind() {
            FieldKind::Text { max_chars } => {
                let text = match value {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    _ => return Err(invalid("expected a string")),
                };
                match max_chars {
                    Some(max) if text.chars().count() > max => {
                        Err(invalid(&format!("at most {max} characters")))
                    }
                    _ => Ok(FieldValue::Text(text)),
                }
            }

            FieldKind::Decimal {
                integer_digits,
                fraction_digits,
            } => {
                let raw = match value {
                    Value::String(s) => s.trim().to_string(),
                    Value::Number(n) => n.to_string(),
                    _ => return Err(invalid("expected a number")),
                };
                let literal =
                    DecimalLiteral::parse(&raw).ok_or_else(|| invalid("expected a number"))?;
                if literal.whole.len() > integer_digits
                    || literal.fraction.len() > fraction_digits
                {
                    return Err(invalid(&format!(
                        "at most {integer_digits} integer and {fraction_digits} fraction digits"
                    )));
                }
                Ok(FieldValue::Decimal(literal.to_string()))
            }

            FieldKind::Integer => {
                let parsed = match value {
                    Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
                    Value::String(s) => s.trim().parse::<i32>().ok(),
                    _ => None,
                };
                parsed
                    .map(FieldValue::Integer)
                    .ok_or_else(|| invalid("expected a whole number"))
            }
        }
    }
}

/// Plain decimal: optional sign, digits, optional fraction. No exponent,
/// no NaN or infinity.
struct DecimalLiteral<'a> {
    negative: bool,
    /// Integer digits without leading zeros; empty for zero.
    whole: &'a str,
    fraction: &'a str,
}

impl<'a> DecimalLiteral<'a> {
    fn parse(raw: &'a str) -> Option<Self> {
        let (negative, unsigned) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw.strip_prefix('+').unwrap_or(raw)),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return None;
        }

        Some(Self {
            negative,
            whole: whole.trim_start_matches('0'),
            fraction,
        })
    }

    fn is_zero(&self) -> bool {
        self.whole.is_empty() && self.fraction.chars().all(|c| c == '0')
    }
}

/// Renders the literal the way Postgres prints an unscaled NUMERIC, so the
/// stored text and the submitted text agree.
impl fmt::Display for DecimalLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative && !self.is_zero() {
            f.write_str("-")?;
        }
        f.write_str(if self.whole.is_empty() { "0" } else { self.whole })?;
        if !self.fraction.is_empty() {
            write!(f, ".{}", self.fraction)?;
        }
        Ok(())
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for ProductField {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductField::ALL
            .into_iter()
            .find(|field| field.column() == s)
            .ok_or_else(|| ServiceError::InvalidField(s.to_string()))
    }
}
