use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{QuickMatchError, Result};

/// The closed set of filter operators understood by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperator {
    Eq,
    Neq,
    Gt,
    Gteq,
    Lt,
    Lteq,
    In,
    Nin,
    Like,
    Nlike,
    IsNull,
    IsNotNull,
    Between,
    Nbetween,
    Empty,
    Nempty,
}

impl FilterOperator {
    /// The lowercase wire code for this operator
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "eq",
            FilterOperator::Neq => "neq",
            FilterOperator::Gt => "gt",
            FilterOperator::Gteq => "gteq",
            FilterOperator::Lt => "lt",
            FilterOperator::Lteq => "lteq",
            FilterOperator::In => "in",
            FilterOperator::Nin => "nin",
            FilterOperator::Like => "like",
            FilterOperator::Nlike => "nlike",
            FilterOperator::IsNull => "isnull",
            FilterOperator::IsNotNull => "isnotnull",
            FilterOperator::Between => "between",
            FilterOperator::Nbetween => "nbetween",
            FilterOperator::Empty => "empty",
            FilterOperator::Nempty => "nempty",
        }
    }

    /// Whether this operator takes no value (isnull/isnotnull/empty/nempty)
    pub fn is_nullary(&self) -> bool {
        matches!(
            self,
            FilterOperator::IsNull
                | FilterOperator::IsNotNull
                | FilterOperator::Empty
                | FilterOperator::Nempty
        )
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterOperator {
    type Err = QuickMatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "eq" => Ok(FilterOperator::Eq),
            "neq" => Ok(FilterOperator::Neq),
            "gt" => Ok(FilterOperator::Gt),
            "gteq" => Ok(FilterOperator::Gteq),
            "lt" => Ok(FilterOperator::Lt),
            "lteq" => Ok(FilterOperator::Lteq),
            "in" => Ok(FilterOperator::In),
            "nin" => Ok(FilterOperator::Nin),
            "like" => Ok(FilterOperator::Like),
            "nlike" => Ok(FilterOperator::Nlike),
            "isnull" => Ok(FilterOperator::IsNull),
            "isnotnull" => Ok(FilterOperator::IsNotNull),
            "between" => Ok(FilterOperator::Between),
            "nbetween" => Ok(FilterOperator::Nbetween),
            "empty" => Ok(FilterOperator::Empty),
            "nempty" => Ok(FilterOperator::Nempty),
            other => Err(QuickMatchError::UnknownOperator(other.to_string())),
        }
    }
}

/// The declared type of a filtered field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
    Number,
    Boolean,
    Date,
    Array,
    Object,
    #[default]
    Any,
}

/// A filter value, replacing the original untyped payload with a small
/// tagged union; serialized untagged so payloads keep their JSON shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<FilterValue>),
}

impl FilterValue {
    /// Whether two values are comparable range bounds in the declared type
    fn comparable_in(&self, other: &FilterValue, parameter_type: ParameterType) -> bool {
        match parameter_type {
            ParameterType::Number => {
                matches!(self, FilterValue::Number(_)) && matches!(other, FilterValue::Number(_))
            }
            ParameterType::String => {
                matches!(self, FilterValue::String(_)) && matches!(other, FilterValue::String(_))
            }
            // Dates travel either as ISO strings or as epoch numbers
            ParameterType::Date | ParameterType::Any => matches!(
                (self, other),
                (FilterValue::Number(_), FilterValue::Number(_))
                    | (FilterValue::String(_), FilterValue::String(_))
            ),
            _ => false,
        }
    }

    /// Ordering between two bounds of the same primitive variant
    fn bound_lteq(&self, other: &FilterValue) -> bool {
        match (self, other) {
            (FilterValue::Number(a), FilterValue::Number(b)) => a <= b,
            (FilterValue::String(a), FilterValue::String(b)) => a <= b,
            _ => false,
        }
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Number(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Number(value as f64)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::String(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::String(value)
    }
}

/// One predicate: operator plus optional value and case flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub operator: FilterOperator,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<FilterValue>,

    #[serde(rename = "isCaseSensitive", skip_serializing_if = "Option::is_none")]
    pub is_case_sensitive: Option<bool>,
}

impl SearchFilter {
    /// Create a filter from an operator and an optional value
    pub fn new(operator: FilterOperator, value: Option<FilterValue>) -> Self {
        Self {
            operator,
            value,
            is_case_sensitive: None,
        }
    }

    /// Equality filter
    pub fn eq(value: impl Into<FilterValue>) -> Self {
        Self::new(FilterOperator::Eq, Some(value.into()))
    }

    /// Inequality filter
    pub fn neq(value: impl Into<FilterValue>) -> Self {
        Self::new(FilterOperator::Neq, Some(value.into()))
    }

    /// Substring/pattern filter
    pub fn like(value: impl Into<FilterValue>) -> Self {
        Self::new(FilterOperator::Like, Some(value.into()))
    }

    /// Membership filter over a candidate set
    pub fn is_in<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<FilterValue>,
    {
        let list = values.into_iter().map(Into::into).collect();
        Self::new(FilterOperator::In, Some(FilterValue::List(list)))
    }

    /// Inclusive range filter over an ordered pair of bounds
    pub fn between(lower: impl Into<FilterValue>, upper: impl Into<FilterValue>) -> Self {
        Self::new(
            FilterOperator::Between,
            Some(FilterValue::List(vec![lower.into(), upper.into()])),
        )
    }

    /// Null-check filter; the value is ignored by the backend
    pub fn is_null() -> Self {
        Self::new(FilterOperator::IsNull, None)
    }

    /// Set the case sensitivity flag
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.is_case_sensitive = Some(case_sensitive);
        self
    }

    /// Prove the filter is well-formed for a field of the declared type.
    ///
    /// Checks shape only; semantic evaluation belongs to the backend.
    pub fn validate(&self, parameter_type: ParameterType) -> Result<()> {
        match self.operator {
            FilterOperator::Between | FilterOperator::Nbetween => {
                let bounds = match &self.value {
                    Some(FilterValue::List(list)) if list.len() == 2 => list,
                    _ => {
                        return Err(QuickMatchError::MalformedRange(format!(
                            "{} requires exactly two bounds",
                            self.operator
                        )))
                    }
                };
                if !bounds[0].comparable_in(&bounds[1], parameter_type) {
                    return Err(QuickMatchError::MalformedRange(format!(
                        "{} bounds are not comparable as {parameter_type:?}",
                        self.operator
                    )));
                }
                if !bounds[0].bound_lteq(&bounds[1]) {
                    return Err(QuickMatchError::MalformedRange(format!(
                        "{} lower bound exceeds upper bound",
                        self.operator
                    )));
                }
                Ok(())
            }
            FilterOperator::In | FilterOperator::Nin => match &self.value {
                Some(FilterValue::List(list)) if !list.is_empty() => Ok(()),
                Some(FilterValue::List(_)) => Err(QuickMatchError::EmptySet(format!(
                    "{} filter has an empty candidate set",
                    self.operator
                ))),
                _ => Err(QuickMatchError::EmptySet(format!(
                    "{} filter requires a list value",
                    self.operator
                ))),
            },
            // Nullary operators ignore any attached value
            _ => Ok(()),
        }
    }
}

/// Alternative filter set ORed against a parameter's main filters,
/// tagged with a code for traceability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOrParameter {
    pub code: String,
    pub filters: Vec<SearchFilter>,
}

impl SearchOrParameter {
    pub fn new(code: impl Into<String>, filters: Vec<SearchFilter>) -> Self {
        Self {
            code: code.into(),
            filters,
        }
    }
}

/// All constraints on one named field: a declared type, a main filter set
/// (ANDed together) and optional OR alternatives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchParameter {
    #[serde(rename = "type")]
    pub parameter_type: ParameterType,

    pub filters: Vec<SearchFilter>,

    #[serde(rename = "orParameters", skip_serializing_if = "Option::is_none")]
    pub or_parameters: Option<Vec<SearchOrParameter>>,
}

impl SearchParameter {
    /// Create an empty parameter of the declared type
    pub fn new(parameter_type: ParameterType) -> Self {
        Self {
            parameter_type,
            filters: Vec::new(),
            or_parameters: None,
        }
    }

    /// Add a filter to the main (ANDed) set
    pub fn with_filter(mut self, filter: SearchFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add an OR alternative
    pub fn with_or_parameter(mut self, or_parameter: SearchOrParameter) -> Self {
        self.or_parameters
            .get_or_insert_with(Vec::new)
            .push(or_parameter);
        self
    }

    /// Validate every filter, including the OR branches
    pub fn validate(&self) -> Result<()> {
        for filter in &self.filters {
            filter.validate(self.parameter_type)?;
        }
        if let Some(or_parameters) = &self.or_parameters {
            for or_parameter in or_parameters {
                for filter in &or_parameter.filters {
                    filter.validate(self.parameter_type)?;
                }
            }
        }
        Ok(())
    }
}

/// A compound predicate over a record: field name to parameter.
///
/// The expression is an opaque payload to this crate; it is validated for
/// shape, serialized, and handed to the backend for evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchExpression {
    parameters: FxHashMap<String, SearchParameter>,
}

impl SearchExpression {
    /// Create an empty expression
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the parameter for a field
    pub fn insert(&mut self, field: impl Into<String>, parameter: SearchParameter) -> &mut Self {
        self.parameters.insert(field.into(), parameter);
        self
    }

    /// Get the parameter for a field
    pub fn get(&self, field: &str) -> Option<&SearchParameter> {
        self.parameters.get(field)
    }

    /// Number of constrained fields
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Iterate over field/parameter pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &SearchParameter)> {
        self.parameters.iter()
    }

    /// Validate every parameter in the expression
    pub fn validate(&self) -> Result<()> {
        for parameter in self.parameters.values() {
            parameter.validate()?;
        }
        Ok(())
    }

    /// Validate and serialize to the JSON payload sent over IPC
    pub fn to_json(&self) -> Result<String> {
        self.validate()?;
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize and validate an expression from its JSON payload
    pub fn from_json(json: &str) -> Result<Self> {
        let expression: Self = serde_json::from_str(json)?;
        expression.validate()?;
        Ok(expression)
    }
}
