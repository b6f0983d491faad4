use serde::{Deserialize, Serialize};

/// Sort direction for one ordering key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// One key of a multi-key ordering specification.
///
/// An ordered sequence of these defines a stable multi-key sort: earlier
/// entries take precedence, and an absent direction excludes the key from
/// the effective ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortingField {
    pub field: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}

impl SortingField {
    /// Ascending sort on a field
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Some(SortDirection::Asc),
        }
    }

    /// Descending sort on a field
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Some(SortDirection::Desc),
        }
    }

    /// A field with no explicit order
    pub fn unordered(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: None,
        }
    }
}

/// Drop direction-less entries while preserving precedence order
pub fn effective_sort(fields: &[SortingField]) -> Vec<&SortingField> {
    fields
        .iter()
        .filter(|field| field.direction.is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(SortingField::asc("price").direction, Some(SortDirection::Asc));
        assert_eq!(SortingField::desc("name").direction, Some(SortDirection::Desc));
        assert_eq!(SortingField::unordered("id").direction, None);
    }

    #[test]
    fn test_effective_sort_preserves_precedence() {
        let fields = vec![
            SortingField::asc("price"),
            SortingField::unordered("id"),
            SortingField::desc("name"),
        ];
        let effective = effective_sort(&fields);
        assert_eq!(effective.len(), 2);
        assert_eq!(effective[0].field, "price");
        assert_eq!(effective[1].field, "name");
    }

    #[test]
    fn test_round_trip_preserves_precedence() {
        let fields = vec![SortingField::asc("price"), SortingField::desc("name")];
        let json = serde_json::to_string(&fields).unwrap();
        let parsed: Vec<SortingField> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, fields);
        assert_eq!(parsed[0].field, "price");
        assert_eq!(parsed[1].field, "name");
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(SortingField::asc("price")).unwrap();
        assert_eq!(json, serde_json::json!({"field": "price", "direction": "asc"}));

        let json = serde_json::to_value(SortingField::unordered("id")).unwrap();
        assert_eq!(json, serde_json::json!({"field": "id"}));
    }
}
