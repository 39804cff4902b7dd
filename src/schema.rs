// SPDX-License-Identifier: MIT

//! Shape-checking for payloads crossing the network boundary.
//!
//! Two deliberate, asymmetric policies:
//! - single-entity payloads degrade to absence (`None`) on validation failure
//! - list payloads degrade to an empty collection, with the cause kept in
//!   [`ListFetch`] so composed fetchers can tell schema failures apart from
//!   transport failures

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationErrors};

/// Typed outcome of a list fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFetch<T> {
    /// Backend returned a well-formed collection (possibly empty).
    Complete(Vec<T>),
    /// Payload failed shape validation; logged and degraded.
    Malformed,
    /// Transport or backend failure; logged and degraded.
    Unavailable,
}

impl<T> ListFetch<T> {
    /// Collapse the degraded variants to an empty collection for display.
    /// Callers that need the distinction match on the variants instead.
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListFetch::Complete(items) => items,
            ListFetch::Malformed | ListFetch::Unavailable => Vec::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, ListFetch::Complete(_))
    }
}

/// Decode and validate a single-entity payload.
///
/// Any shape or constraint failure logs and returns `None`, so a malformed
/// entity reads as "not found" rather than an error.
pub fn decode_entity<T>(what: &str, value: Value) -> Option<T>
where
    T: DeserializeOwned + Validate,
{
    let entity: T = match serde_json::from_value(value) {
        Ok(entity) => entity,
        Err(e) => {
            tracing::error!(what, error = %e, "Invalid data structure from API");
            return None;
        }
    };

    if let Err(e) = entity.validate() {
        tracing::error!(what, error = %e, "Data from API failed constraint checks");
        return None;
    }

    Some(entity)
}

/// Decode and validate a list payload.
///
/// A failure anywhere in the array degrades the whole list; one malformed
/// entity must not be mistaken for a shorter valid listing.
pub fn decode_list<T>(what: &str, value: Value) -> ListFetch<T>
where
    T: DeserializeOwned + Validate,
{
    let items: Vec<T> = match serde_json::from_value(value) {
        Ok(items) => items,
        Err(e) => {
            tracing::error!(what, error = %e, "Invalid list structure from API");
            return ListFetch::Malformed;
        }
    };

    for item in &items {
        if let Err(e) = item.validate() {
            tracing::error!(what, error = %e, "List entry from API failed constraint checks");
            return ListFetch::Malformed;
        }
    }

    ListFetch::Complete(items)
}

/// All messages recorded for one field of a failed validation.
pub fn field_messages(errors: &ValidationErrors, field: &str) -> Vec<String> {
    errors
        .field_errors()
        .get(field)
        .map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// First field-level message, preferring fields in the order given, falling
/// back to any other field and then to a generic message.
pub fn validation_message(errors: &ValidationErrors, preferred: &[&str]) -> String {
    let by_field = errors.field_errors();

    for field in preferred {
        if let Some(message) = by_field
            .get(*field)
            .and_then(|errs| errs.iter().find_map(|e| e.message.as_ref()))
        {
            return message.to_string();
        }
    }

    by_field
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Validation failed.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate, PartialEq)]
    struct Probe {
        id: String,
        #[validate(range(min = 1, max = 5))]
        rating: u8,
    }

    #[test]
    fn test_decode_entity_ok() {
        let value = json!({"id": "r1", "rating": 4});
        let probe: Option<Probe> = decode_entity("probe", value);
        assert_eq!(
            probe,
            Some(Probe {
                id: "r1".to_string(),
                rating: 4
            })
        );
    }

    #[test]
    fn test_decode_entity_missing_field_is_absent() {
        let value = json!({"rating": 4});
        assert_eq!(decode_entity::<Probe>("probe", value), None);
    }

    #[test]
    fn test_decode_entity_constraint_failure_is_absent() {
        let value = json!({"id": "r1", "rating": 9});
        assert_eq!(decode_entity::<Probe>("probe", value), None);
    }

    #[test]
    fn test_decode_list_ok() {
        let value = json!([{"id": "a", "rating": 1}, {"id": "b", "rating": 5}]);
        let list: ListFetch<Probe> = decode_list("probe", value);
        assert!(list.is_complete());
        assert_eq!(list.into_items().len(), 2);
    }

    #[test]
    fn test_decode_list_one_bad_entry_degrades_whole_list() {
        let value = json!([{"id": "a", "rating": 1}, {"id": "b"}]);
        let list: ListFetch<Probe> = decode_list("probe", value);
        assert_eq!(list, ListFetch::Malformed);
        assert!(list.into_items().is_empty());
    }

    #[test]
    fn test_decode_list_constraint_failure_degrades_whole_list() {
        let value = json!([{"id": "a", "rating": 1}, {"id": "b", "rating": 9}]);
        let list: ListFetch<Probe> = decode_list("probe", value);
        assert_eq!(list, ListFetch::Malformed);
    }

    #[test]
    fn test_decode_list_non_array_degrades() {
        let value = json!({"items": []});
        let list: ListFetch<Probe> = decode_list("probe", value);
        assert_eq!(list, ListFetch::Malformed);
    }
}
