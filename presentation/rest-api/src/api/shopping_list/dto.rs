use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::Deserialize;
use serde_json::{Map, Value};

use business::domain::shopping_list::model::ShoppingItem;

use crate::api::product::dto::UnitDto;

/// Request body of `POST /shopping-list/add`.
///
/// Documented keys are `ProductID`, `Quantity` and `Unit`, but top-level keys
/// match case-insensitively. Absent or null fields take zero values, so a body
/// without `ProductID` resolves to product 0.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddToShoppingListRequest {
    /// Catalog id of the product to add
    #[serde(rename = "productid", default)]
    product_id: Option<i64>,
    /// Requested quantity. Currently ignored: items are always recorded
    /// with quantity 1.
    #[serde(default)]
    quantity: Option<f64>,
    /// Unit symbol, expected to be one of the product's available units
    #[serde(default)]
    unit: Option<String>,
}

impl AddToShoppingListRequest {
    /// Decodes a JSON object body regardless of the declared content type.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let fields: Map<String, Value> = serde_json::from_slice(body)?;
        let folded: Map<String, Value> = fields
            .into_iter()
            .map(|(key, value)| (key.to_lowercase(), value))
            .collect();
        serde_json::from_value(Value::Object(folded))
    }

    pub fn product_id(&self) -> i64 {
        self.product_id.unwrap_or_default()
    }

    pub fn quantity(&self) -> Option<f64> {
        self.quantity
    }

    pub fn unit(&self) -> &str {
        self.unit.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Object)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ShoppingItemResponse {
    /// Shopping item unique identifier
    pub id: String,
    /// Catalog id of the product
    pub product_id: i64,
    /// Recorded quantity
    pub quantity: f64,
    /// Unit chosen when the item was added
    pub unit: UnitDto,
    /// When the item was added
    pub added_at: DateTime<Utc>,
}

impl From<ShoppingItem> for ShoppingItemResponse {
    fn from(item: ShoppingItem) -> Self {
        Self {
            id: item.id.to_string(),
            product_id: item.product_id.value(),
            quantity: item.quantity,
            unit: item.unit.into(),
            added_at: item.added_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_documented_keys() {
        let request =
            AddToShoppingListRequest::from_json(br#"{"ProductID": 3, "Quantity": 2.5, "Unit": "g"}"#)
                .unwrap();

        assert_eq!(request.product_id(), 3);
        assert_eq!(request.quantity(), Some(2.5));
        assert_eq!(request.unit(), "g");
    }

    #[test]
    fn should_match_keys_ignoring_case() {
        let request =
            AddToShoppingListRequest::from_json(br#"{"productId": 1, "unit": "l"}"#).unwrap();

        assert_eq!(request.product_id(), 1);
        assert_eq!(request.unit(), "l");
    }

    #[test]
    fn should_default_missing_and_null_fields() {
        let request = AddToShoppingListRequest::from_json(br#"{"Unit": "l"}"#).unwrap();
        assert_eq!(request.product_id(), 0);
        assert_eq!(request.quantity(), None);

        let request =
            AddToShoppingListRequest::from_json(br#"{"ProductID": 2, "Unit": null}"#).unwrap();
        assert_eq!(request.unit(), "");
    }

    #[test]
    fn should_ignore_unknown_keys() {
        let request =
            AddToShoppingListRequest::from_json(br#"{"ProductID": 6, "Unit": "szt.", "Note": "x"}"#)
                .unwrap();

        assert_eq!(request.product_id(), 6);
    }

    #[test]
    fn should_fail_on_truncated_or_mistyped_body() {
        assert!(AddToShoppingListRequest::from_json(br#"{"ProductID": 1, "#).is_err());
        assert!(AddToShoppingListRequest::from_json(br#"{"ProductID": "one"}"#).is_err());
        assert!(AddToShoppingListRequest::from_json(b"[1, 2]").is_err());
        assert!(AddToShoppingListRequest::from_json(b"").is_err());
    }
}
