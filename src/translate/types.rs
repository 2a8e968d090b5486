use super::multipart::MultipartBody;
use crate::{Error, Result};
use serde_json::{Map, Value};
use tracing::{debug, warn};

pub const STATUS_COMPLETED: &str = "Translation completed";
pub const STATUS_NO_DATA: &str = "No translation data found.";

/// One outgoing call to the translation service.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub target_language: String,
    pub body: MultipartBody,
}

impl TranslationRequest {
    pub fn boundary(&self) -> &str {
        &self.body.boundary
    }

    pub fn content_type(&self) -> &str {
        &self.body.content_type
    }
}

/// One translated menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishRecord {
    pub original_name: String,
    pub translation: String,
    pub description: String,
    pub allergens: Vec<String>,
    pub is_certified: bool,
    pub dish_index: u64,
}

impl DishRecord {
    /// Allergens joined for display, `None` when the dish lists none.
    pub fn allergen_summary(&self) -> Option<String> {
        if self.allergens.is_empty() {
            None
        } else {
            Some(self.allergens.join(", "))
        }
    }

    fn from_entry(original_name: &str, info: &Map<String, Value>) -> Self {
        let text = |key: &str| {
            info.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            original_name: original_name.to_string(),
            translation: text("translation"),
            description: text("description"),
            allergens: string_list(info.get("allergens")),
            is_certified: info.get("certified").and_then(Value::as_bool).unwrap_or(false),
            dish_index: info.get("index").and_then(Value::as_u64).unwrap_or(0),
        }
    }
}

/// A successfully parsed response, dishes ordered by `dish_index`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslatedMenu {
    pub dishes: Vec<DishRecord>,
    pub menu_language: Option<String>,
    pub source_language: Option<String>,
}

impl TranslatedMenu {
    pub fn status_message(&self) -> &'static str {
        if self.dishes.is_empty() {
            STATUS_NO_DATA
        } else {
            STATUS_COMPLETED
        }
    }
}

/// Interprets a raw response body from the translation service.
pub fn parse_response(body: &[u8]) -> Result<TranslatedMenu> {
    if body.is_empty() {
        return Err(Error::EmptyResponse);
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| Error::parse(e.to_string()))?;
    let Value::Object(root) = value else {
        return Err(Error::parse("response is not a JSON object"));
    };

    if let Some(message) = root.get("error").and_then(Value::as_str) {
        return Err(Error::server(message));
    }

    let mut dishes = Vec::new();
    match root.get("dishes") {
        Some(Value::Object(entries)) => {
            for (name, info) in entries {
                match info {
                    Value::Object(info) => dishes.push(DishRecord::from_entry(name, info)),
                    other => warn!("Skipping dish '{}' with non-object entry: {}", name, other),
                }
            }
        }
        Some(other) => warn!("Ignoring non-object 'dishes' field: {}", other),
        None => debug!("Response carries no 'dishes' field"),
    }

    // Stable: equal indices keep document order.
    dishes.sort_by_key(|dish| dish.dish_index);

    Ok(TranslatedMenu {
        dishes,
        menu_language: optional_text(&root, "menu_lang_title"),
        source_language: optional_text(&root, "source_language"),
    })
}

fn optional_text(root: &Map<String, Value>, key: &str) -> Option<String> {
    root.get(key).and_then(Value::as_str).map(str::to_string)
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default()
}
