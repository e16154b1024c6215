//! Items stored in an edge dictionary

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{null_as_default, Timestamps};
use crate::api::resource::{DictionaryScope, Resource};
use crate::output::Render;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryItem {
    pub service_id: String,
    pub dictionary_id: String,
    pub item_key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_value: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// Body for both creating and updating an item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemBody {
    pub item_key: String,
    pub item_value: String,
}

impl From<&DictionaryItem> for ItemBody {
    fn from(item: &DictionaryItem) -> Self {
        Self {
            item_key: item.item_key.clone(),
            item_value: item.item_value.clone(),
        }
    }
}

impl Resource for DictionaryItem {
    type Scope = DictionaryScope;

    const NOUN: &'static str = "dictionary item";
    const COLLECTION: &'static [&'static str] = &["item"];
    const LISTING: &'static [&'static str] = &["items"];
    const UPDATE_METHOD: Method = Method::PATCH;

    fn name(&self) -> &str {
        &self.item_key
    }

    fn scope(&self) -> DictionaryScope {
        DictionaryScope {
            service_id: self.service_id.clone(),
            dictionary_id: self.dictionary_id.clone(),
        }
    }
}

impl Render for DictionaryItem {
    const COLUMNS: &'static [&'static str] = &["SERVICE", "DICTIONARY ID", "KEY", "VALUE"];
    const LABEL: &'static str = "Item";

    fn row(&self) -> Vec<String> {
        vec![
            self.service_id.clone(),
            self.dictionary_id.clone(),
            self.item_key.clone(),
            self.item_value.clone(),
        ]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Key", self.item_key.clone()),
            ("Value", self.item_value.clone()),
        ]
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}
