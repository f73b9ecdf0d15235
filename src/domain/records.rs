//! Typed views of the rows the backend stores. Every column is optional and
//! may come back as text or a number, so fields use `FieldValue`.

use crate::domain::model::{FieldValue, Fields};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Option<FieldValue>,
    pub name: Option<FieldValue>,
    pub contact: Option<FieldValue>,
    pub email: Option<FieldValue>,
    pub phone: Option<FieldValue>,
    pub address: Option<FieldValue>,
    pub created_at: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Option<FieldValue>,
    pub client_id: Option<FieldValue>,
    pub name: Option<FieldValue>,
    pub address: Option<FieldValue>,
    pub description: Option<FieldValue>,
    pub created_at: Option<FieldValue>,
}

/// One line of an invoice, carrying the invoice header it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRow {
    pub timestamp: Option<FieldValue>,
    pub invoice_number: Option<FieldValue>,
    pub invoice_date: Option<FieldValue>,
    pub due_date: Option<FieldValue>,
    pub client_name: Option<FieldValue>,
    pub description: Option<FieldValue>,
    pub quantity: Option<FieldValue>,
    pub unit: Option<FieldValue>,
    pub hrs: Option<FieldValue>,
    pub rate: Option<FieldValue>,
    pub amount: Option<FieldValue>,
    pub subtotal: Option<FieldValue>,
    pub tax_amount: Option<FieldValue>,
    pub total: Option<FieldValue>,
    pub notes: Option<FieldValue>,
    pub attachment_links: Option<FieldValue>,
    pub project_name: Option<FieldValue>,
}

/// Row columns as request fields, keyed by their serde (camelCase) names.
/// Unset columns serialize as null and are dropped.
fn record_fields<T: Serialize>(record: &T) -> Fields {
    match serde_json::to_value(record) {
        Ok(serde_json::Value::Object(columns)) => Fields::from_json_object(&columns),
        // Records are plain structs of optional scalars and always serialize
        // to an object.
        _ => Fields::new(),
    }
}

impl From<&Client> for Fields {
    fn from(client: &Client) -> Self {
        record_fields(client)
    }
}

impl From<&Project> for Fields {
    fn from(project: &Project) -> Self {
        record_fields(project)
    }
}

impl From<&InvoiceRow> for Fields {
    fn from(row: &InvoiceRow) -> Self {
        record_fields(row)
    }
}
