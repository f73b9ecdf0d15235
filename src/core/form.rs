use crate::domain::action::Action;
use crate::domain::model::Fields;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

/// Builds the form body: `action` first, then every field in insertion order.
pub fn encode_form_body(action: Action, fields: &Fields) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    serializer.append_pair("action", action.as_str());
    for (key, value) in fields.iter() {
        serializer.append_pair(key, &value.to_string());
    }
    serializer.finish()
}
