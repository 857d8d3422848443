// Path: crates/types/src/action.rs

//! The action descriptor wire model.
//!
//! An action descriptor is a JSON document fetched from a remote, untrusted
//! endpoint. Nothing in this module trusts the wire: the only way to obtain
//! an [`ActionDescriptor`] from raw JSON is [`ActionDescriptor::validate`],
//! which either yields a fully-typed value or a [`ValidationError`] naming
//! the first offending field. There is no partially-filled state.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user-facing call-to-action fetched from a remote endpoint.
///
/// Constructed once per successful fetch via [`ActionDescriptor::validate`],
/// immutable thereafter, and discarded on the next fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    /// Image URL representing the source of the action request.
    pub icon: String,
    /// Describes the source of the action request.
    pub title: String,
    /// Brief summary of the action to be performed.
    pub description: String,
    /// Button text rendered to the user for the implicit action.
    pub label: String,
    /// UI state for the button being rendered. When true, the implicit
    /// action must not be invoked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Related sub-actions a user could perform instead of the implicit one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ActionLinks>,
    /// Non-fatal advisory to be displayed to the user even when the fetch
    /// otherwise succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Advisory>,
}

/// Container for the descriptor's linked actions, matching the wire nesting
/// `links.actions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLinks {
    /// The ordered list of linked actions, preserved in declaration order.
    pub actions: Vec<LinkedAction>,
}

/// One named, independently invocable sub-action declared inside a
/// descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedAction {
    /// Endpoint template for the action. May be relative to the descriptor
    /// URL and may contain `{name}` placeholders for declared parameters.
    pub href: String,
    /// Button text rendered to the user.
    pub label: String,
    /// Parameters accepting user input before the action can be invoked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ActionParameter>>,
}

impl LinkedAction {
    /// Returns the declared parameters, or an empty slice when none exist.
    pub fn parameters(&self) -> &[ActionParameter] {
        self.parameters.as_deref().unwrap_or_default()
    }
}

/// A parameter accepting user input within an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionParameter {
    /// Placeholder name in the endpoint template, unique within its action.
    pub name: String,
    /// Placeholder text for the user input field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Whether the field must be filled before invocation. Wire default is
    /// false.
    #[serde(default)]
    pub required: bool,
}

/// The descriptor's own non-fatal `error` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    /// Message to be displayed to the user.
    pub message: String,
}

/// The body POSTed to a resolved action endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRequest {
    /// Opaque identifier of the entity authorizing the eventual transaction,
    /// base58-shaped but neither validated nor interpreted here.
    pub account: String,
}

/// The payload returned by a resolved action endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Opaque base64-encoded serialized transaction. Not decoded, signed,
    /// or broadcast by this client.
    pub transaction: String,
    /// Describes the nature of the transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The four top-level descriptor fields that must be present and
/// string-typed, in the order their absence is reported.
const REQUIRED_STRING_FIELDS: [&str; 4] = ["icon", "title", "description", "label"];

impl ActionDescriptor {
    /// Validates raw JSON into a typed descriptor.
    ///
    /// Checks are ordered so that the first offence is reported
    /// deterministically: top-level required strings first, then `disabled`,
    /// `links.actions` entries in declaration order, and finally the
    /// advisory `error` object. No normalization is applied beyond type
    /// checking; the descriptor content is otherwise carried verbatim.
    pub fn validate(raw: &Value) -> Result<ActionDescriptor, ValidationError> {
        let obj = raw.as_object().ok_or(ValidationError::WrongType {
            path: "<root>".to_string(),
            expected: "object",
        })?;

        for field in REQUIRED_STRING_FIELDS {
            let value = obj
                .get(field)
                .ok_or_else(|| ValidationError::MissingField(field.to_string()))?;
            let text = value.as_str().ok_or_else(|| ValidationError::WrongType {
                path: field.to_string(),
                expected: "string",
            })?;
            // The title and label drive rendering and invocation; an empty
            // string there is as unusable as a missing field.
            if text.is_empty() && (field == "title" || field == "label") {
                return Err(ValidationError::EmptyField(field.to_string()));
            }
        }

        if let Some(disabled) = obj.get("disabled") {
            if !disabled.is_boolean() {
                return Err(ValidationError::WrongType {
                    path: "disabled".to_string(),
                    expected: "boolean",
                });
            }
        }

        if let Some(links) = obj.get("links") {
            validate_links(links)?;
        }

        if let Some(error) = obj.get("error") {
            let error_obj = error.as_object().ok_or(ValidationError::WrongType {
                path: "error".to_string(),
                expected: "object",
            })?;
            let message = error_obj
                .get("message")
                .ok_or_else(|| ValidationError::MissingField("error.message".to_string()))?;
            if !message.is_string() {
                return Err(ValidationError::WrongType {
                    path: "error.message".to_string(),
                    expected: "string",
                });
            }
        }

        // The field checks above cover everything the typed model requires,
        // so this only fails on shapes the checks missed.
        serde_json::from_value(raw.clone()).map_err(|e| ValidationError::Malformed(e.to_string()))
    }

    /// Whether the implicit action is disabled for invocation.
    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }

    /// Returns the declared linked actions, or an empty slice when the
    /// descriptor only carries its implicit action.
    pub fn linked_actions(&self) -> &[LinkedAction] {
        self.links
            .as_ref()
            .map(|l| l.actions.as_slice())
            .unwrap_or_default()
    }
}

fn validate_links(links: &Value) -> Result<(), ValidationError> {
    let links_obj = links.as_object().ok_or(ValidationError::WrongType {
        path: "links".to_string(),
        expected: "object",
    })?;
    let actions = links_obj
        .get("actions")
        .ok_or_else(|| ValidationError::MissingField("links.actions".to_string()))?;
    let actions = actions.as_array().ok_or(ValidationError::WrongType {
        path: "links.actions".to_string(),
        expected: "array",
    })?;

    for (i, entry) in actions.iter().enumerate() {
        let entry_obj = entry.as_object().ok_or_else(|| ValidationError::WrongType {
            path: format!("links.actions[{}]", i),
            expected: "object",
        })?;
        for field in ["href", "label"] {
            let path = format!("links.actions[{}].{}", i, field);
            let value = entry_obj
                .get(field)
                .ok_or_else(|| ValidationError::MissingField(path.clone()))?;
            if !value.is_string() {
                return Err(ValidationError::WrongType {
                    path,
                    expected: "string",
                });
            }
        }
        if let Some(parameters) = entry_obj.get("parameters") {
            validate_parameters(parameters, i)?;
        }
    }
    Ok(())
}

fn validate_parameters(parameters: &Value, action_index: usize) -> Result<(), ValidationError> {
    let base = format!("links.actions[{}].parameters", action_index);
    let parameters = parameters.as_array().ok_or_else(|| ValidationError::WrongType {
        path: base.clone(),
        expected: "array",
    })?;

    for (j, parameter) in parameters.iter().enumerate() {
        let parameter_obj = parameter
            .as_object()
            .ok_or_else(|| ValidationError::WrongType {
                path: format!("{}[{}]", base, j),
                expected: "object",
            })?;
        let name = parameter_obj
            .get("name")
            .ok_or_else(|| ValidationError::MissingField(format!("{}[{}].name", base, j)))?;
        if !name.is_string() {
            return Err(ValidationError::WrongType {
                path: format!("{}[{}].name", base, j),
                expected: "string",
            });
        }
        if let Some(label) = parameter_obj.get("label") {
            if !label.is_string() {
                return Err(ValidationError::WrongType {
                    path: format!("{}[{}].label", base, j),
                    expected: "string",
                });
            }
        }
        if let Some(required) = parameter_obj.get("required") {
            if !required.is_boolean() {
                return Err(ValidationError::WrongType {
                    path: format!("{}[{}].required", base, j),
                    expected: "boolean",
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_minimal_descriptor() {
        let raw = json!({
            "icon": "https://h/icon.png",
            "title": "Donate",
            "description": "Send a donation",
            "label": "Donate 1"
        });
        let descriptor = ActionDescriptor::validate(&raw).unwrap();
        assert_eq!(descriptor.label, "Donate 1");
        assert!(!descriptor.is_disabled());
        assert!(descriptor.linked_actions().is_empty());
        assert!(descriptor.error.is_none());
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        // icon is checked before description and label, so it must be the
        // one named even though all three are absent.
        let raw = json!({ "title": "t" });
        let err = ActionDescriptor::validate(&raw).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("icon".to_string()));
    }

    #[test]
    fn test_validate_rejects_wrong_type() {
        let raw = json!({
            "icon": "i",
            "title": 42,
            "description": "d",
            "label": "l"
        });
        let err = ActionDescriptor::validate(&raw).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongType {
                path: "title".to_string(),
                expected: "string"
            }
        );
    }

    #[test]
    fn test_validate_rejects_empty_label() {
        let raw = json!({
            "icon": "i",
            "title": "t",
            "description": "d",
            "label": ""
        });
        let err = ActionDescriptor::validate(&raw).unwrap_err();
        assert_eq!(err, ValidationError::EmptyField("label".to_string()));
    }

    #[test]
    fn test_validate_rejects_non_object_root() {
        let err = ActionDescriptor::validate(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, ValidationError::WrongType { .. }));
    }

    #[test]
    fn test_validate_linked_actions_and_parameters() {
        let raw = json!({
            "icon": "i",
            "title": "t",
            "description": "d",
            "label": "Donate",
            "links": {
                "actions": [
                    { "href": "/pay/1", "label": "1 SOL" },
                    {
                        "href": "/pay/{amount}",
                        "label": "Custom",
                        "parameters": [
                            { "name": "amount", "label": "Amount", "required": true }
                        ]
                    }
                ]
            }
        });
        let descriptor = ActionDescriptor::validate(&raw).unwrap();
        let actions = descriptor.linked_actions();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].href, "/pay/1");
        assert!(actions[0].parameters().is_empty());
        assert_eq!(actions[1].parameters()[0].name, "amount");
        assert!(actions[1].parameters()[0].required);
    }

    #[test]
    fn test_validate_names_offending_link_path() {
        let raw = json!({
            "icon": "i",
            "title": "t",
            "description": "d",
            "label": "l",
            "links": { "actions": [ { "href": "/a", "label": "a" }, { "label": "b" } ] }
        });
        let err = ActionDescriptor::validate(&raw).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField("links.actions[1].href".to_string())
        );
    }

    #[test]
    fn test_validate_rejects_malformed_parameter() {
        let raw = json!({
            "icon": "i",
            "title": "t",
            "description": "d",
            "label": "l",
            "links": {
                "actions": [
                    { "href": "/p/{x}", "label": "x", "parameters": [ { "name": 7 } ] }
                ]
            }
        });
        let err = ActionDescriptor::validate(&raw).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongType {
                path: "links.actions[0].parameters[0].name".to_string(),
                expected: "string"
            }
        );
    }

    #[test]
    fn test_validate_carries_advisory_and_disabled() {
        let raw = json!({
            "icon": "i",
            "title": "t",
            "description": "d",
            "label": "l",
            "disabled": true,
            "error": { "message": "campaign has ended" }
        });
        let descriptor = ActionDescriptor::validate(&raw).unwrap();
        assert!(descriptor.is_disabled());
        assert_eq!(
            descriptor.error.as_ref().unwrap().message,
            "campaign has ended"
        );
    }

    #[test]
    fn test_validate_rejects_advisory_without_message() {
        let raw = json!({
            "icon": "i",
            "title": "t",
            "description": "d",
            "label": "l",
            "error": {}
        });
        let err = ActionDescriptor::validate(&raw).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("error.message".to_string()));
    }

    #[test]
    fn test_execution_result_requires_transaction() {
        let ok: ExecutionResult =
            serde_json::from_value(json!({ "transaction": "b64" })).unwrap();
        assert_eq!(ok.transaction, "b64");
        assert!(ok.message.is_none());

        let missing = serde_json::from_value::<ExecutionResult>(json!({ "message": "hi" }));
        assert!(missing.is_err());
    }
}
