// Path: crates/client/src/template.rs

//! Binds user input into an action's endpoint template.
//!
//! Binding is two explicit steps so each can be tested on its own: a string
//! substitution over the `{name}` placeholder, then standard relative-URL
//! resolution against a base. Both steps are pure; calling them twice with
//! the same inputs yields the same output.

use crate::resolve::InvocableAction;
use blink_types::action::ActionParameter;
use blink_types::error::TemplateError;
use reqwest::Url;
use std::collections::HashMap;

/// Substitutes the first declared parameter's value into the template.
///
/// Only the first declared parameter is consumed, and only the first
/// occurrence of its `{name}` placeholder is replaced. A value missing from
/// `values` substitutes the empty string rather than failing; the
/// descriptor is untrusted and user input may be partial. The one hard
/// failure is a declared parameter whose placeholder does not occur in the
/// template at all, which is a descriptor inconsistency.
///
/// With no declared parameters the template is returned verbatim.
pub fn substitute_first_param(
    template: &str,
    parameters: &[ActionParameter],
    values: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let Some(parameter) = parameters.first() else {
        return Ok(template.to_string());
    };

    let placeholder = format!("{{{}}}", parameter.name);
    if !template.contains(&placeholder) {
        return Err(TemplateError::PlaceholderMissing {
            name: parameter.name.clone(),
            template: template.to_string(),
        });
    }

    let value = values.get(&parameter.name).map(String::as_str).unwrap_or("");
    if value.is_empty() && parameter.required {
        tracing::warn!(
            target: "blink_client",
            "required parameter `{}` has no value; substituting the empty string",
            parameter.name
        );
    }
    Ok(template.replacen(&placeholder, value, 1))
}

/// Resolves a bound endpoint string into an absolute URL.
///
/// Uses the same rules as resolving an HTML hyperlink against its
/// document's base: a candidate with a scheme is used as-is, anything else
/// is joined onto `base` per RFC 3986.
pub fn resolve_endpoint(candidate: &str, base: &Url) -> Result<Url, TemplateError> {
    base.join(candidate).map_err(|e| TemplateError::InvalidEndpoint {
        endpoint: candidate.to_string(),
        base: base.as_str().to_string(),
        reason: e.to_string(),
    })
}

/// Binds user-supplied values into an action and resolves the concrete
/// callable endpoint against `base` (normally the descriptor URL).
pub fn bind(
    action: &InvocableAction,
    values: &HashMap<String, String>,
    base: &Url,
) -> Result<Url, TemplateError> {
    let bound = substitute_first_param(&action.href, &action.parameters, values)?;
    resolve_endpoint(&bound, base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parameter(name: &str, required: bool) -> ActionParameter {
        ActionParameter {
            name: name.to_string(),
            label: None,
            required,
        }
    }

    fn action(href: &str, parameters: Vec<ActionParameter>) -> InvocableAction {
        InvocableAction {
            href: href.to_string(),
            label: "test".to_string(),
            parameters,
            disabled: false,
        }
    }

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_substitute_replaces_first_parameter() {
        let out = substitute_first_param(
            "/pay/{amount}",
            &[parameter("amount", false)],
            &values(&[("amount", "5")]),
        )
        .unwrap();
        assert_eq!(out, "/pay/5");
    }

    #[test]
    fn test_substitute_without_parameters_is_verbatim() {
        let out = substitute_first_param("/pay/{amount}", &[], &values(&[])).unwrap();
        assert_eq!(out, "/pay/{amount}");
    }

    #[test]
    fn test_substitute_missing_value_becomes_empty_string() {
        let out = substitute_first_param(
            "/pay/{amount}",
            &[parameter("amount", true)],
            &values(&[]),
        )
        .unwrap();
        assert_eq!(out, "/pay/");
    }

    #[test]
    fn test_substitute_replaces_only_first_occurrence() {
        let out = substitute_first_param(
            "/p/{x}/q/{x}",
            &[parameter("x", false)],
            &values(&[("x", "1")]),
        )
        .unwrap();
        assert_eq!(out, "/p/1/q/{x}");
    }

    #[test]
    fn test_substitute_consumes_only_first_declared_parameter() {
        let out = substitute_first_param(
            "/p/{a}/{b}",
            &[parameter("a", false), parameter("b", false)],
            &values(&[("a", "1"), ("b", "2")]),
        )
        .unwrap();
        assert_eq!(out, "/p/1/{b}");
    }

    #[test]
    fn test_substitute_rejects_absent_placeholder() {
        let err = substitute_first_param(
            "/pay/fixed",
            &[parameter("amount", false)],
            &values(&[("amount", "5")]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            TemplateError::PlaceholderMissing {
                name: "amount".to_string(),
                template: "/pay/fixed".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_relative_endpoint_against_base() {
        let resolved = resolve_endpoint("./pay/5", &url("https://h/api/x")).unwrap();
        assert_eq!(resolved.as_str(), "https://h/api/pay/5");
    }

    #[test]
    fn test_resolve_absolute_endpoint_is_used_as_is() {
        let resolved = resolve_endpoint("https://other.h/pay", &url("https://h/api/")).unwrap();
        assert_eq!(resolved.as_str(), "https://other.h/pay");
    }

    #[test]
    fn test_bind_joins_substitution_and_resolution() {
        let action = action("./pay/{amount}", vec![parameter("amount", false)]);
        let bound = bind(
            &action,
            &values(&[("amount", "5")]),
            &url("https://h/api/x"),
        )
        .unwrap();
        assert_eq!(bound.as_str(), "https://h/api/pay/5");
    }

    #[test]
    fn test_bind_is_idempotent_for_fixed_inputs() {
        let action = action("/pay/{amount}", vec![parameter("amount", false)]);
        let vals = values(&[("amount", "7")]);
        let base = url("https://h/donate");
        let first = bind(&action, &vals, &base).unwrap();
        let second = bind(&action, &vals, &base).unwrap();
        assert_eq!(first, second);
    }
}
