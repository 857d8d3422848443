// Path: crates/client/src/resolve.rs

//! Resolves a validated descriptor into its invocable actions.
//!
//! A descriptor describes either a simple one-shot action or a menu of
//! parameterized sub-actions. Resolution collapses both shapes into one
//! ordered list so callers never special-case them: explicit linked actions
//! when `links.actions` is non-empty, otherwise a single synthetic action
//! built from the descriptor's own label and the endpoint it was fetched
//! from.

use blink_types::action::{ActionDescriptor, ActionParameter};
use reqwest::Url;

/// One action ready to be bound and executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocableAction {
    /// Endpoint template, possibly relative and possibly parameterized.
    pub href: String,
    /// Button text rendered to the user.
    pub label: String,
    /// Declared parameters, in declaration order. Empty for the implicit
    /// action.
    pub parameters: Vec<ActionParameter>,
    /// Carried from the descriptor's `disabled` flag; a disabled action
    /// must not be invoked by the caller.
    pub disabled: bool,
}

/// Resolves the ordered set of invocable actions for a descriptor.
///
/// `fallback` is the endpoint the descriptor was originally fetched from;
/// it becomes the target of the synthetic implicit action when the
/// descriptor declares no links.
pub fn resolve_actions(descriptor: &ActionDescriptor, fallback: &Url) -> Vec<InvocableAction> {
    let disabled = descriptor.is_disabled();
    let linked = descriptor.linked_actions();
    if !linked.is_empty() {
        return linked
            .iter()
            .map(|action| InvocableAction {
                href: action.href.clone(),
                label: action.label.clone(),
                parameters: action.parameters().to_vec(),
                disabled,
            })
            .collect();
    }

    vec![InvocableAction {
        href: fallback.as_str().to_string(),
        label: descriptor.label.clone(),
        parameters: Vec::new(),
        disabled,
    }]
}
