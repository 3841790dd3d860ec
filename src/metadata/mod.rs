//! Display metadata for members of a generated contract.
//!
//! A profile's metadata is a static table keyed by contract member name. It
//! never depends on the values used to generate the contract; the compiled
//! interface the host passes in is accepted only to match the host's calling
//! convention.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Display hints for a single function input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputDisplay {
    pub title: &'static str,
    pub description: &'static str,
    #[serde(rename = "ui:widget", skip_serializing_if = "Option::is_none")]
    pub ui_widget: Option<&'static str>,
}

impl InputDisplay {
    pub fn new(title: &'static str, description: &'static str) -> Self {
        Self {
            title,
            description,
            ui_widget: None,
        }
    }

    pub fn widget(mut self, widget: &'static str) -> Self {
        self.ui_widget = Some(widget);
        self
    }
}

/// Title and description of the ether attached to a payable call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayableDetails {
    pub title: &'static str,
    pub description: &'static str,
}

/// Widget-specific options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WidgetOptions {
    /// Date format for `unixTime` widgets.
    Format { format: &'static str },
    /// Labels for the numeric values of an `enum` widget.
    Enum { r#enum: Vec<&'static str> },
}

/// Display entry for one contract member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberDisplay {
    pub title: &'static str,
    pub description: &'static str,
    #[serde(rename = "ui:widget", skip_serializing_if = "Option::is_none")]
    pub ui_widget: Option<&'static str>,
    #[serde(rename = "ui:widget_options", skip_serializing_if = "Option::is_none")]
    pub ui_widget_options: Option<WidgetOptions>,
    pub sorting_order: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payable_details: Option<PayableDetails>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<InputDisplay>,
}

impl MemberDisplay {
    pub fn new(title: &'static str, description: &'static str, sorting_order: u32) -> Self {
        Self {
            title,
            description,
            ui_widget: None,
            ui_widget_options: None,
            sorting_order,
            payable_details: None,
            inputs: Vec::new(),
        }
    }

    pub fn widget(mut self, widget: &'static str) -> Self {
        self.ui_widget = Some(widget);
        self
    }

    pub fn widget_options(mut self, options: WidgetOptions) -> Self {
        self.ui_widget_options = Some(options);
        self
    }

    pub fn payable(mut self, title: &'static str, description: &'static str) -> Self {
        self.payable_details = Some(PayableDetails { title, description });
        self
    }

    pub fn input(mut self, input: InputDisplay) -> Self {
        self.inputs.push(input);
        self
    }
}

/// Ordered member display table plus the dashboard subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMetadata {
    members: Vec<(&'static str, MemberDisplay)>,
    dashboard: Vec<&'static str>,
}

/// Upper bound on dashboard members shown by default.
pub const MAX_DASHBOARD_MEMBERS: usize = 4;

impl DisplayMetadata {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            dashboard: Vec::new(),
        }
    }

    pub fn member(mut self, name: &'static str, display: MemberDisplay) -> Self {
        self.members.push((name, display));
        self
    }

    /// Set the dashboard member list, in display order.
    ///
    /// At most [`MAX_DASHBOARD_MEMBERS`] names are kept.
    pub fn dashboard(mut self, names: &[&'static str]) -> Self {
        debug_assert!(
            names.len() <= MAX_DASHBOARD_MEMBERS,
            "dashboard lists {} members",
            names.len()
        );
        self.dashboard = names.iter().take(MAX_DASHBOARD_MEMBERS).copied().collect();
        self
    }

    pub fn get(&self, name: &str) -> Option<&MemberDisplay> {
        self.members
            .iter()
            .find(|(member, _)| *member == name)
            .map(|(_, display)| display)
    }

    pub fn members(&self) -> impl Iterator<Item = (&'static str, &MemberDisplay)> {
        self.members.iter().map(|(name, display)| (*name, display))
    }

    pub fn dashboard_members(&self) -> &[&'static str] {
        &self.dashboard
    }

    /// Render as the host's `function_specs` object, preserving table order.
    pub fn function_specs(&self) -> Value {
        let specs: serde_json::Map<String, Value> = self
            .members
            .iter()
            .map(|(name, display)| {
                (
                    name.to_string(),
                    serde_json::to_value(display).unwrap_or(Value::Null),
                )
            })
            .collect();
        Value::Object(specs)
    }
}

impl Default for DisplayMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// ABI of the compiled contract as handed over by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompiledInterface(pub Vec<Value>);

impl CompiledInterface {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> DisplayMetadata {
        DisplayMetadata::new()
            .member(
                "Amount",
                MemberDisplay::new("Amount", "How much.", 5).widget("ethCount"),
            )
            .member(
                "pay",
                MemberDisplay::new("Pay", "Pay it.", 10)
                    .payable("Ether amount", "Sent with the call."),
            )
            .member(
                "withdraw",
                MemberDisplay::new("Withdraw", "Take it.", 15)
                    .input(InputDisplay::new("Receiver", "Who"))
                    .input(InputDisplay::new("Amount", "How much").widget("ethCount")),
            )
            .dashboard(&["Amount"])
    }

    #[test]
    fn test_lookup_and_order() {
        let meta = sample();
        assert_eq!(meta.get("pay").map(|m| m.sorting_order), Some(10));
        assert!(meta.get("missing").is_none());
        let names: Vec<&str> = meta.members().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Amount", "pay", "withdraw"]);
        assert_eq!(meta.dashboard_members(), &["Amount"]);
    }

    #[test]
    fn test_function_specs_shape() {
        let specs = sample().function_specs();
        assert_eq!(
            specs["Amount"],
            json!({
                "title": "Amount",
                "description": "How much.",
                "ui:widget": "ethCount",
                "sorting_order": 5
            })
        );
        assert_eq!(specs["pay"]["payable_details"]["title"], "Ether amount");
        assert_eq!(specs["withdraw"]["inputs"][1]["ui:widget"], "ethCount");
        assert!(specs["withdraw"]["inputs"][0].get("ui:widget").is_none());
    }

    #[test]
    fn test_widget_options_serialization() {
        let display = MemberDisplay::new("Status", "Current status", 40)
            .widget("enum")
            .widget_options(WidgetOptions::Enum {
                r#enum: vec!["Active", "Overdue", "Paid"],
            });
        let value = serde_json::to_value(&display).unwrap();
        assert_eq!(
            value["ui:widget_options"],
            json!({ "enum": ["Active", "Overdue", "Paid"] })
        );
    }

    #[test]
    fn test_compiled_interface_from_json() {
        let abi = CompiledInterface::from_json(
            r#"[{"type":"function","name":"pay"},{"type":"fallback"}]"#,
        )
        .unwrap();
        assert_eq!(abi.0.len(), 2);
        assert_eq!(abi.0[0]["name"], "pay");
        assert!(CompiledInterface::from_json(r#"{"name":"pay"}"#).is_err());
    }
}
