//! Declarative input schema for a generator profile.
//!
//! A profile describes its accepted fields as a static table of `FieldSpec`s
//! plus cross-field `FieldDependency`s. The table is rendered into the
//! JSON-schema and UI-schema documents the host uses to build its form.
//! Host-defined types (`address`, `ethCount`, `unixTime`) are emitted as
//! `$ref`s into the host's `#/definitions`.

use serde_json::{Map, Value, json};

/// Maximum memo length accepted by the host form.
pub const MEMO_MAX_LENGTH: u64 = 256;

/// Semantic type of an input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Address,
    EtherAmount,
    UnixTime,
    Text { min_length: u64, max_length: u64 },
    Boolean { default: bool },
    Enum {
        values: Vec<&'static str>,
        default: Option<&'static str>,
    },
}

impl FieldKind {
    /// Host definition name for types the host declares itself.
    fn definition_ref(&self) -> Option<&'static str> {
        match self {
            FieldKind::Address => Some("#/definitions/address"),
            FieldKind::EtherAmount => Some("#/definitions/ethCount"),
            FieldKind::UnixTime => Some("#/definitions/unixTime"),
            _ => None,
        }
    }
}

/// One row of the input field table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// UI widget hint (`ui:widget`), if the host should not pick its default.
    pub ui_widget: Option<&'static str>,
}

impl FieldSpec {
    pub fn new(
        name: &'static str,
        title: &'static str,
        description: &'static str,
        kind: FieldKind,
    ) -> Self {
        Self {
            name,
            title,
            description,
            kind,
            required: false,
            ui_widget: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn widget(mut self, widget: &'static str) -> Self {
        self.ui_widget = Some(widget);
        self
    }

    fn to_json(&self) -> Value {
        let mut prop = Map::new();
        prop.insert("title".into(), json!(self.title));
        prop.insert("description".into(), json!(self.description));

        if let Some(reference) = self.kind.definition_ref() {
            prop.insert("$ref".into(), json!(reference));
        }

        match &self.kind {
            FieldKind::Text {
                min_length,
                max_length,
            } => {
                prop.insert("type".into(), json!("string"));
                prop.insert("minLength".into(), json!(min_length));
                prop.insert("maxLength".into(), json!(max_length));
            }
            FieldKind::Boolean { default } => {
                prop.insert("type".into(), json!("boolean"));
                prop.insert("default".into(), json!(default));
            }
            FieldKind::Enum { values, default } => {
                prop.insert("type".into(), json!("string"));
                prop.insert("enum".into(), json!(values));
                if let Some(default) = default {
                    prop.insert("default".into(), json!(default));
                }
            }
            FieldKind::Address | FieldKind::EtherAmount | FieldKind::UnixTime => {}
        }

        Value::Object(prop)
    }
}

/// Cross-field dependency between inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldDependency {
    /// Supplying `field` makes every name in `requires` mandatory.
    Requires {
        field: &'static str,
        requires: Vec<&'static str>,
    },
    /// `field` taking the value `equals` makes every name in `requires` mandatory.
    RequiresWhen {
        field: &'static str,
        equals: &'static str,
        requires: Vec<&'static str>,
    },
}

/// Complete input description for a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSchema {
    pub fields: Vec<FieldSpec>,
    pub dependencies: Vec<FieldDependency>,
}

impl InputSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of required fields, in table order.
    pub fn required_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect()
    }

    /// Render the JSON-schema document.
    pub fn json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| (f.name.to_string(), f.to_json()))
            .collect();

        let mut schema = Map::new();
        schema.insert("type".into(), json!("object"));
        schema.insert("required".into(), json!(self.required_fields()));
        schema.insert("additionalProperties".into(), json!(false));
        schema.insert("properties".into(), Value::Object(properties));

        if !self.dependencies.is_empty() {
            let dependencies: Map<String, Value> = self
                .dependencies
                .iter()
                .map(|dep| self.dependency_json(dep))
                .collect();
            schema.insert("dependencies".into(), Value::Object(dependencies));
        }

        Value::Object(schema)
    }

    /// Render the UI-schema document (widget hints only).
    pub fn ui_schema(&self) -> Value {
        let ui: Map<String, Value> = self
            .fields
            .iter()
            .filter_map(|f| {
                f.ui_widget
                    .map(|w| (f.name.to_string(), json!({ "ui:widget": w })))
            })
            .collect();
        Value::Object(ui)
    }

    fn dependency_json(&self, dep: &FieldDependency) -> (String, Value) {
        match dep {
            FieldDependency::Requires { field, requires } => {
                (field.to_string(), json!(requires))
            }
            FieldDependency::RequiresWhen {
                field,
                equals,
                requires,
            } => {
                // Every other enum value satisfies the dependency unconditionally.
                let others: Vec<&str> = match self.field(field).map(|f| &f.kind) {
                    Some(FieldKind::Enum { values, .. }) => {
                        values.iter().copied().filter(|v| v != equals).collect()
                    }
                    _ => Vec::new(),
                };
                let one_of = json!([
                    { "properties": { (*field): { "enum": others } } },
                    {
                        "properties": { (*field): { "enum": [equals] } },
                        "required": requires,
                    },
                ]);
                (field.to_string(), json!({ "oneOf": one_of }))
            }
        }
    }
}
