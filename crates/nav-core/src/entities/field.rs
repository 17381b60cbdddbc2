use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const fn default_editable() -> bool {
    true
}

/// A concrete field on an entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldDescriptor {
    pub name: String,
    /// Storage kind as reported by the registry (e.g. `char`, `date`, `file`).
    #[serde(default)]
    pub kind: String,
    /// Non-editable fields are left out of generated forms.
    #[serde(default = "default_editable")]
    pub editable: bool,
    /// Fields the registry created implicitly (primary keys, reverse accessors).
    #[serde(default)]
    pub auto_created: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            editable: true,
            auto_created: false,
        }
    }

    /// Whether a generated edit form should include this field.
    #[must_use]
    pub const fn is_form_field(&self) -> bool {
        self.editable && !self.auto_created
    }
}
