use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

/// Default urgency suggested for requests filed against a template.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// Input type of a form field. Choices only exist on `Select`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Select { options: &'static [&'static str] },
}

impl FieldKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Select { .. } => "select",
        }
    }

    pub fn options(&self) -> Option<&'static [&'static str]> {
        match self {
            FieldKind::Select { options } => Some(options),
            FieldKind::Text | FieldKind::Number => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
        }
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Number,
        }
    }

    pub const fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Select { options },
        }
    }
}

// Flat wire shape: `options` is emitted as null for non-select fields.
impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Field", 4)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("label", self.label)?;
        state.serialize_field("type", self.kind.type_name())?;
        state.serialize_field("options", &self.kind.options())?;
        state.end()
    }
}

/// One kind of operational request and the form used to file it.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub severity_default: Severity,
    pub fields: &'static [Field],
}
