//! Field definitions.

/// Declared type of a field.
///
/// Only `Password` changes engine behavior: values of password fields are
/// scored once their rule set passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Password,
    Custom(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl Field {
    pub fn new(id: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            kind,
            required: false,
        }
    }

    pub fn text(id: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Text)
    }

    pub fn number(id: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Number)
    }

    pub fn date(id: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Date)
    }

    pub fn password(id: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Password)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn is_password(&self) -> bool {
        self.kind == FieldKind::Password
    }
}
