//! Component tags and primitive type hints for schema nodes.
//!
//! Both enums parse leniently: an unrecognized tag maps to an explicit
//! fallback variant instead of failing, so arbitrary schemas stay usable.

use std::fmt;

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// The UI component a schema node declares through `x-component`.
///
/// Renderer and synthesizer dispatch on this enum. Adding a component means
/// adding a variant and its tag here; `Unknown` and `Missing` keep every other
/// node on the graceful fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Titled grouping container.
    Card,
    /// Tabbed container whose current pane is itself a value.
    Tabs,
    Input,
    Password,
    Textarea,
    NumberPicker,
    Select,
    Switch,
    DateTimePicker,
    /// A tag was declared but is not one of the above.
    Unknown,
    /// No tag, or an empty one.
    Missing,
}

impl Component {
    /// Map a raw tag to a component. Accepts the common Formily aliases.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "" => Self::Missing,
            "Card" => Self::Card,
            "Tabs" | "FormTab" => Self::Tabs,
            "Input" => Self::Input,
            "Password" | "Input.Password" => Self::Password,
            "Textarea" | "Input.TextArea" => Self::Textarea,
            "NumberPicker" => Self::NumberPicker,
            "Select" => Self::Select,
            "Switch" => Self::Switch,
            "DateTimePicker" | "DatePicker" => Self::DateTimePicker,
            _ => Self::Unknown,
        }
    }

    /// Canonical tag, or an empty string for the fallback variants.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "Card",
            Self::Tabs => "Tabs",
            Self::Input => "Input",
            Self::Password => "Password",
            Self::Textarea => "Textarea",
            Self::NumberPicker => "NumberPicker",
            Self::Select => "Select",
            Self::Switch => "Switch",
            Self::DateTimePicker => "DateTimePicker",
            Self::Unknown | Self::Missing => "",
        }
    }

    /// Whether the component is a toggle (boolean-valued).
    #[must_use]
    pub const fn is_toggle(self) -> bool {
        matches!(self, Self::Switch)
    }

    /// Whether the component is a numeric stepper.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::NumberPicker)
    }

    /// Whether the component picks a date/time.
    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::DateTimePicker)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("<unknown>"),
            Self::Missing => f.write_str("<none>"),
            known => f.write_str(known.as_str()),
        }
    }
}

// ---------------------------------------------------------------------------
// TypeHint
// ---------------------------------------------------------------------------

/// Primitive type declared by a node's `type` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeHint {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
}

impl TypeHint {
    /// Parse a `type` value. Unrecognized names yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "integer" => Some(Self::Integer),
            "boolean" => Some(Self::Boolean),
            "object" | "void" => Some(Self::Object),
            "array" => Some(Self::Array),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }

    /// `number` or `integer`.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Integer)
    }
}

impl fmt::Display for TypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Card", Component::Card)]
    #[case("Tabs", Component::Tabs)]
    #[case("FormTab", Component::Tabs)]
    #[case("Input.Password", Component::Password)]
    #[case("Input.TextArea", Component::Textarea)]
    #[case("DatePicker", Component::DateTimePicker)]
    #[case("  Select ", Component::Select)]
    #[case("", Component::Missing)]
    #[case("   ", Component::Missing)]
    #[case("ColorPicker", Component::Unknown)]
    fn component_from_tag(#[case] tag: &str, #[case] expected: Component) {
        assert_eq!(Component::from_tag(tag), expected);
    }

    #[test]
    fn known_components_round_trip_through_as_str() {
        for component in [
            Component::Card,
            Component::Tabs,
            Component::Input,
            Component::Password,
            Component::Textarea,
            Component::NumberPicker,
            Component::Select,
            Component::Switch,
            Component::DateTimePicker,
        ] {
            assert_eq!(Component::from_tag(component.as_str()), component);
        }
    }

    #[test]
    fn fallback_components_display_placeholders() {
        assert_eq!(Component::Unknown.to_string(), "<unknown>");
        assert_eq!(Component::Missing.to_string(), "<none>");
    }

    #[rstest]
    #[case("number", Some(TypeHint::Number))]
    #[case("integer", Some(TypeHint::Integer))]
    #[case("boolean", Some(TypeHint::Boolean))]
    #[case("void", Some(TypeHint::Object))]
    #[case("decimal", None)]
    fn type_hint_parse(#[case] raw: &str, #[case] expected: Option<TypeHint>) {
        assert_eq!(TypeHint::parse(raw), expected);
    }

    #[test]
    fn numeric_type_hints() {
        assert!(TypeHint::Number.is_numeric());
        assert!(TypeHint::Integer.is_numeric());
        assert!(!TypeHint::String.is_numeric());
    }
}
