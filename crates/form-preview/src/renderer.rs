//! Recursive HTML rendering of a schema tree paired with its values.

use form_core::record::embedded_values;
use form_core::schema::{scalar_text, schema_root};
use form_core::{Component, FieldNode};
use serde_json::{Map, Value};

use crate::escape::escape_html;
use crate::style::style_attr;

const PREVIEW_STYLE: &str = concat!(
    "<style>",
    ".formily-preview{font-family:Arial,Helvetica,sans-serif;position:relative;min-height:600px;}",
    ".fp-item{margin:12px 0;box-sizing:border-box;}",
    ".fp-label{display:inline-block;margin:0 8px 0 0;color:#333;font-weight:600;}",
    ".fp-card{border:1px solid #e5e7eb;border-radius:8px;padding:12px;background:#fff;}",
    ".fp-card-h{margin:0 0 12px;font-size:16px;}",
    ".fp-item input,.fp-item textarea,.fp-item select{box-sizing:border-box;width:100%;",
    "padding:6px 8px;border:1px solid #d1d5db;border-radius:6px;}",
    "</style>",
);

/// Markup a field renders as, chosen from its component tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Widget {
    Card,
    Input(&'static str),
    Textarea,
    Number,
    Select,
    /// Untagged or unsupported container: children only.
    Group,
    /// Preformatted JSON of the node.
    Raw,
}

impl Widget {
    fn for_node(node: &FieldNode<'_>) -> Self {
        match node.component() {
            Component::Card => Self::Card,
            Component::Input => Self::Input("text"),
            Component::Password => Self::Input("password"),
            Component::Textarea => Self::Textarea,
            Component::NumberPicker => Self::Number,
            Component::Select => Self::Select,
            _ if node.is_container() => Self::Group,
            _ => Self::Raw,
        }
    }
}

/// Renders one schema tree against one values mapping.
#[derive(Debug, Clone, Copy)]
pub struct PreviewRenderer<'v> {
    values: Option<&'v Map<String, Value>>,
}

impl<'v> PreviewRenderer<'v> {
    #[must_use]
    pub const fn new(values: Option<&'v Map<String, Value>>) -> Self {
        Self { values }
    }

    /// Body markup for the tree at `root`, without the preview wrapper.
    #[must_use]
    pub fn render_tree(&self, root: &Value) -> String {
        if root.is_null() {
            return String::new();
        }
        self.render_body(FieldNode::root(root))
    }

    /// Children of a container in declaration order, or the node as `<pre>`.
    fn render_body(&self, node: FieldNode<'_>) -> String {
        if node.is_container() {
            node.children().map(|child| self.render_field(child)).collect()
        } else {
            raw_block(node.raw())
        }
    }

    fn render_field(&self, node: FieldNode<'_>) -> String {
        if node.raw().is_null() {
            return String::new();
        }

        let key = escape_html(node.key());
        let title = node.title();
        let style = style_attr(node.style());
        let value = escape_html(&self.value_text(node.key()));
        let placeholder = escape_html(&node.prop_text("placeholder").unwrap_or_default());

        match Widget::for_node(&node) {
            Widget::Card => {
                let header = node.prop_text("header").unwrap_or(title);
                format!(
                    "<div class='fp-item fp-card'{style}><div class='fp-card-h'>{}</div>{}</div>",
                    escape_html(&header),
                    self.render_body(node)
                )
            }
            Widget::Input(kind) => wrap(
                &title,
                &format!(
                    "<input type='{kind}' name='{key}' value='{value}' placeholder='{placeholder}' />"
                ),
                &style,
            ),
            Widget::Textarea => wrap(
                &title,
                &format!("<textarea name='{key}' placeholder='{placeholder}'>{value}</textarea>"),
                &style,
            ),
            Widget::Number => wrap(
                &title,
                &format!("<input type='number' name='{key}' value='{value}' />"),
                &style,
            ),
            Widget::Select => wrap(
                &title,
                &format!(
                    "<select name='{key}'>{}</select>",
                    self.select_options(&node)
                ),
                &style,
            ),
            Widget::Group => self.render_body(node),
            Widget::Raw => wrap(&title, &raw_block(node.raw()), &style),
        }
    }

    fn select_options(&self, node: &FieldNode<'_>) -> String {
        let current = self.value_text(node.key());
        node.enum_options()
            .iter()
            .map(|option| {
                let label = option_part(option, "label");
                let value = option_part(option, "value");
                let selected = if value == current { " selected" } else { "" };
                format!(
                    "<option value='{}'{selected}>{}</option>",
                    escape_html(&value),
                    escape_html(&label)
                )
            })
            .collect()
    }

    fn value_text(&self, key: &str) -> String {
        self.values
            .and_then(|values| values.get(key))
            .map(scalar_text)
            .unwrap_or_default()
    }
}

/// `label`/`value` of an option object, or the bare scalar as both.
fn option_part(option: &Value, part: &str) -> String {
    match option.get(part) {
        Some(inner) if !inner.is_null() => scalar_text(inner),
        _ => scalar_text(option),
    }
}

fn wrap(title: &str, control: &str, style: &str) -> String {
    format!(
        "<div class='fp-item'{style}><label class='fp-label'>{}</label>{control}</div>",
        escape_html(title)
    )
}

fn raw_block(node: &Value) -> String {
    format!("<pre>{}</pre>", escape_html(&node.to_string()))
}

/// Render a whole form value: `value.schema` (or the value itself) against
/// `value.initial_values`, inside the `formily-preview` wrapper.
#[must_use]
pub fn render(value: &Value) -> String {
    let values = embedded_values(value).and_then(Value::as_object);
    let body = PreviewRenderer::new(values).render_tree(schema_root(value));
    format!("<div class='formily-preview'>{PREVIEW_STYLE}{body}</div>")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn body(schema: &Value, values: &Value) -> String {
        PreviewRenderer::new(values.as_object()).render_tree(schema)
    }

    #[test]
    fn input_carries_value_and_placeholder() {
        let schema = json!({"properties": {"name": {
            "title": "Name",
            "x-component": "Input",
            "x-component-props": {"placeholder": "Your name"}
        }}});
        assert_eq!(
            body(&schema, &json!({"name": "alice"})),
            "<div class='fp-item'><label class='fp-label'>Name</label>\
             <input type='text' name='name' value='alice' placeholder='Your name' /></div>"
        );
    }

    #[test]
    fn password_and_textarea_markup() {
        let schema = json!({"properties": {
            "secret": {"x-component": "Password"},
            "bio": {"x-component": "Input.TextArea"}
        }});
        let html = body(&schema, &json!({"secret": "s3", "bio": "hello"}));
        assert!(html.contains("<input type='password' name='secret' value='s3' placeholder='' />"));
        assert!(html.contains("<textarea name='bio' placeholder=''>hello</textarea>"));
        assert!(html.contains("<label class='fp-label'>secret</label>"));
    }

    #[test]
    fn number_value_renders_as_json_text() {
        let schema = json!({"properties": {"age": {"x-component": "NumberPicker"}}});
        assert!(body(&schema, &json!({"age": 42})).contains("<input type='number' name='age' value='42' />"));
    }

    #[test]
    fn select_marks_current_option() {
        let schema = json!({"properties": {"level": {
            "x-component": "Select",
            "enum": [{"label": "Low", "value": 1}, {"label": "High", "value": 2}, "other"]
        }}});
        let html = body(&schema, &json!({"level": 2}));
        assert!(html.contains("<option value='1'>Low</option>"));
        assert!(html.contains("<option value='2' selected>High</option>"));
        assert!(html.contains("<option value='other'>other</option>"));
    }

    #[test]
    fn card_header_falls_back_to_title_then_key() {
        let with_header = json!({"properties": {"c": {
            "title": "T", "x-component": "Card",
            "x-component-props": {"header": "H"}, "properties": {}
        }}});
        let with_title = json!({"properties": {"c": {"title": "T", "x-component": "Card", "properties": {}}}});
        let bare = json!({"properties": {"c": {"x-component": "Card", "properties": {}}}});

        assert!(body(&with_header, &json!({})).contains("<div class='fp-card-h'>H</div>"));
        assert!(body(&with_title, &json!({})).contains("<div class='fp-card-h'>T</div>"));
        assert!(body(&bare, &json!({})).contains("<div class='fp-card-h'>c</div>"));
    }

    #[test]
    fn untagged_containers_recurse_without_wrapper() {
        let schema = json!({"properties": {
            "group": {"type": "void", "properties": {"inner": {"x-component": "Input"}}},
            "tabs": {"x-component": "Tabs", "properties": {"pane": {"x-component": "Input"}}}
        }});
        let html = body(&schema, &json!({}));
        assert!(html.starts_with("<div class='fp-item'><label class='fp-label'>inner</label>"));
        assert!(html.contains("name='pane'"));
        assert!(!html.contains("group"));
        assert!(!html.contains("<pre>"));
    }

    #[test]
    fn unknown_and_missing_components_fall_back_to_pre() {
        let schema = json!({"properties": {
            "color": {"x-component": "ColorPicker"},
            "plain": {"type": "string"}
        }});
        let html = body(&schema, &json!({}));
        assert!(html.contains("<label class='fp-label'>color</label><pre>{&quot;x-component&quot;:&quot;ColorPicker&quot;}</pre>"));
        assert!(html.contains("<label class='fp-label'>plain</label><pre>"));
    }

    #[test]
    fn leaf_root_renders_as_pre() {
        assert_eq!(body(&json!({"a": 1}), &json!({})), "<pre>{&quot;a&quot;:1}</pre>");
    }

    #[test]
    fn full_render_is_wrapped_and_uses_embedded_values() {
        let value = json!({
            "schema": {"properties": {"name": {"x-component": "Input"}}},
            "initial_values": {"name": "bob"}
        });
        let html = render(&value);
        assert!(html.starts_with("<div class='formily-preview'><style>"));
        assert!(html.ends_with("</div>"));
        assert!(html.contains("value='bob'"));
    }

    #[test]
    fn style_is_inlined_on_wrapper() {
        let schema = json!({"properties": {"name": {
            "x-component": "Input",
            "x-component-props": {"style": {"marginTop": "8px"}}
        }}});
        assert!(body(&schema, &json!({})).starts_with("<div class='fp-item' style='margin-top:8px;'>"));
    }
}
