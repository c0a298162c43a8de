use indexmap::IndexMap;
use serde::Serialize;

use crate::value::FieldValue;

/// The resolved kind of control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldDisplayType {
    Default,
    SingleLineText,
    MultiLineText,
    Checkbox,
    List,
    DropDown,
    FileUpload,
    Custom,
}

/// The `type` attribute for input-style controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Password,
    Number,
    File,
}

/// The concrete control shape the template renderer must draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlKind {
    Input { input_type: InputType },
    TextArea { rows: Option<u32>, cols: Option<u32> },
    Checkbox { checked: bool },
    RadioList,
    CheckboxList,
    Select { multiple: bool },
    FileInput,
}

/// One candidate option of a select-style control.
///
/// `value: None` marks the synthetic empty/"none" item. `disable_validation`
/// carries the workaround for client-side validation of empty numeric radio
/// options (an empty string fails numeric validation even when the field is
/// optional, so the empty option must opt out).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub label: String,
    pub value: Option<FieldValue>,
    pub selected: bool,
    pub disable_validation: bool,
    pub hidden: bool,
}

impl ListItem {
    pub fn new(label: impl Into<String>, value: FieldValue) -> Self {
        Self {
            label: label.into(),
            value: Some(value),
            selected: false,
            disable_validation: false,
            hidden: false,
        }
    }

    /// The synthetic empty/"none" item, always positioned first when present.
    pub fn empty(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
            selected: false,
            disable_validation: false,
            hidden: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn is_empty_item(&self) -> bool {
        self.value.is_none()
    }
}

/// Structured description of the markup the external template renderer must
/// produce for one field. This is data, not markup: the core's job ends here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRenderRequest {
    pub control: ControlKind,
    /// Bind name of the field (dotted path as supplied by the host).
    pub name: String,
    /// Sanitized element id derived from the bind name.
    pub id: String,
    pub value: Option<FieldValue>,
    /// Candidate options with selection already evaluated; empty for
    /// non-list controls.
    pub items: Vec<ListItem>,
    /// Final HTML attributes in output order.
    pub attributes: IndexMap<String, String>,
}

impl FieldRenderRequest {
    pub fn new(control: ControlKind, name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            control,
            name: name.into(),
            id: id.into(),
            value: None,
            items: Vec::new(),
            attributes: IndexMap::new(),
        }
    }

    pub fn with_value(mut self, value: Option<FieldValue>) -> Self {
        self.value = value;
        self
    }

    pub fn with_items(mut self, items: Vec<ListItem>) -> Self {
        self.items = items;
        self
    }

    pub fn with_attributes(mut self, attributes: IndexMap<String, String>) -> Self {
        self.attributes = attributes;
        self
    }
}
