use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::value::FieldValue;

/// A fragment of pre-rendered HTML supplied by the caller (label bodies,
/// hints, prepended/appended markup). Opaque to the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HtmlFragment(String);

impl HtmlFragment {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HtmlFragment {
    fn from(html: &str) -> Self {
        Self::new(html)
    }
}

impl From<String> for HtmlFragment {
    fn from(html: String) -> Self {
        Self::new(html)
    }
}

/// Explicit display-type override requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DisplayOverride {
    Default,
    List,
    DropDown,
}

/// Mutable, field-scoped configuration for a single render.
///
/// Built by the caller, mutated in place by the winning handler's prepare
/// step, then frozen into a [`ResolvedFieldConfiguration`] before the
/// template phase. One instance per field render; never shared across
/// fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfiguration {
    attributes: IndexMap<String, String>,
    display_type: Option<DisplayOverride>,
    label: Option<HtmlFragment>,
    inline_label: Option<HtmlFragment>,
    hint: Option<HtmlFragment>,
    prepended: Vec<HtmlFragment>,
    appended: Vec<HtmlFragment>,
    true_string: String,
    false_string: String,
    none_string: Option<String>,
    excluded_values: Vec<FieldValue>,
    has_label_element: bool,
    has_inline_label: bool,
    inline_label_wraps_element: bool,
    empty_item_hidden: bool,
    rows: Option<u32>,
    cols: Option<u32>,
    format_string: Option<String>,
    bag: IndexMap<String, serde_json::Value>,
}

impl Default for FieldConfiguration {
    fn default() -> Self {
        Self {
            attributes: IndexMap::new(),
            display_type: None,
            label: None,
            inline_label: None,
            hint: None,
            prepended: Vec::new(),
            appended: Vec::new(),
            true_string: String::from("Yes"),
            false_string: String::from("No"),
            none_string: None,
            excluded_values: Vec::new(),
            has_label_element: true,
            has_inline_label: true,
            inline_label_wraps_element: false,
            empty_item_hidden: false,
            rows: None,
            cols: None,
            format_string: None,
            bag: IndexMap::new(),
        }
    }
}

impl FieldConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an HTML attribute. A later call for the same name replaces the
    /// value but keeps the attribute's original output position.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Adds a CSS class, merging with any classes already set.
    pub fn add_class(mut self, class: &str) -> Self {
        self.merge_class(class);
        self
    }

    pub fn readonly(self) -> Self {
        self.attr("readonly", "readonly")
    }

    pub fn disabled(self) -> Self {
        self.attr("disabled", "disabled")
    }

    pub fn placeholder(self, text: impl Into<String>) -> Self {
        self.attr("placeholder", text)
    }

    pub fn as_list(mut self) -> Self {
        self.display_type = Some(DisplayOverride::List);
        self
    }

    pub fn as_drop_down(mut self) -> Self {
        self.display_type = Some(DisplayOverride::DropDown);
        self
    }

    pub fn label(mut self, html: impl Into<HtmlFragment>) -> Self {
        self.label = Some(html.into());
        self
    }

    pub fn inline_label(mut self, html: impl Into<HtmlFragment>) -> Self {
        self.inline_label = Some(html.into());
        self
    }

    pub fn hint(mut self, html: impl Into<HtmlFragment>) -> Self {
        self.hint = Some(html.into());
        self
    }

    /// Prepends HTML before the field element. Most-recently-prepended
    /// appears first in the output.
    pub fn prepend(mut self, html: impl Into<HtmlFragment>) -> Self {
        self.prepended.insert(0, html.into());
        self
    }

    /// Appends HTML after the field element, in call order.
    pub fn append(mut self, html: impl Into<HtmlFragment>) -> Self {
        self.appended.push(html.into());
        self
    }

    pub fn with_true_as(mut self, text: impl Into<String>) -> Self {
        self.true_string = text.into();
        self
    }

    pub fn with_false_as(mut self, text: impl Into<String>) -> Self {
        self.false_string = text.into();
        self
    }

    pub fn with_none_as(mut self, text: impl Into<String>) -> Self {
        self.none_string = Some(text.into());
        self
    }

    /// Omits an enum member from generated lists.
    pub fn exclude(mut self, value: FieldValue) -> Self {
        self.excluded_values.push(value);
        self
    }

    pub fn without_label_element(mut self) -> Self {
        self.has_label_element = false;
        self
    }

    pub fn without_inline_label(mut self) -> Self {
        self.has_inline_label = false;
        self
    }

    pub fn inline_label_wraps_element(mut self) -> Self {
        self.inline_label_wraps_element = true;
        self
    }

    pub fn hide_empty_item(mut self) -> Self {
        self.empty_item_hidden = true;
        self
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn cols(mut self, cols: u32) -> Self {
        self.cols = Some(cols);
        self
    }

    pub fn with_format_string(mut self, format: impl Into<String>) -> Self {
        self.format_string = Some(format.into());
        self
    }

    /// Stores an open-ended extension value under the given key. The value
    /// must serialize; a value that does not is dropped with a warning.
    pub fn bag_set<T: Serialize>(mut self, key: impl Into<String>, value: &T) -> Self {
        let key = key.into();
        match serde_json::to_value(value) {
            Ok(value) => {
                self.bag.insert(key, value);
            }
            Err(err) => log::warn!("dropping unserializable extension value for key '{key}': {err}"),
        }
        self
    }

    /// Reads a typed extension value. Returns `None` when the key is missing
    /// or the stored value does not convert to `T`.
    pub fn bag_get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.bag
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    // In-place mutators used by handler preparation.

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Sets an attribute only when the caller has not already set it.
    pub fn set_attr_if_absent(&mut self, name: &str, value: impl Into<String>) {
        if !self.attributes.contains_key(name) {
            self.attributes.insert(name.to_string(), value.into());
        }
    }

    pub fn merge_class(&mut self, class: &str) {
        match self.attributes.get_mut("class") {
            Some(existing) => {
                existing.push(' ');
                existing.push_str(class);
            }
            None => {
                self.attributes.insert(String::from("class"), class.to_string());
            }
        }
    }

    pub fn suppress_label_element(&mut self) {
        self.has_label_element = false;
    }

    pub fn set_format_string_if_absent(&mut self, format: impl Into<String>) {
        if self.format_string.is_none() {
            self.format_string = Some(format.into());
        }
    }

    // Read accessors (valid on both the pristine and the prepared state).

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    pub fn display_override(&self) -> Option<DisplayOverride> {
        self.display_type
    }

    pub fn prepended_html(&self) -> &[HtmlFragment] {
        &self.prepended
    }

    pub fn appended_html(&self) -> &[HtmlFragment] {
        &self.appended
    }

    pub fn true_string(&self) -> &str {
        &self.true_string
    }

    pub fn false_string(&self) -> &str {
        &self.false_string
    }

    pub fn none_string(&self) -> Option<&str> {
        self.none_string.as_deref()
    }

    pub fn excluded_values(&self) -> &[FieldValue] {
        &self.excluded_values
    }

    pub fn format_string(&self) -> Option<&str> {
        self.format_string.as_deref()
    }

    /// Freezes the configuration into the immutable snapshot handed to the
    /// template phase. Resolution-dependent state cannot be mutated past this
    /// point.
    pub fn freeze(self) -> ResolvedFieldConfiguration {
        ResolvedFieldConfiguration {
            attributes: self.attributes,
            display_type: self.display_type,
            label: self.label,
            inline_label: self.inline_label,
            hint: self.hint,
            prepended: self.prepended,
            appended: self.appended,
            true_string: self.true_string,
            false_string: self.false_string,
            none_string: self.none_string,
            excluded_values: self.excluded_values,
            has_label_element: self.has_label_element,
            has_inline_label: self.has_inline_label,
            inline_label_wraps_element: self.inline_label_wraps_element,
            empty_item_hidden: self.empty_item_hidden,
            rows: self.rows,
            cols: self.cols,
            format_string: self.format_string,
            bag: self.bag,
        }
    }
}

/// Immutable value snapshot of a prepared [`FieldConfiguration`], consumed by
/// the handlers' render step and the external template renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedFieldConfiguration {
    pub attributes: IndexMap<String, String>,
    pub display_type: Option<DisplayOverride>,
    pub label: Option<HtmlFragment>,
    pub inline_label: Option<HtmlFragment>,
    pub hint: Option<HtmlFragment>,
    pub prepended: Vec<HtmlFragment>,
    pub appended: Vec<HtmlFragment>,
    pub true_string: String,
    pub false_string: String,
    pub none_string: Option<String>,
    pub excluded_values: Vec<FieldValue>,
    pub has_label_element: bool,
    pub has_inline_label: bool,
    pub inline_label_wraps_element: bool,
    pub empty_item_hidden: bool,
    pub rows: Option<u32>,
    pub cols: Option<u32>,
    pub format_string: Option<String>,
    pub bag: IndexMap<String, serde_json::Value>,
}

impl ResolvedFieldConfiguration {
    /// Reads a typed extension value, same contract as
    /// [`FieldConfiguration::bag_get`].
    pub fn bag_get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.bag
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepend_is_lifo_and_append_is_fifo() {
        let config = FieldConfiguration::new()
            .prepend("<2>")
            .prepend("<1>")
            .append("<3>")
            .append("<4>");
        let prepended: Vec<_> = config.prepended_html().iter().map(HtmlFragment::as_str).collect();
        let appended: Vec<_> = config.appended_html().iter().map(HtmlFragment::as_str).collect();
        assert_eq!(prepended, ["<1>", "<2>"]);
        assert_eq!(appended, ["<3>", "<4>"]);
    }

    #[test]
    fn attr_replaces_value_in_place() {
        let config = FieldConfiguration::new()
            .attr("class", "a")
            .attr("data-x", "1")
            .attr("class", "b");
        let keys: Vec<_> = config.attributes().keys().collect();
        assert_eq!(keys, ["class", "data-x"]);
        assert_eq!(config.attributes()["class"], "b");
    }

    #[test]
    fn add_class_merges() {
        let config = FieldConfiguration::new().attr("class", "form-control").add_class("wide");
        assert_eq!(config.attributes()["class"], "form-control wide");
    }

    #[test]
    fn bag_round_trips_typed_values() {
        let config = FieldConfiguration::new().bag_set("checkbox_styled", &true);
        assert_eq!(config.bag_get::<bool>("checkbox_styled"), Some(true));
        // Type mismatch and missing key both come back as None.
        assert_eq!(config.bag_get::<String>("checkbox_styled"), None);
        assert_eq!(config.bag_get::<bool>("missing"), None);
    }

    #[test]
    fn set_attr_if_absent_respects_explicit_values() {
        let mut config = FieldConfiguration::new().attr("max", "10");
        config.set_attr_if_absent("max", "255");
        config.set_attr_if_absent("min", "0");
        assert_eq!(config.attributes()["max"], "10");
        assert_eq!(config.attributes()["min"], "0");
    }
}
