//! Cross-cutting rules shared by the select-style handlers: the empty/"none"
//! item policy and its display-text fallback chain.

use crate::config::ResolvedFieldConfiguration;
use crate::model::FieldModel;
use crate::render::ListItem;

/// How a select-style field is being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListStyle {
    /// Single-select radio buttons.
    Radio,
    /// Multi-select checkboxes.
    CheckboxList,
    DropDown { multiple: bool },
}

impl ListStyle {
    /// Radio lists and multi-select dropdowns count as list/multi-value
    /// contexts for the empty-item display text.
    fn is_list_context(self) -> bool {
        matches!(self, ListStyle::Radio | ListStyle::DropDown { multiple: true })
    }
}

/// Whether a synthetic empty item belongs in the candidate set:
/// - never for checkbox-style lists,
/// - for radio lists and multi-select dropdowns, unless the field is required,
/// - for single-select dropdowns of a nullable type, always,
/// - otherwise omitted.
fn include_empty_item(style: ListStyle, required: bool, nullable: bool) -> bool {
    match style {
        ListStyle::CheckboxList => false,
        ListStyle::Radio => !required,
        ListStyle::DropDown { multiple: true } => !required,
        ListStyle::DropDown { multiple: false } => nullable,
    }
}

/// Display text for the empty item, in priority order: explicit none-string
/// override, "Neither" for a non-required boolean, "None" in list/multi-value
/// contexts, the model's null display text, empty string.
fn empty_item_text(
    model: &FieldModel,
    config: &ResolvedFieldConfiguration,
    style: ListStyle,
    boolean: bool,
) -> String {
    if let Some(text) = config.none_string.as_deref() {
        return text.to_string();
    }
    if boolean && !model.is_required() {
        return String::from("Neither");
    }
    if style.is_list_context() {
        return String::from("None");
    }
    model.null_display_text().unwrap_or_default().to_string()
}

/// Builds the empty item for the field, or `None` when the policy omits it.
/// Callers must position the returned item first.
pub(crate) fn make_empty_item(
    model: &FieldModel,
    config: &ResolvedFieldConfiguration,
    style: ListStyle,
    boolean: bool,
) -> Option<ListItem> {
    if !include_empty_item(style, model.is_required(), model.is_nullable()) {
        return None;
    }
    let mut item = ListItem::empty(empty_item_text(model, config, style, boolean));
    item.hidden = config.empty_item_hidden;
    Some(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfiguration;
    use crate::model::{FieldModel, TypeDescriptor, TypeKind};

    fn text_field(required: bool, nullable: bool) -> FieldModel {
        let descriptor = if nullable {
            TypeDescriptor::nullable(TypeKind::Text)
        } else {
            TypeDescriptor::scalar(TypeKind::Text)
        };
        FieldModel::new("Field", descriptor).required(required)
    }

    #[test]
    fn checkbox_lists_never_get_an_empty_item() {
        let model = text_field(false, true);
        let config = FieldConfiguration::new().freeze();
        assert!(make_empty_item(&model, &config, ListStyle::CheckboxList, false).is_none());
    }

    #[test]
    fn required_radio_list_omits_empty_item() {
        let config = FieldConfiguration::new().freeze();
        assert!(make_empty_item(&text_field(true, false), &config, ListStyle::Radio, false).is_none());
        let item = make_empty_item(&text_field(false, false), &config, ListStyle::Radio, false)
            .expect("non-required radio list includes an empty item");
        assert_eq!(item.label, "None");
        assert!(item.is_empty_item());
    }

    #[test]
    fn nullable_single_dropdown_always_includes_empty_item() {
        let config = FieldConfiguration::new().freeze();
        let style = ListStyle::DropDown { multiple: false };
        // Even when required.
        assert!(make_empty_item(&text_field(true, true), &config, style, false).is_some());
        assert!(make_empty_item(&text_field(true, false), &config, style, false).is_none());
    }

    #[test]
    fn none_string_override_wins() {
        let config = FieldConfiguration::new().with_none_as("(choose)").freeze();
        let item = make_empty_item(&text_field(false, false), &config, ListStyle::Radio, false).unwrap();
        assert_eq!(item.label, "(choose)");
    }

    #[test]
    fn single_dropdown_falls_back_to_null_display_text() {
        let config = FieldConfiguration::new().freeze();
        let model = text_field(false, true).with_null_display_text("(not set)");
        let item = make_empty_item(&model, &config, ListStyle::DropDown { multiple: false }, false).unwrap();
        assert_eq!(item.label, "(not set)");
    }

    #[test]
    fn hidden_flag_carries_through() {
        let config = FieldConfiguration::new().hide_empty_item().freeze();
        let item = make_empty_item(&text_field(false, false), &config, ListStyle::Radio, false).unwrap();
        assert!(item.hidden);
    }
}
