use super::FieldHandler;
use crate::config::{DisplayOverride, FieldConfiguration, ResolvedFieldConfiguration};
use crate::errors::FieldResult;
use crate::model::{FieldModel, TypeKind};
use crate::render::{ControlKind, FieldDisplayType, FieldRenderRequest, ListItem};
use crate::value::{FieldValue, is_selected};

/// How a boolean field ends up being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BooleanStyle {
    Checkbox,
    RadioList,
    DropDown,
}

/// Renders boolean and nullable-boolean fields.
///
/// A non-nullable bool with no display override is a single checkbox.
/// Anything else (nullable, or an explicit list/dropdown override) becomes a
/// two-option select built from the true/false strings, with a third
/// empty option when the field is nullable and not required.
pub struct BooleanHandler;

impl BooleanHandler {
    fn style(model: &FieldModel, display_override: Option<DisplayOverride>) -> BooleanStyle {
        match display_override {
            Some(DisplayOverride::List) => BooleanStyle::RadioList,
            Some(DisplayOverride::DropDown) => BooleanStyle::DropDown,
            Some(DisplayOverride::Default) | None => {
                if model.is_nullable() {
                    BooleanStyle::DropDown
                } else {
                    BooleanStyle::Checkbox
                }
            }
        }
    }

    fn neither_text(model: &FieldModel, config: &ResolvedFieldConfiguration) -> String {
        match config.none_string.as_deref() {
            Some(text) => text.to_string(),
            None if !model.is_required() => String::from("Neither"),
            None => String::new(),
        }
    }
}

impl FieldHandler for BooleanHandler {
    fn name(&self) -> &'static str {
        "boolean"
    }

    fn can_handle(&self, model: &FieldModel, _config: &FieldConfiguration) -> bool {
        matches!(model.kind(), TypeKind::Boolean) && !model.is_multi_valued()
    }

    fn prepare(&self, model: &FieldModel, config: &mut FieldConfiguration) {
        if Self::style(model, config.display_override()) == BooleanStyle::RadioList {
            // No single control for a label to target.
            config.suppress_label_element();
        }
    }

    fn display_type(&self, model: &FieldModel, config: &ResolvedFieldConfiguration) -> FieldDisplayType {
        match Self::style(model, config.display_type) {
            BooleanStyle::Checkbox => FieldDisplayType::Checkbox,
            BooleanStyle::RadioList => FieldDisplayType::List,
            BooleanStyle::DropDown => FieldDisplayType::DropDown,
        }
    }

    fn render(&self, model: &FieldModel, config: &ResolvedFieldConfiguration) -> FieldResult<FieldRenderRequest> {
        let style = Self::style(model, config.display_type);
        if style == BooleanStyle::Checkbox {
            // An absent value renders unchecked.
            let checked = model.value() == Some(&FieldValue::Bool(true));
            return Ok(FieldRenderRequest::new(
                ControlKind::Checkbox { checked },
                model.property(),
                model.id(),
            )
            .with_value(Some(FieldValue::Bool(checked)))
            .with_attributes(config.attributes.clone()));
        }

        let mut items = Vec::with_capacity(3);
        if model.is_nullable() && !model.is_required() {
            items.push(ListItem::empty(Self::neither_text(model, config)));
        }
        for (text, value) in [
            (config.true_string.as_str(), FieldValue::Bool(true)),
            (config.false_string.as_str(), FieldValue::Bool(false)),
        ] {
            let selected = is_selected(model.value(), &value, false);
            items.push(ListItem::new(text, value).selected(selected));
        }

        let control = match style {
            BooleanStyle::RadioList => ControlKind::RadioList,
            _ => ControlKind::Select { multiple: false },
        };
        Ok(FieldRenderRequest::new(control, model.property(), model.id())
            .with_value(model.value().cloned())
            .with_items(items)
            .with_attributes(config.attributes.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeDescriptor;

    fn bool_field() -> FieldModel {
        FieldModel::new("Agreed", TypeDescriptor::scalar(TypeKind::Boolean))
    }

    fn nullable_bool_field() -> FieldModel {
        FieldModel::new("Agreed", TypeDescriptor::nullable(TypeKind::Boolean))
    }

    #[test]
    fn plain_bool_is_a_checkbox_defaulting_to_unchecked() {
        let config = FieldConfiguration::new().freeze();
        let model = bool_field();
        assert_eq!(
            BooleanHandler.display_type(&model, &config),
            FieldDisplayType::Checkbox
        );
        let request = BooleanHandler.render(&model, &config).unwrap();
        assert_eq!(request.control, ControlKind::Checkbox { checked: false });
        assert_eq!(request.value, Some(FieldValue::Bool(false)));
    }

    #[test]
    fn checked_when_value_is_true() {
        let config = FieldConfiguration::new().freeze();
        let model = bool_field().with_value(FieldValue::Bool(true));
        let request = BooleanHandler.render(&model, &config).unwrap();
        assert_eq!(request.control, ControlKind::Checkbox { checked: true });
    }

    #[test]
    fn nullable_bool_gets_a_three_option_dropdown() {
        let config = FieldConfiguration::new().freeze();
        let model = nullable_bool_field();
        assert_eq!(
            BooleanHandler.display_type(&model, &config),
            FieldDisplayType::DropDown
        );
        let request = BooleanHandler.render(&model, &config).unwrap();
        let labels: Vec<_> = request.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["Neither", "Yes", "No"]);
        assert!(request.items[0].is_empty_item());
    }

    #[test]
    fn required_nullable_bool_drops_the_neither_option() {
        let config = FieldConfiguration::new().freeze();
        let model = nullable_bool_field().required(true);
        let request = BooleanHandler.render(&model, &config).unwrap();
        let labels: Vec<_> = request.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["Yes", "No"]);
    }

    #[test]
    fn list_override_renders_radios_and_suppresses_the_label() {
        let mut config = FieldConfiguration::new().as_list();
        let model = bool_field().with_value(FieldValue::Bool(false));
        BooleanHandler.prepare(&model, &mut config);
        let frozen = config.freeze();
        assert!(!frozen.has_label_element);
        let request = BooleanHandler.render(&model, &frozen).unwrap();
        assert_eq!(request.control, ControlKind::RadioList);
        let selected: Vec<_> = request.items.iter().filter(|i| i.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].label, "No");
    }

    #[test]
    fn true_false_strings_are_configurable() {
        let model = bool_field().with_value(FieldValue::Bool(true));
        let config = FieldConfiguration::new()
            .with_true_as("Oui")
            .with_false_as("Non")
            .as_drop_down()
            .freeze();
        let request = BooleanHandler.render(&model, &config).unwrap();
        let labels: Vec<_> = request.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["Oui", "Non"]);
    }
}
