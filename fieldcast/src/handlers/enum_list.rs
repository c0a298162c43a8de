use super::{FieldHandler, ListStyle, make_empty_item};
use crate::config::{DisplayOverride, FieldConfiguration, ResolvedFieldConfiguration};
use crate::errors::FieldResult;
use crate::humanize::humanize;
use crate::model::{EnumMember, FieldModel, TypeKind};
use crate::render::{ControlKind, FieldDisplayType, FieldRenderRequest, ListItem};
use crate::value::{FieldValue, is_selected};

/// Renders enum and flags-enum fields as a select list built from the enum
/// members. Flags enums and enum collections allow multiple selections.
pub struct EnumListHandler;

impl EnumListHandler {
    fn style(model: &FieldModel, display_override: Option<DisplayOverride>) -> ListStyle {
        let multiple = Self::multiple(model);
        match display_override {
            Some(DisplayOverride::List) if multiple => ListStyle::CheckboxList,
            Some(DisplayOverride::List) => ListStyle::Radio,
            _ => ListStyle::DropDown { multiple },
        }
    }

    fn multiple(model: &FieldModel) -> bool {
        model.is_multi_valued() || model.is_flags_enum()
    }

    fn is_excluded(member: &EnumMember, excluded: &[FieldValue]) -> bool {
        excluded.iter().any(|value| match value {
            FieldValue::Enum(e) => e.variant == member.variant,
            FieldValue::Text(name) => *name == member.variant,
            _ => false,
        })
    }
}

impl FieldHandler for EnumListHandler {
    fn name(&self) -> &'static str {
        "enum_list"
    }

    fn can_handle(&self, model: &FieldModel, _config: &FieldConfiguration) -> bool {
        matches!(model.kind(), TypeKind::Enum(_))
    }

    fn prepare(&self, model: &FieldModel, config: &mut FieldConfiguration) {
        // Radio/checkbox lists have no single control for a label to target.
        if !matches!(
            Self::style(model, config.display_override()),
            ListStyle::DropDown { .. }
        ) {
            config.suppress_label_element();
        }
    }

    fn display_type(&self, _model: &FieldModel, config: &ResolvedFieldConfiguration) -> FieldDisplayType {
        match config.display_type {
            Some(DisplayOverride::List) => FieldDisplayType::List,
            _ => FieldDisplayType::DropDown,
        }
    }

    fn render(&self, model: &FieldModel, config: &ResolvedFieldConfiguration) -> FieldResult<FieldRenderRequest> {
        let Some(descriptor) = model.enum_descriptor() else {
            // Render called for a non-enum field; degrade to the default shape.
            return super::DefaultHandler.render(model, config);
        };
        let style = Self::style(model, config.display_type);
        let flags = descriptor.flags;

        let mut items = Vec::with_capacity(descriptor.members.len() + 1);
        items.extend(make_empty_item(model, config, style, false));
        for member in &descriptor.members {
            if Self::is_excluded(member, &config.excluded_values) {
                continue;
            }
            let value = member.value();
            let label = member
                .label
                .clone()
                .unwrap_or_else(|| humanize(&member.variant));
            let selected = is_selected(model.value(), &value, flags);
            items.push(ListItem::new(label, value).selected(selected));
        }

        let control = match style {
            ListStyle::Radio => ControlKind::RadioList,
            ListStyle::CheckboxList => ControlKind::CheckboxList,
            ListStyle::DropDown { multiple } => ControlKind::Select { multiple },
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
    use crate::model::{EnumDescriptor, TypeDescriptor};
    use crate::value::EnumValue;

    fn color_descriptor() -> EnumDescriptor {
        EnumDescriptor::new(
            "Color",
            vec![
                EnumMember::new("Red", 0),
                EnumMember::new("DarkBlue", 1),
                EnumMember::new("Green", 2).with_label("Forest green"),
            ],
        )
    }

    fn color_field() -> FieldModel {
        FieldModel::new("Color", TypeDescriptor::nullable(TypeKind::Enum(color_descriptor())))
    }

    #[test]
    fn members_are_humanized_unless_labeled() {
        let request = EnumListHandler
            .render(&color_field(), &FieldConfiguration::new().freeze())
            .unwrap();
        let labels: Vec<_> = request
            .items
            .iter()
            .filter(|i| !i.is_empty_item())
            .map(|i| i.label.as_str())
            .collect();
        assert_eq!(labels, ["Red", "Dark blue", "Forest green"]);
    }

    #[test]
    fn excluded_members_are_dropped() {
        let config = FieldConfiguration::new()
            .exclude(FieldValue::Enum(EnumValue::new("Red", 0)))
            .freeze();
        let request = EnumListHandler.render(&color_field(), &config).unwrap();
        assert!(request.items.iter().all(|i| i.label != "Red"));
    }

    #[test]
    fn flags_enum_selects_by_bitwise_and() {
        let descriptor = EnumDescriptor::new(
            "Perm",
            vec![
                EnumMember::new("A", 0b001),
                EnumMember::new("B", 0b010),
                EnumMember::new("C", 0b100),
            ],
        )
        .flags();
        let model = FieldModel::new("Perm", TypeDescriptor::scalar(TypeKind::Enum(descriptor)))
            .with_value(FieldValue::Enum(EnumValue::new("AC", 0b101)))
            .required(true);
        let request = EnumListHandler
            .render(&model, &FieldConfiguration::new().freeze())
            .unwrap();
        let selected: Vec<_> = request
            .items
            .iter()
            .filter(|i| i.selected)
            .map(|i| i.label.as_str())
            .collect();
        assert_eq!(selected, ["A", "C"]);
        // Flags render as a multi-select control.
        assert_eq!(request.control, ControlKind::Select { multiple: true });
    }

    #[test]
    fn list_override_suppresses_label_element() {
        let mut config = FieldConfiguration::new().as_list();
        EnumListHandler.prepare(&color_field(), &mut config);
        let frozen = config.freeze();
        assert!(!frozen.has_label_element);
    }
}
