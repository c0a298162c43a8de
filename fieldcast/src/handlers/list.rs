use super::{FieldHandler, ListStyle, make_empty_item};
use crate::config::{DisplayOverride, FieldConfiguration, ResolvedFieldConfiguration};
use crate::errors::{FieldError, FieldResult};
use crate::model::{FieldModel, ListSourceItems, TypeKind};
use crate::render::{ControlKind, FieldDisplayType, FieldRenderRequest, ListItem};
use crate::value::is_selected;

/// Renders fields whose legal values come from a sibling list property on
/// the model.
///
/// The host resolves the sibling property ahead of time; the two failure
/// states (no model at all, list property null) surface here as the crate's
/// two domain errors.
pub struct ListHandler;

impl ListHandler {
    fn style(model: &FieldModel, display_override: Option<DisplayOverride>) -> ListStyle {
        let multiple = model.is_multi_valued();
        match display_override {
            Some(DisplayOverride::List) if multiple => ListStyle::CheckboxList,
            Some(DisplayOverride::List) => ListStyle::Radio,
            _ => ListStyle::DropDown { multiple },
        }
    }
}

impl FieldHandler for ListHandler {
    fn name(&self) -> &'static str {
        "list"
    }

    fn can_handle(&self, model: &FieldModel, _config: &FieldConfiguration) -> bool {
        model.list_source().is_some()
    }

    fn prepare(&self, model: &FieldModel, config: &mut FieldConfiguration) {
        if !matches!(
            Self::style(model, config.display_override()),
            ListStyle::DropDown { .. }
        ) {
            // A radio/checkbox list has no single control for the field's
            // label element to target.
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
        let Some(source) = model.list_source() else {
            // Render called without a source; degrade to the default shape.
            return super::DefaultHandler.render(model, config);
        };
        let candidates = match &source.items {
            ListSourceItems::Available(items) => items,
            ListSourceItems::ModelMissing => {
                return Err(FieldError::model_null(model.property()));
            }
            ListSourceItems::PropertyNull => {
                return Err(FieldError::list_property_null(&source.property, model.property()));
            }
        };

        let style = Self::style(model, config.display_type);
        let mut items = Vec::with_capacity(candidates.len() + 1);
        if let Some(mut empty) = make_empty_item(model, config, style, false) {
            // Client-side numeric validation rejects the empty string even on
            // an optional field, so the empty radio option opts out of it.
            if style == ListStyle::Radio
                && !model.is_required()
                && matches!(model.kind(), TypeKind::Numeric(_))
            {
                empty.disable_validation = true;
            }
            items.push(empty);
        }
        for candidate in candidates {
            let mut item = candidate.clone();
            item.selected = item
                .value
                .as_ref()
                .is_some_and(|value| is_selected(model.value(), value, false));
            items.push(item);
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
    use crate::model::{ListSource, NumericKind, TypeDescriptor};
    use crate::value::FieldValue;

    fn region_items() -> Vec<ListItem> {
        vec![
            ListItem::new("North", FieldValue::Int(1)),
            ListItem::new("South", FieldValue::Int(2)),
        ]
    }

    fn region_field(items: ListSourceItems) -> FieldModel {
        FieldModel::new(
            "RegionId",
            TypeDescriptor::nullable(TypeKind::Numeric(NumericKind::I32)),
        )
        .with_list_source(ListSource::new("Regions", items))
    }

    #[test]
    fn missing_model_raises_model_null() {
        let model = region_field(ListSourceItems::ModelMissing);
        let err = ListHandler
            .render(&model, &FieldConfiguration::new().freeze())
            .unwrap_err();
        assert_eq!(err, FieldError::model_null("RegionId"));
    }

    #[test]
    fn null_list_property_raises_list_property_null() {
        let model = region_field(ListSourceItems::PropertyNull).required(true);
        let err = ListHandler
            .render(&model, &FieldConfiguration::new().freeze())
            .unwrap_err();
        assert_eq!(err, FieldError::list_property_null("Regions", "RegionId"));
        let message = err.to_string();
        assert!(message.contains("Regions") && message.contains("RegionId"));
    }

    #[test]
    fn current_value_marks_the_matching_item_selected() {
        let model = region_field(ListSourceItems::Available(region_items()))
            .with_value(FieldValue::Int(2))
            .required(true);
        let request = ListHandler
            .render(&model, &FieldConfiguration::new().freeze())
            .unwrap();
        let selected: Vec<_> = request.items.iter().filter(|i| i.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].label, "South");
    }

    #[test]
    fn optional_numeric_radio_list_disables_validation_on_the_empty_item() {
        let model = region_field(ListSourceItems::Available(region_items()));
        let request = ListHandler
            .render(&model, &FieldConfiguration::new().as_list().freeze())
            .unwrap();
        assert_eq!(request.control, ControlKind::RadioList);
        let empty = &request.items[0];
        assert!(empty.is_empty_item());
        assert!(empty.disable_validation);
        // Real candidates keep validation on.
        assert!(request.items[1..].iter().all(|i| !i.disable_validation));
    }

    #[test]
    fn required_radio_list_has_no_empty_item() {
        let model = region_field(ListSourceItems::Available(region_items())).required(true);
        let request = ListHandler
            .render(&model, &FieldConfiguration::new().as_list().freeze())
            .unwrap();
        assert!(request.items.iter().all(|i| !i.is_empty_item()));
    }

    #[test]
    fn multi_valued_field_renders_a_multi_select() {
        let model = FieldModel::new(
            "RegionIds",
            TypeDescriptor::collection_of(TypeKind::Numeric(NumericKind::I32)),
        )
        .with_list_source(ListSource::new("Regions", ListSourceItems::Available(region_items())))
        .with_value(FieldValue::Many(vec![FieldValue::Int(1)]))
        .required(true);
        let request = ListHandler
            .render(&model, &FieldConfiguration::new().freeze())
            .unwrap();
        assert_eq!(request.control, ControlKind::Select { multiple: true });
        assert!(request.items[0].selected);
        assert!(!request.items[1].selected);
    }
}
