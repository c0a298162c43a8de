use super::FieldHandler;
use crate::config::{FieldConfiguration, ResolvedFieldConfiguration};
use crate::errors::FieldResult;
use crate::model::{DataKind, FieldModel, NumericKind, TypeKind};
use crate::render::{ControlKind, FieldDisplayType, FieldRenderRequest, InputType};

/// Renders numeric fields, deriving `step`/`min`/`max` defaults from the
/// numeric kind and any range-validation annotation. Defaults never
/// overwrite attributes the caller has set explicitly.
pub struct NumberHandler;

impl NumberHandler {
    fn format_bound(bound: f64) -> String {
        if bound.fract() == 0.0 && bound.abs() < 9e15 {
            format!("{}", bound as i64)
        } else {
            bound.to_string()
        }
    }
}

impl FieldHandler for NumberHandler {
    fn name(&self) -> &'static str {
        "number"
    }

    fn can_handle(&self, model: &FieldModel, _config: &FieldConfiguration) -> bool {
        matches!(model.kind(), TypeKind::Numeric(_)) && !model.is_multi_valued()
    }

    fn prepare(&self, model: &FieldModel, config: &mut FieldConfiguration) {
        let Some(kind) = model.numeric_kind() else {
            return;
        };

        if kind.is_integral() {
            config.set_attr_if_absent("step", "1");
        } else if model.data_kind() == Some(DataKind::Currency) {
            config.set_attr_if_absent("step", "0.01");
        }

        if let Some(range) = model.range() {
            config.set_attr_if_absent("min", Self::format_bound(range.min));
            config.set_attr_if_absent("max", Self::format_bound(range.max));
        } else if let Some((min, max)) = kind.natural_bounds() {
            config.set_attr_if_absent("min", min);
            config.set_attr_if_absent("max", max);
        }
    }

    fn display_type(&self, _model: &FieldModel, _config: &ResolvedFieldConfiguration) -> FieldDisplayType {
        FieldDisplayType::SingleLineText
    }

    fn render(&self, model: &FieldModel, config: &ResolvedFieldConfiguration) -> FieldResult<FieldRenderRequest> {
        Ok(FieldRenderRequest::new(
            ControlKind::Input {
                input_type: InputType::Number,
            },
            model.property(),
            model.id(),
        )
        .with_value(model.value().cloned())
        .with_attributes(config.attributes.clone()))
    }
}
