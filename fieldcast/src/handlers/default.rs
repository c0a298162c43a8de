use super::FieldHandler;
use crate::config::{FieldConfiguration, ResolvedFieldConfiguration};
use crate::errors::FieldResult;
use crate::model::FieldModel;
use crate::render::{ControlKind, FieldDisplayType, FieldRenderRequest, InputType};

/// Unconditional fallback: a single-line text input of the raw value. Keeps
/// the handler chain total so resolution never fails to classify a field.
pub struct DefaultHandler;

impl FieldHandler for DefaultHandler {
    fn name(&self) -> &'static str {
        "default"
    }

    fn can_handle(&self, _model: &FieldModel, _config: &FieldConfiguration) -> bool {
        true
    }

    fn display_type(&self, _model: &FieldModel, _config: &ResolvedFieldConfiguration) -> FieldDisplayType {
        FieldDisplayType::SingleLineText
    }

    fn render(&self, model: &FieldModel, config: &ResolvedFieldConfiguration) -> FieldResult<FieldRenderRequest> {
        Ok(FieldRenderRequest::new(
            ControlKind::Input {
                input_type: InputType::Text,
            },
            model.property(),
            model.id(),
        )
        .with_value(model.value().cloned())
        .with_attributes(config.attributes.clone()))
    }
}
