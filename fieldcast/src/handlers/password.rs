use super::FieldHandler;
use crate::config::{FieldConfiguration, ResolvedFieldConfiguration};
use crate::errors::FieldResult;
use crate::model::{DataKind, FieldModel};
use crate::render::{ControlKind, FieldDisplayType, FieldRenderRequest, InputType};

/// Renders password-tagged fields as a masked single-line input, whatever
/// the declared type. The current value is never echoed back.
pub struct PasswordHandler;

impl FieldHandler for PasswordHandler {
    fn name(&self) -> &'static str {
        "password"
    }

    fn can_handle(&self, model: &FieldModel, _config: &FieldConfiguration) -> bool {
        model.data_kind() == Some(DataKind::Password)
    }

    fn display_type(&self, _model: &FieldModel, _config: &ResolvedFieldConfiguration) -> FieldDisplayType {
        FieldDisplayType::SingleLineText
    }

    fn render(&self, model: &FieldModel, config: &ResolvedFieldConfiguration) -> FieldResult<FieldRenderRequest> {
        Ok(FieldRenderRequest::new(
            ControlKind::Input {
                input_type: InputType::Password,
            },
            model.property(),
            model.id(),
        )
        .with_attributes(config.attributes.clone()))
    }
}
