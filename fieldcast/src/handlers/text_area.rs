use super::FieldHandler;
use crate::config::{FieldConfiguration, ResolvedFieldConfiguration};
use crate::errors::FieldResult;
use crate::model::{DataKind, FieldModel};
use crate::render::{ControlKind, FieldDisplayType, FieldRenderRequest};

/// Renders multiline-text-tagged fields as a textarea, honoring explicit
/// rows/cols overrides from the configuration.
pub struct TextAreaHandler;

impl FieldHandler for TextAreaHandler {
    fn name(&self) -> &'static str {
        "text_area"
    }

    fn can_handle(&self, model: &FieldModel, _config: &FieldConfiguration) -> bool {
        model.data_kind() == Some(DataKind::MultilineText)
    }

    fn display_type(&self, _model: &FieldModel, _config: &ResolvedFieldConfiguration) -> FieldDisplayType {
        FieldDisplayType::MultiLineText
    }

    fn render(&self, model: &FieldModel, config: &ResolvedFieldConfiguration) -> FieldResult<FieldRenderRequest> {
        Ok(FieldRenderRequest::new(
            ControlKind::TextArea {
                rows: config.rows,
                cols: config.cols,
            },
            model.property(),
            model.id(),
        )
        .with_value(model.value().cloned())
        .with_attributes(config.attributes.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TypeDescriptor, TypeKind};

    #[test]
    fn honors_rows_and_cols_overrides() {
        let model = FieldModel::new("Notes", TypeDescriptor::scalar(TypeKind::Text))
            .with_data_kind(DataKind::MultilineText);
        let config = FieldConfiguration::new().rows(6).cols(40).freeze();
        let request = TextAreaHandler.render(&model, &config).unwrap();
        assert_eq!(
            request.control,
            ControlKind::TextArea {
                rows: Some(6),
                cols: Some(40)
            }
        );
    }
}
