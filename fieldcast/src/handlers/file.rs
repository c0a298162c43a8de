use super::FieldHandler;
use crate::config::{FieldConfiguration, ResolvedFieldConfiguration};
use crate::errors::FieldResult;
use crate::model::{DataKind, FieldModel};
use crate::render::{ControlKind, FieldDisplayType, FieldRenderRequest};

/// Renders file-upload-tagged fields as a file input.
pub struct FileHandler;

impl FieldHandler for FileHandler {
    fn name(&self) -> &'static str {
        "file"
    }

    fn can_handle(&self, model: &FieldModel, _config: &FieldConfiguration) -> bool {
        model.data_kind() == Some(DataKind::File)
    }

    fn display_type(&self, _model: &FieldModel, _config: &ResolvedFieldConfiguration) -> FieldDisplayType {
        FieldDisplayType::FileUpload
    }

    fn render(&self, model: &FieldModel, config: &ResolvedFieldConfiguration) -> FieldResult<FieldRenderRequest> {
        // File inputs carry no value attribute.
        Ok(
            FieldRenderRequest::new(ControlKind::FileInput, model.property(), model.id())
                .with_attributes(config.attributes.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TypeDescriptor, TypeKind};

    #[test]
    fn produces_a_file_input() {
        let model =
            FieldModel::new("Upload", TypeDescriptor::scalar(TypeKind::Other)).with_data_kind(DataKind::File);
        let config = FieldConfiguration::new().freeze();
        let request = FileHandler.render(&model, &config).unwrap();
        assert_eq!(request.control, ControlKind::FileInput);
        assert_eq!(
            FileHandler.display_type(&model, &config),
            FieldDisplayType::FileUpload
        );
    }
}
