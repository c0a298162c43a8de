use super::FieldHandler;
use crate::config::{FieldConfiguration, ResolvedFieldConfiguration};
use crate::errors::FieldResult;
use crate::model::{FieldModel, TypeKind};
use crate::render::{ControlKind, FieldDisplayType, FieldRenderRequest, InputType};
use crate::value::DEFAULT_DATETIME_FORMAT;

/// Renders date/time fields as single-line text with a format pattern
/// derived from the property's edit format string.
pub struct DateTimeHandler;

impl DateTimeHandler {
    /// Resolves the effective strftime pattern. The general specifier (`g`,
    /// including the `{0:g}` annotation form) and an absent format both fall
    /// back to the short date+time pattern.
    fn resolve_format(edit_format: Option<&str>) -> String {
        let Some(raw) = edit_format else {
            return DEFAULT_DATETIME_FORMAT.to_string();
        };
        let pattern = raw
            .strip_prefix("{0:")
            .and_then(|rest| rest.strip_suffix('}'))
            .unwrap_or(raw);
        if pattern == "g" {
            DEFAULT_DATETIME_FORMAT.to_string()
        } else {
            pattern.to_string()
        }
    }
}

impl FieldHandler for DateTimeHandler {
    fn name(&self) -> &'static str {
        "date_time"
    }

    fn can_handle(&self, model: &FieldModel, _config: &FieldConfiguration) -> bool {
        matches!(model.kind(), TypeKind::DateTime) && !model.is_multi_valued()
    }

    fn prepare(&self, model: &FieldModel, config: &mut FieldConfiguration) {
        let format = Self::resolve_format(model.edit_format_string());
        config.set_attr_if_absent("data-format", format.clone());
        config.set_format_string_if_absent(format);
    }

    fn display_type(&self, _model: &FieldModel, _config: &ResolvedFieldConfiguration) -> FieldDisplayType {
        FieldDisplayType::SingleLineText
    }

    fn render(&self, model: &FieldModel, config: &ResolvedFieldConfiguration) -> FieldResult<FieldRenderRequest> {
        let value = model.value().cloned();
        let mut request = FieldRenderRequest::new(
            ControlKind::Input {
                input_type: InputType::Text,
            },
            model.property(),
            model.id(),
        )
        .with_attributes(config.attributes.clone());
        if let Some(value) = value {
            let text = value.display_text(config.format_string.as_deref());
            request = request.with_value(Some(crate::value::FieldValue::Text(text)));
        }
        Ok(request)
    }
}
