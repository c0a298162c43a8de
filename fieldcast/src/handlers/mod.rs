//! The ordered rule set that classifies a field and prepares its
//! configuration. Each handler recognizes one category of field; the
//! resolver consults them in a fixed priority order and the first match
//! wins.

mod boolean;
mod date_time;
mod default;
mod enum_list;
mod file;
mod list;
mod number;
mod password;
mod shared;
mod text_area;

pub use boolean::BooleanHandler;
pub use date_time::DateTimeHandler;
pub use default::DefaultHandler;
pub use enum_list::EnumListHandler;
pub use file::FileHandler;
pub use list::ListHandler;
pub use number::NumberHandler;
pub use password::PasswordHandler;
pub use text_area::TextAreaHandler;

pub(crate) use shared::{ListStyle, make_empty_item};

use crate::config::{FieldConfiguration, ResolvedFieldConfiguration};
use crate::errors::FieldResult;
use crate::model::FieldModel;
use crate::render::{FieldDisplayType, FieldRenderRequest};

/// A single rule in the display-type resolution chain.
///
/// `can_handle` must be a pure predicate over the pristine configuration:
/// it is evaluated before `prepare` runs and must not depend on anything
/// `prepare` writes.
pub trait FieldHandler {
    /// Stable identifier, used for logging and order assertions.
    fn name(&self) -> &'static str;

    /// Whether this handler recognizes the field. Side-effect free.
    fn can_handle(&self, model: &FieldModel, config: &FieldConfiguration) -> bool;

    /// Applies handler-specific configuration defaults. Called once, on the
    /// winning handler only, before the configuration is frozen.
    fn prepare(&self, model: &FieldModel, config: &mut FieldConfiguration) {
        let _ = (model, config);
    }

    /// The resolved display type for the field.
    fn display_type(&self, model: &FieldModel, config: &ResolvedFieldConfiguration) -> FieldDisplayType;

    /// Produces the structured render request handed to the template
    /// renderer. The only fallible step: list-backed fields surface the two
    /// domain errors here.
    fn render(&self, model: &FieldModel, config: &ResolvedFieldConfiguration) -> FieldResult<FieldRenderRequest>;
}
