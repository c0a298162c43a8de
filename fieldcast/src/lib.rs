//! Fieldcast core library.
//!
//! Decides, for an arbitrary model property, what kind of form control to
//! render and how its configuration is derived and merged. The caller
//! supplies a [`FieldModel`] (built from the host framework's model and
//! validation metadata) and an optional [`FieldConfiguration`]; the
//! [`DisplayTypeResolver`] walks an ordered chain of handlers, lets the
//! first match prepare the configuration, and produces a structured
//! [`FieldRenderRequest`] for an external template renderer to turn into
//! markup. The core itself emits no HTML and performs no I/O.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod humanize;
pub mod model;
pub mod render;
pub mod resolver;
pub mod value;

pub use config::{DisplayOverride, FieldConfiguration, HtmlFragment, ResolvedFieldConfiguration};
pub use errors::{FieldError, FieldResult};
pub use handlers::FieldHandler;
pub use model::{
    DataKind, EnumDescriptor, EnumMember, FieldModel, ListSource, ListSourceItems, NumericKind,
    NumericRange, TypeDescriptor, TypeKind,
};
pub use render::{ControlKind, FieldDisplayType, FieldRenderRequest, InputType, ListItem};
pub use resolver::{DisplayTypeResolver, Resolution};
pub use value::{EnumValue, FieldValue, is_selected};
