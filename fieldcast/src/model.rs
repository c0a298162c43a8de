use crate::render::ListItem;
use crate::value::FieldValue;

/// Semantic annotation attached to a property by the host's display metadata,
/// used to pick specialized rendering over the declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Password,
    MultilineText,
    File,
    Currency,
}

/// Canonical numeric classification. This is the single source of truth for
/// integral-vs-floating decisions and natural type bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    Decimal,
}

impl NumericKind {
    pub fn is_integral(self) -> bool {
        !self.is_floating()
    }

    pub fn is_floating(self) -> bool {
        matches!(self, NumericKind::F32 | NumericKind::F64 | NumericKind::Decimal)
    }

    /// Natural [min, max] bounds of the type, rendered as attribute values.
    /// Floating kinds have no useful bounds.
    pub fn natural_bounds(self) -> Option<(&'static str, &'static str)> {
        match self {
            NumericKind::I8 => Some(("-128", "127")),
            NumericKind::U8 => Some(("0", "255")),
            NumericKind::I16 => Some(("-32768", "32767")),
            NumericKind::U16 => Some(("0", "65535")),
            NumericKind::I32 => Some(("-2147483648", "2147483647")),
            NumericKind::U32 => Some(("0", "4294967295")),
            NumericKind::I64 => Some(("-9223372036854775808", "9223372036854775807")),
            NumericKind::U64 => Some(("0", "18446744073709551615")),
            NumericKind::F32 | NumericKind::F64 | NumericKind::Decimal => None,
        }
    }
}

/// One member of an enum type. `label` carries an explicit display annotation
/// from the host; absent, the variant name is humanized at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    pub variant: String,
    pub bits: u64,
    pub label: Option<String>,
}

impl EnumMember {
    pub fn new(variant: impl Into<String>, bits: u64) -> Self {
        Self {
            variant: variant.into(),
            bits,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The member as a field value, for selection and exclusion checks.
    pub fn value(&self) -> FieldValue {
        FieldValue::Enum(crate::value::EnumValue::new(self.variant.clone(), self.bits))
    }
}

/// Description of an enum type: its members and whether they are combinable
/// bit flags rather than mutually exclusive values.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDescriptor {
    pub name: String,
    pub flags: bool,
    pub members: Vec<EnumMember>,
}

impl EnumDescriptor {
    pub fn new(name: impl Into<String>, members: Vec<EnumMember>) -> Self {
        Self {
            name: name.into(),
            flags: false,
            members,
        }
    }

    pub fn flags(mut self) -> Self {
        self.flags = true;
        self
    }
}

/// Semantic kind of a property's element type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    Boolean,
    Numeric(NumericKind),
    DateTime,
    Text,
    Enum(EnumDescriptor),
    Other,
}

/// Static type of a property: its element kind plus nullability and
/// collection-ness. For collections, `kind` describes the element type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    pub kind: TypeKind,
    pub nullable: bool,
    pub collection: bool,
}

impl TypeDescriptor {
    pub fn scalar(kind: TypeKind) -> Self {
        Self {
            kind,
            nullable: false,
            collection: false,
        }
    }

    pub fn nullable(kind: TypeKind) -> Self {
        Self {
            kind,
            nullable: true,
            collection: false,
        }
    }

    pub fn collection_of(kind: TypeKind) -> Self {
        Self {
            kind,
            nullable: false,
            collection: true,
        }
    }
}

/// Numeric range from a range-validation annotation on the property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

/// Outcome of the host resolving a field's sibling list property. The host
/// performs the property access up front; the core only interprets the
/// result (and surfaces the two failure states as domain errors at render
/// time).
#[derive(Debug, Clone, PartialEq)]
pub enum ListSourceItems {
    Available(Vec<ListItem>),
    /// No model instance was supplied at all.
    ModelMissing,
    /// The model exists but the named property evaluated to null.
    PropertyNull,
}

/// Declares that a field's legal values are drawn from a sibling list
/// property on the model, with name/value accessors already applied per item.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSource {
    pub property: String,
    pub items: ListSourceItems,
}

impl ListSource {
    pub fn new(property: impl Into<String>, items: ListSourceItems) -> Self {
        Self {
            property: property.into(),
            items,
        }
    }
}

/// Immutable description of one bindable property being rendered.
///
/// Constructed fresh per field render from the host's model and validation
/// metadata, then discarded once the render completes.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldModel {
    property: String,
    type_descriptor: TypeDescriptor,
    value: Option<FieldValue>,
    is_required: bool,
    list_source: Option<ListSource>,
    data_kind: Option<DataKind>,
    range: Option<NumericRange>,
    edit_format_string: Option<String>,
    null_display_text: Option<String>,
}

impl FieldModel {
    pub fn new(property: impl Into<String>, type_descriptor: TypeDescriptor) -> Self {
        Self {
            property: property.into(),
            type_descriptor,
            value: None,
            is_required: false,
            list_source: None,
            data_kind: None,
            range: None,
            edit_format_string: None,
            null_display_text: None,
        }
    }

    pub fn with_value(mut self, value: FieldValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.is_required = required;
        self
    }

    pub fn with_list_source(mut self, source: ListSource) -> Self {
        self.list_source = Some(source);
        self
    }

    pub fn with_data_kind(mut self, kind: DataKind) -> Self {
        self.data_kind = Some(kind);
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some(NumericRange { min, max });
        self
    }

    pub fn with_edit_format(mut self, format: impl Into<String>) -> Self {
        self.edit_format_string = Some(format.into());
        self
    }

    pub fn with_null_display_text(mut self, text: impl Into<String>) -> Self {
        self.null_display_text = Some(text.into());
        self
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    /// Element id derived from the bind name: any character that is not
    /// alphanumeric becomes an underscore.
    pub fn id(&self) -> String {
        self.property
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect()
    }

    pub fn value(&self) -> Option<&FieldValue> {
        self.value.as_ref()
    }

    pub fn type_descriptor(&self) -> &TypeDescriptor {
        &self.type_descriptor
    }

    /// Element kind regardless of nullability/collection wrapping.
    pub fn kind(&self) -> &TypeKind {
        &self.type_descriptor.kind
    }

    pub fn is_required(&self) -> bool {
        self.is_required
    }

    pub fn is_nullable(&self) -> bool {
        self.type_descriptor.nullable
    }

    /// True when the field holds multiple values at once.
    pub fn is_multi_valued(&self) -> bool {
        self.type_descriptor.collection
    }

    pub fn list_source(&self) -> Option<&ListSource> {
        self.list_source.as_ref()
    }

    pub fn data_kind(&self) -> Option<DataKind> {
        self.data_kind
    }

    pub fn range(&self) -> Option<NumericRange> {
        self.range
    }

    pub fn edit_format_string(&self) -> Option<&str> {
        self.edit_format_string.as_deref()
    }

    pub fn null_display_text(&self) -> Option<&str> {
        self.null_display_text.as_deref()
    }

    pub fn enum_descriptor(&self) -> Option<&EnumDescriptor> {
        match self.kind() {
            TypeKind::Enum(descriptor) => Some(descriptor),
            _ => None,
        }
    }

    pub fn numeric_kind(&self) -> Option<NumericKind> {
        match self.kind() {
            TypeKind::Numeric(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn is_flags_enum(&self) -> bool {
        self.enum_descriptor().is_some_and(|d| d.flags)
    }
}
