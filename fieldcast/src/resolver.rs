use std::sync::OnceLock;

use crate::config::{FieldConfiguration, ResolvedFieldConfiguration};
use crate::errors::FieldResult;
use crate::handlers::{
    BooleanHandler, DateTimeHandler, DefaultHandler, EnumListHandler, FieldHandler, FileHandler,
    ListHandler, NumberHandler, PasswordHandler, TextAreaHandler,
};
use crate::model::FieldModel;
use crate::render::{FieldDisplayType, FieldRenderRequest};

/// The outcome of resolving one field: what to draw, the structured request
/// for the template renderer, and the frozen configuration carrying the
/// ambient label/hint/prepended/appended HTML.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub display_type: FieldDisplayType,
    pub request: FieldRenderRequest,
    pub config: ResolvedFieldConfiguration,
}

/// Ordered chain of field handlers; the first whose predicate matches wins.
///
/// The order is a behavioral invariant: several predicates are not mutually
/// exclusive (an enum field with a password annotation must still render as
/// an enum list), so it is held as data here rather than inferred from
/// anything else. The chain is stateless and safe to share across threads.
pub struct DisplayTypeResolver {
    handlers: Vec<Box<dyn FieldHandler + Send + Sync>>,
}

impl Default for DisplayTypeResolver {
    fn default() -> Self {
        Self {
            handlers: vec![
                Box::new(EnumListHandler),
                Box::new(PasswordHandler),
                Box::new(TextAreaHandler),
                Box::new(BooleanHandler),
                Box::new(FileHandler),
                Box::new(ListHandler),
                Box::new(DateTimeHandler),
                Box::new(NumberHandler),
                Box::new(DefaultHandler),
            ],
        }
    }
}

impl DisplayTypeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide shared instance.
    pub fn shared() -> &'static DisplayTypeResolver {
        static SHARED: OnceLock<DisplayTypeResolver> = OnceLock::new();
        SHARED.get_or_init(DisplayTypeResolver::default)
    }

    /// Handler names in dispatch order, for order assertions.
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Selects the winning handler against the pristine configuration. Total:
    /// the chain ends with an unconditional fallback.
    fn select(&self, model: &FieldModel, config: &FieldConfiguration) -> &(dyn FieldHandler + Send + Sync) {
        self.handlers
            .iter()
            .find(|handler| handler.can_handle(model, config))
            .unwrap_or_else(|| {
                self.handlers
                    .last()
                    .expect("resolver always holds the fallback handler")
            })
            .as_ref()
    }

    /// Resolves the field's display type and render request.
    ///
    /// Handler selection runs exactly once, against the configuration as
    /// supplied; the winner's prepare step then mutates it, the result is
    /// frozen, and the display type and render request are derived from the
    /// frozen snapshot. Repeated resolution of the same unmutated inputs is
    /// therefore deterministic.
    pub fn resolve(&self, model: &FieldModel, config: FieldConfiguration) -> FieldResult<Resolution> {
        let mut config = config;
        let handler = self.select(model, &config);
        log::debug!(
            "field '{}' resolved by the '{}' handler",
            model.property(),
            handler.name()
        );
        handler.prepare(model, &mut config);
        let config = config.freeze();
        let display_type = handler.display_type(model, &config);
        let request = handler.render(model, &config)?;
        Ok(Resolution {
            display_type,
            request,
            config,
        })
    }
}
