use anyhow::Result;
use std::{collections::HashMap, fmt, sync::Arc};
use thiserror::Error;

use crate::{
    cli::handlers::{
        Handler, command::CommandHandler, core_actions::CoreHandler, help::HelpHandler,
    },
    constants::KNOWN_CATEGORIES,
    core::context::AppContext,
    models::Invocation,
};

// --- Handler Binding Table ---

/// Binds a category to the handler that serves it and the function that builds it.
struct HandlerBinding {
    category: &'static str,
    handler: &'static str,
    build: fn(&Arc<AppContext>) -> Result<Box<dyn Handler>>,
}

/// The single source of truth for which handler serves which category.
static HANDLER_BINDINGS: &[HandlerBinding] = &[
    HandlerBinding {
        category: "core",
        handler: "CoreHandler",
        build: CoreHandler::build,
    },
    HandlerBinding {
        category: "help",
        handler: "HelpHandler",
        build: HelpHandler::build,
    },
    HandlerBinding {
        category: "apache",
        handler: "CommandHandler",
        build: |context| CommandHandler::build("apache", context),
    },
    HandlerBinding {
        category: "mysql",
        handler: "CommandHandler",
        build: |context| CommandHandler::build("mysql", context),
    },
    HandlerBinding {
        category: "php",
        handler: "CommandHandler",
        build: |context| CommandHandler::build("php", context),
    },
    HandlerBinding {
        category: "utils",
        handler: "CommandHandler",
        build: |context| CommandHandler::build("utils", context),
    },
    HandlerBinding {
        category: "vhosts",
        handler: "CommandHandler",
        build: |context| CommandHandler::build("vhosts", context),
    },
    HandlerBinding {
        category: "laravel",
        handler: "CommandHandler",
        build: |context| CommandHandler::build("laravel", context),
    },
];

/// Why a validated invocation produced no handler output.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The category is not one the dispatcher binds.
    #[error("Unknown category '{0}'.")]
    UnknownCategory(String),
    /// No factory is registered for the category.
    #[error("No handler found for category '{0}'.")]
    HandlerNotFound(String),
    /// The handler factory failed.
    #[error("Error creating handler '{handler}': {source}")]
    Construction {
        handler: &'static str,
        #[source]
        source: anyhow::Error,
    },
    /// The handler implements neither `execute` nor `help`.
    #[error("No valid method found for this action.")]
    NoValidMethod,
    /// The handler ran and failed.
    #[error("{command}: {source:#}")]
    Execution {
        command: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Builds a handler, closing over whatever shared state it needs.
pub type HandlerFactory = Box<dyn Fn() -> Result<Box<dyn Handler>>>;

/// Category -> (handler name, factory). Built once at startup, read-only afterwards.
#[derive(Default)]
pub struct HandlerRegistry {
    factories: HashMap<String, (&'static str, HandlerFactory)>,
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut categories: Vec<_> = self.factories.keys().collect();
        categories.sort();
        f.debug_struct("HandlerRegistry")
            .field("categories", &categories)
            .finish()
    }
}

impl HandlerRegistry {
    /// The registry with every built-in binding, each factory sharing `context`.
    pub fn with_defaults(context: &Arc<AppContext>) -> Self {
        let mut registry = Self::default();
        for binding in HANDLER_BINDINGS {
            let context = Arc::clone(context);
            let build = binding.build;
            registry.register(binding.category, binding.handler, move || build(&context));
        }
        registry
    }

    /// Binds `category` to a factory, replacing any earlier binding.
    pub fn register(
        &mut self,
        category: &str,
        handler: &'static str,
        factory: impl Fn() -> Result<Box<dyn Handler>> + 'static,
    ) {
        self.factories
            .insert(category.to_string(), (handler, Box::new(factory)));
    }

    fn get(&self, category: &str) -> Option<&(&'static str, HandlerFactory)> {
        self.factories.get(category)
    }
}

/// Hands a validated invocation to the handler bound to its category.
#[derive(Debug)]
pub struct Dispatcher {
    registry: HandlerRegistry,
}

impl Dispatcher {
    /// A dispatcher over `registry`.
    pub fn new(registry: HandlerRegistry) -> Self {
        Self { registry }
    }

    /// Builds the bound handler and returns its output.
    pub fn dispatch(&self, invocation: &Invocation) -> Result<String, DispatchError> {
        let category = invocation.category.as_str();
        if !KNOWN_CATEGORIES.contains(&category) {
            return Err(DispatchError::UnknownCategory(category.to_string()));
        }

        let (handler_name, factory) = self
            .registry
            .get(category)
            .ok_or_else(|| DispatchError::HandlerNotFound(category.to_string()))?;
        log::debug!("Dispatching '{}' to {}", invocation.command_line(), handler_name);

        let handler = factory().map_err(|source| DispatchError::Construction {
            handler: *handler_name,
            source,
        })?;

        if let Some(result) = handler.execute(&invocation.action, &invocation.args) {
            return result.map_err(|source| DispatchError::Execution {
                command: invocation.command_line(),
                source,
            });
        }
        handler.help().ok_or(DispatchError::NoValidMethod)
    }
}
