//! # Validator
//!
//! Routes an [`Invocation`] to the validation strategy registered for its
//! category. Categories absent from the grammar are rejected before any
//! strategy runs; categories present in the grammar without dedicated rules use
//! the [`GenericStrategy`].

use crate::{
    core::{
        grammar::GrammarStore,
        outcome::ValidationOutcome,
        strategies::{
            ValidationStrategy, core_actions::CoreStrategy, generic::GenericStrategy,
            help::HelpStrategy, mysql::MysqlStrategy, php::PhpStrategy, utils::UtilsStrategy,
            vhosts::VhostsStrategy,
        },
    },
    models::Invocation,
};
use std::{collections::HashMap, sync::Arc};

/// Per-category strategy registry over one grammar.
#[derive(Debug)]
pub struct Validator {
    grammar: Arc<GrammarStore>,
    strategies: HashMap<&'static str, Box<dyn ValidationStrategy>>,
    fallback: GenericStrategy,
}

impl Validator {
    /// A validator with every built-in strategy registered.
    pub fn new(grammar: Arc<GrammarStore>) -> Self {
        let mut strategies: HashMap<&'static str, Box<dyn ValidationStrategy>> = HashMap::new();
        strategies.insert("core", Box::new(CoreStrategy));
        strategies.insert("help", Box::new(HelpStrategy));
        strategies.insert("php", Box::new(PhpStrategy));
        strategies.insert("mysql", Box::new(MysqlStrategy));
        strategies.insert("utils", Box::new(UtilsStrategy::from_grammar(&grammar)));
        strategies.insert("vhosts", Box::new(VhostsStrategy));

        Self {
            grammar,
            strategies,
            fallback: GenericStrategy,
        }
    }

    /// The strategy that handles `category`.
    pub fn strategy_for(&self, category: &str) -> &dyn ValidationStrategy {
        self.strategies
            .get(category)
            .map(Box::as_ref)
            .unwrap_or(&self.fallback)
    }

    /// Validates `invocation`; never executes anything.
    pub fn validate(&self, invocation: &Invocation) -> ValidationOutcome {
        if !self.grammar.has_category(&invocation.category) {
            return ValidationOutcome::unknown_category(invocation.category.as_str());
        }
        let strategy = self.strategy_for(&invocation.category);
        log::debug!(
            "Validating '{}' with the {} strategy",
            invocation.command_line(),
            strategy.name()
        );
        strategy.validate(invocation, &self.grammar)
    }
}
