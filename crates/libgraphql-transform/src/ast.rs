//! `'static`, `String`-backed aliases for the [`graphql_parser`] query AST.
//!
//! Every document handled by this crate is parsed once into these owned node
//! types and then mutated in place.

pub use graphql_parser::query::Number;
pub use graphql_parser::query::ParseError;
pub use graphql_parser::Pos;
use std::sync::Arc;
use thiserror::Error;

pub type Definition = graphql_parser::query::Definition<'static, String>;
pub type Directive = graphql_parser::query::Directive<'static, String>;
pub type Document = graphql_parser::query::Document<'static, String>;
pub type Field = graphql_parser::query::Field<'static, String>;
pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
pub type FragmentSpread = graphql_parser::query::FragmentSpread<'static, String>;
pub type InlineFragment = graphql_parser::query::InlineFragment<'static, String>;
pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
pub type Selection = graphql_parser::query::Selection<'static, String>;
pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
pub type Type = graphql_parser::query::Type<'static, String>;
pub type TypeCondition = graphql_parser::query::TypeCondition<'static, String>;
pub type Value = graphql_parser::query::Value<'static, String>;
pub type VariableDefinition = graphql_parser::query::VariableDefinition<'static, String>;

/// Parse query-language source text into an owned [`Document`].
pub fn parse(content: &str) -> Result<Document, ParseError> {
    graphql_parser::parse_query::<String>(content).map(|doc| doc.into_static())
}

/// Parse a single value literal (`10`, `"Oslo"`, `[A, B]`, `{lat: 1.0}`,
/// `$from`, ...).
///
/// The query-language grammar has no standalone value production, so the
/// literal is parsed as the sole argument of a throwaway field.
pub fn parse_value(literal: &str) -> Result<Value, ValueLiteralError> {
    let mut doc = parse(&format!("{{ f(v: {literal}) }}"))
        .map_err(|e| ValueLiteralError::ParseError(Arc::new(e)))?;
    let not_a_single_value =
        || ValueLiteralError::NotASingleValue(literal.to_string());

    if doc.definitions.len() != 1 {
        return Err(not_a_single_value());
    }
    match doc.definitions.pop() {
        Some(Definition::Operation(OperationDefinition::SelectionSet(mut sel_set)))
            if sel_set.items.len() == 1 => match sel_set.items.pop() {
                Some(Selection::Field(mut field)) if field.arguments.len() == 1 =>
                    field.arguments.pop()
                        .map(|(_, value)| value)
                        .ok_or_else(not_a_single_value),
                _ => Err(not_a_single_value()),
            },
        _ => Err(not_a_single_value()),
    }
}

#[derive(Clone, Debug, Error)]
pub enum ValueLiteralError {
    #[error("`{0}` is not a single value literal")]
    NotASingleValue(String),

    #[error("Error parsing value literal: {0}")]
    ParseError(Arc<ParseError>),
}

/// The top-level [`SelectionSet`] of an operation, whichever form it was
/// written in.
pub fn operation_selection_set(op: &OperationDefinition) -> &SelectionSet {
    match op {
        OperationDefinition::SelectionSet(sel_set) => sel_set,
        OperationDefinition::Query(query) => &query.selection_set,
        OperationDefinition::Mutation(mutation) => &mutation.selection_set,
        OperationDefinition::Subscription(sub) => &sub.selection_set,
    }
}

pub fn operation_selection_set_mut(op: &mut OperationDefinition) -> &mut SelectionSet {
    match op {
        OperationDefinition::SelectionSet(sel_set) => sel_set,
        OperationDefinition::Query(query) => &mut query.selection_set,
        OperationDefinition::Mutation(mutation) => &mut mutation.selection_set,
        OperationDefinition::Subscription(sub) => &mut sub.selection_set,
    }
}

/// The variable definitions of an operation. Shorthand (`{ ... }`)
/// operations have none.
pub fn operation_variable_definitions_mut(
    op: &mut OperationDefinition,
) -> Option<&mut Vec<VariableDefinition>> {
    match op {
        OperationDefinition::SelectionSet(_) => None,
        OperationDefinition::Query(query) => Some(&mut query.variable_definitions),
        OperationDefinition::Mutation(mutation) => Some(&mut mutation.variable_definitions),
        OperationDefinition::Subscription(sub) => Some(&mut sub.variable_definitions),
    }
}

/// A new leaf [`Field`] with no alias, arguments or directives.
pub fn new_field(name: impl Into<String>) -> Field {
    Field {
        position: Pos::default(),
        alias: None,
        name: name.into(),
        arguments: vec![],
        directives: vec![],
        selection_set: SelectionSet {
            span: (Pos::default(), Pos::default()),
            items: vec![],
        },
    }
}
