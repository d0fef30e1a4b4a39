use crate::ast;
use crate::json::JsonMessage;
use crate::json::JsonMessageError;
use crate::path_resolver;
use crate::printer::GraphQLPrinter;
use crate::printer::PrinterOptions;
use crate::selection;
use crate::selection::SelectionNavigator;
use crate::value::AbsentValue;
use crate::value::BoxedValue;
use crate::value::JsonObject;
use crate::value::VariableValue;
use crate::variable_references;
use crate::GraphQLRequestError;
use std::str::FromStr;

type Result<T> = std::result::Result<T, GraphQLRequestError>;

const QUERY_KEY: &str = "query";
const VARIABLES_KEY: &str = "variables";

/// A single JSON request envelope together with the parsed form of its
/// `query` text.
///
/// All reads and mutations go through the parsed document and the
/// envelope's `variables` object. The two are written back together (after
/// pruning variables the query no longer references) by
/// [`GraphQLRequest::write_value_as_string`].
#[derive(Clone, Debug)]
pub struct GraphQLRequest {
    document: Option<ast::Document>,
    element: JsonObject,
}

impl GraphQLRequest {
    /// Wrap an envelope object. A string-valued `query` entry is parsed; any
    /// other (or no) `query` entry leaves the request without a document.
    pub fn from_object(element: JsonObject) -> Result<Self> {
        let document = match element.get(QUERY_KEY) {
            Some(serde_json::Value::String(query)) => Some(ast::parse(query)?),
            _ => None,
        };
        Ok(Self {
            document,
            element,
        })
    }

    /// An independent copy of both the query document and the envelope.
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    pub fn document(&self) -> Option<&ast::Document> {
        self.document.as_ref()
    }

    pub fn element(&self) -> &JsonObject {
        &self.element
    }

    pub fn is_query(&self) -> bool {
        self.document.is_some()
    }

    pub fn variables(&self) -> Option<&JsonObject> {
        self.element.get(VARIABLES_KEY).and_then(serde_json::Value::as_object)
    }

    /// Resolve `argument_name` on the first top-level field named
    /// `field_name` (in any operation) that carries it, then walk `path`
    /// into the argument's value.
    ///
    /// Variable references are followed into the envelope's `variables`
    /// object. Fragment spreads at the top level are not expanded.
    pub fn get_argument_value(
        &mut self,
        field_name: &str,
        argument_name: &str,
        path: &[&str],
    ) -> BoxedValue<'_> {
        let Self { document, element } = self;
        let variables = element.get_mut(VARIABLES_KEY)
            .and_then(serde_json::Value::as_object_mut);
        let argument = document.as_mut().and_then(|document| {
            find_argument_mut(document, field_name, argument_name)
        });
        match argument {
            Some(value) => path_resolver::resolve_argument_value(value, path, variables),
            None => Box::new(AbsentValue),
        }
    }

    /// Walk `path` through the envelope's `variables` object; the first
    /// segment names the variable.
    pub fn get_variable_value(&mut self, path: &[&str]) -> BoxedValue<'_> {
        let mut current = self.element.get_mut(VARIABLES_KEY)
            .filter(|variables| variables.is_object());
        for segment in path {
            current = current
                .and_then(serde_json::Value::as_object_mut)
                .and_then(|fields| fields.get_mut(*segment));
        }
        Box::new(VariableValue::new(current))
    }

    /// Replace `argument_name` on every top-level field named `field_name`
    /// with `value`, appending it after the field's remaining arguments.
    pub fn set_argument_value(
        &mut self,
        field_name: &str,
        argument_name: &str,
        value: ast::Value,
    ) -> Result<()> {
        let mut updated = 0;
        for field in self.top_level_fields_mut(field_name) {
            field.arguments.retain(|(name, _)| name != argument_name);
            field.arguments.push((argument_name.to_string(), value.clone()));
            updated += 1;
        }

        if updated == 0 {
            return Err(GraphQLRequestError::UnknownField {
                field_name: field_name.to_string(),
                argument_name: argument_name.to_string(),
            });
        }
        log::debug!("Set `{field_name}({argument_name}:)` on {updated} field(s).");
        Ok(())
    }

    /// See [`selection::add_selection_field`].
    pub fn add_selection_field(
        &mut self,
        operation_field_name: &str,
        path: &[&str],
    ) -> Vec<String> {
        match &mut self.document {
            Some(document) =>
                selection::add_selection_field(document, operation_field_name, path),
            None => vec![],
        }
    }

    pub fn contains_field(&self, operation_field_name: &str, path: &[&str]) -> bool {
        self.document.as_ref().is_some_and(|document| {
            SelectionNavigator::new(document).contains_field(operation_field_name, path)
        })
    }

    /// Drop variable definitions and `variables` entries that nothing in
    /// the query refers to anymore.
    pub fn remove_unused_variables(&mut self) {
        let variables = self.element.get_mut(VARIABLES_KEY)
            .and_then(serde_json::Value::as_object_mut);
        if let (Some(document), Some(variables)) = (&mut self.document, variables) {
            variable_references::remove_unused_variables(document, variables);
        }
    }

    /// Prune unused variables, print the document back into `query` and
    /// serialize the envelope.
    pub fn write_value_as_string(&mut self, options: &PrinterOptions) -> Result<String> {
        self.remove_unused_variables();
        if let Some(document) = &self.document {
            let query = GraphQLPrinter::new(*options).print(document)?;
            self.element.insert(QUERY_KEY.to_string(), serde_json::Value::String(query));
        }
        serde_json::to_string(&self.element)
            .map_err(|e| JsonMessageError::SerializeError(e.into()).into())
    }

    /// Parse query-language value literal text (`10`, `"Oslo"`, `[BUS]`,
    /// `{lat: 59.9}`, `$from`, ...) for use with
    /// [`GraphQLRequest::set_argument_value`].
    pub fn parse_value_literal(literal: &str) -> Result<ast::Value> {
        Ok(ast::parse_value(literal)?)
    }

    fn top_level_fields_mut(
        &mut self,
        field_name: &str,
    ) -> impl Iterator<Item = &mut ast::Field> {
        self.document.iter_mut()
            .flat_map(move |document| top_level_fields(document, field_name))
    }
}

impl FromStr for GraphQLRequest {
    type Err = GraphQLRequestError;

    fn from_str(payload: &str) -> Result<Self> {
        match payload.parse::<JsonMessage>()? {
            JsonMessage::Single(element) => Self::from_object(element),
            JsonMessage::Batch(_) =>
                Err(JsonMessageError::NotAnObject("an array").into()),
        }
    }
}

/// Fields named `field_name` in the top-level selection set of each
/// operation.
fn top_level_fields<'d>(
    document: &'d mut ast::Document,
    field_name: &str,
) -> impl Iterator<Item = &'d mut ast::Field> {
    document.definitions.iter_mut()
        .filter_map(|def| match def {
            ast::Definition::Operation(op) => Some(ast::operation_selection_set_mut(op)),
            ast::Definition::Fragment(_) => None,
        })
        .flat_map(|sel_set| sel_set.items.iter_mut())
        .filter_map(move |selection| match selection {
            ast::Selection::Field(field) if field.name == field_name => Some(field),
            _ => None,
        })
}

fn find_argument_mut<'d>(
    document: &'d mut ast::Document,
    field_name: &str,
    argument_name: &str,
) -> Option<&'d mut ast::Value> {
    top_level_fields(document, field_name).find_map(|field| {
        field.arguments.iter_mut()
            .find(|(name, _)| name == argument_name)
            .map(|(_, value)| value)
    })
}
