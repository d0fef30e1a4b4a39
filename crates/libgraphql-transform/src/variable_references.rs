//! Mark-and-sweep pruning of variables that the query no longer references.

use crate::ast;
use crate::value::JsonObject;
use std::collections::HashMap;
use std::collections::HashSet;

/// Every variable name referenced from the document's operations, including
/// references inside the named fragments those operations spread.
///
/// Fragment definitions that no operation reaches do not contribute, and a
/// spread of an undefined fragment contributes only the variables used by
/// its own directives.
pub fn collect_variable_references(document: &ast::Document) -> HashSet<String> {
    let mut collector = VariableReferenceCollector::new(document);
    for def in &document.definitions {
        if let ast::Definition::Operation(op) = def {
            collector.visit_operation(op);
        }
    }
    collector.var_refs
}

/// Drop every variable definition and every top-level `variables` entry whose
/// name is not referenced from the document's operations.
pub fn remove_unused_variables(document: &mut ast::Document, variables: &mut JsonObject) {
    let var_refs = collect_variable_references(document);

    for def in &mut document.definitions {
        if let ast::Definition::Operation(op) = def
            && let Some(var_defs) = ast::operation_variable_definitions_mut(op) {
            var_defs.retain(|var_def| {
                let referenced = var_refs.contains(&var_def.name);
                if !referenced {
                    log::debug!("Removing unused variable definition `${}`.", var_def.name);
                }
                referenced
            });
        }
    }

    variables.retain(|var_name, _| {
        let referenced = var_refs.contains(var_name);
        if !referenced {
            log::debug!("Removing unused variable value `{var_name}`.");
        }
        referenced
    });
}

struct VariableReferenceCollector<'doc> {
    fragments: HashMap<&'doc str, &'doc ast::FragmentDefinition>,
    var_refs: HashSet<String>,
    visited_fragments: HashSet<&'doc str>,
}

impl<'doc> VariableReferenceCollector<'doc> {
    fn new(document: &'doc ast::Document) -> Self {
        let mut fragments = HashMap::new();
        for def in &document.definitions {
            if let ast::Definition::Fragment(frag) = def {
                fragments.entry(frag.name.as_str()).or_insert(frag);
            }
        }
        Self {
            fragments,
            var_refs: HashSet::new(),
            visited_fragments: HashSet::new(),
        }
    }

    fn visit_operation(&mut self, op: &'doc ast::OperationDefinition) {
        let (var_defs, directives, sel_set): (
            &'doc [ast::VariableDefinition],
            &'doc [ast::Directive],
            &'doc ast::SelectionSet,
        ) = match op {
            ast::OperationDefinition::SelectionSet(sel_set) => (&[], &[], sel_set),
            ast::OperationDefinition::Query(query) => (
                query.variable_definitions.as_slice(),
                query.directives.as_slice(),
                &query.selection_set,
            ),
            ast::OperationDefinition::Mutation(mutation) => (
                mutation.variable_definitions.as_slice(),
                mutation.directives.as_slice(),
                &mutation.selection_set,
            ),
            ast::OperationDefinition::Subscription(sub) => (
                sub.variable_definitions.as_slice(),
                sub.directives.as_slice(),
                &sub.selection_set,
            ),
        };
        for var_def in var_defs {
            if let Some(default_value) = &var_def.default_value {
                self.visit_value(default_value);
            }
        }
        self.visit_directives(directives);
        self.visit_selection_set(sel_set);
    }

    fn visit_directives(&mut self, directives: &'doc [ast::Directive]) {
        for directive in directives {
            self.visit_arguments(&directive.arguments);
        }
    }

    fn visit_arguments(&mut self, arguments: &'doc [(String, ast::Value)]) {
        for (_, value) in arguments {
            self.visit_value(value);
        }
    }

    fn visit_selection_set(&mut self, sel_set: &'doc ast::SelectionSet) {
        for selection in &sel_set.items {
            match selection {
                ast::Selection::Field(field) => {
                    self.visit_arguments(&field.arguments);
                    self.visit_directives(&field.directives);
                    self.visit_selection_set(&field.selection_set);
                },

                ast::Selection::FragmentSpread(spread) => {
                    let fragment_name = spread.fragment_name.as_str();
                    // Unresolved spreads contribute nothing, directives included.
                    let Some(frag) = self.fragments.get(fragment_name).copied() else {
                        continue;
                    };
                    self.visit_directives(&spread.directives);
                    if self.visited_fragments.insert(fragment_name) {
                        self.visit_directives(&frag.directives);
                        self.visit_selection_set(&frag.selection_set);
                    }
                },

                ast::Selection::InlineFragment(inline_frag) => {
                    self.visit_directives(&inline_frag.directives);
                    self.visit_selection_set(&inline_frag.selection_set);
                },
            }
        }
    }

    fn visit_value(&mut self, value: &'doc ast::Value) {
        match value {
            ast::Value::Variable(var_name) => {
                self.var_refs.insert(var_name.to_owned());
            },

            ast::Value::List(items) =>
                items.iter().for_each(|item| self.visit_value(item)),

            ast::Value::Object(fields) =>
                fields.values().for_each(|field_value| self.visit_value(field_value)),

            ast::Value::Boolean(_)
            | ast::Value::Enum(_)
            | ast::Value::Float(_)
            | ast::Value::Int(_)
            | ast::Value::Null
            | ast::Value::String(_) => (),
        }
    }
}
