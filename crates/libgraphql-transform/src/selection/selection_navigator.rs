use crate::ast;
use crate::selection::FieldPath;
use crate::selection::SelectionSetPath;
use std::collections::HashMap;
use std::collections::HashSet;

/// Read-only field lookup over a document.
///
/// Named fragment spreads are expanded transparently by looking the fragment
/// up by name; inline fragments are not traversed. The fragment lookup table
/// is built once, when the navigator is created.
pub struct SelectionNavigator<'doc> {
    document: &'doc ast::Document,
    fragments: HashMap<&'doc str, usize>,
}

impl<'doc> SelectionNavigator<'doc> {
    pub fn new(document: &'doc ast::Document) -> Self {
        let mut fragments = HashMap::new();
        for (def_idx, def) in document.definitions.iter().enumerate() {
            if let ast::Definition::Fragment(frag) = def {
                // The first definition of a name wins.
                fragments.entry(frag.name.as_str()).or_insert(def_idx);
            }
        }
        Self {
            document,
            fragments,
        }
    }

    /// True if `operation_field_name` is selected at the top level of some
    /// operation and each segment of `path` is selected beneath the previous
    /// one.
    pub fn contains_field(&self, operation_field_name: &str, path: &[&str]) -> bool {
        self.find_field_path(operation_field_name, path).is_some()
    }

    pub fn field(&self, field_path: &FieldPath) -> Option<&'doc ast::Field> {
        field_path.resolve(self.document)
    }

    /// Find the first field named `field_name` directly within the selection
    /// set at `within`, or within a named fragment spread there.
    pub fn find_field(
        &self,
        within: &SelectionSetPath,
        field_name: &str,
    ) -> Option<FieldPath> {
        let mut visited_fragments = HashSet::new();
        self.find_field_impl(within, field_name, &mut visited_fragments)
    }

    fn find_field_impl(
        &self,
        within: &SelectionSetPath,
        field_name: &str,
        visited_fragments: &mut HashSet<usize>,
    ) -> Option<FieldPath> {
        let sel_set = within.resolve(self.document)?;
        for (selection_idx, selection) in sel_set.items.iter().enumerate() {
            match selection {
                ast::Selection::Field(field) if field.name == field_name =>
                    return Some(FieldPath::new(within.clone(), selection_idx)),

                ast::Selection::FragmentSpread(spread) => {
                    if let Some(&frag_idx) = self.fragments.get(spread.fragment_name.as_str())
                        && visited_fragments.insert(frag_idx)
                        && let Some(found) = self.find_field_impl(
                            &SelectionSetPath::definition_root(frag_idx),
                            field_name,
                            visited_fragments,
                        ) {
                        return Some(found);
                    }
                },

                ast::Selection::Field(_) | ast::Selection::InlineFragment(_) => (),
            }
        }
        None
    }

    /// Find `path` beneath the top-level field `operation_field_name`.
    pub fn find_field_path(
        &self,
        operation_field_name: &str,
        path: &[&str],
    ) -> Option<FieldPath> {
        let mut field_path = self.find_operation_field(operation_field_name)?;
        for field_name in path {
            field_path = self.find_field(&field_path.selection_set_path(), field_name)?;
        }
        Some(field_path)
    }

    /// Find the first top-level field named `field_name` across every
    /// operation, in document order.
    ///
    /// This matches the *field* name; the name and kind of the operation
    /// itself are irrelevant.
    pub fn find_operation_field(&self, field_name: &str) -> Option<FieldPath> {
        self.document.definitions.iter()
            .enumerate()
            .filter(|(_, def)| matches!(def, ast::Definition::Operation(_)))
            .find_map(|(def_idx, _)| self.find_field(
                &SelectionSetPath::definition_root(def_idx),
                field_name,
            ))
    }

    pub fn fragment_definition(
        &self,
        fragment_name: &str,
    ) -> Option<&'doc ast::FragmentDefinition> {
        let def_idx = self.fragments.get(fragment_name)?;
        match self.document.definitions.get(*def_idx)? {
            ast::Definition::Fragment(frag) => Some(frag),
            ast::Definition::Operation(_) => None,
        }
    }
}
