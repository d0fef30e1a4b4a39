use crate::ast;

/// Addresses one [`ast::SelectionSet`] within a document: the definition that
/// owns it, followed by the index of each field selection leading down to it.
///
/// Paths are plain indices rather than references so that a location found
/// during a read-only walk can be reopened mutably afterwards.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SelectionSetPath {
    definition_idx: usize,
    field_indices: Vec<usize>,
}
impl SelectionSetPath {
    /// The top-level selection set of the definition at `definition_idx`.
    pub fn definition_root(definition_idx: usize) -> Self {
        Self {
            definition_idx,
            field_indices: vec![],
        }
    }

    pub fn definition_idx(&self) -> usize {
        self.definition_idx
    }

    pub fn resolve<'d>(
        &self,
        document: &'d ast::Document,
    ) -> Option<&'d ast::SelectionSet> {
        let mut sel_set = definition_selection_set(
            document.definitions.get(self.definition_idx)?,
        );
        for field_idx in &self.field_indices {
            match sel_set.items.get(*field_idx)? {
                ast::Selection::Field(field) => sel_set = &field.selection_set,
                _ => return None,
            }
        }
        Some(sel_set)
    }

    pub fn resolve_mut<'d>(
        &self,
        document: &'d mut ast::Document,
    ) -> Option<&'d mut ast::SelectionSet> {
        let mut sel_set = definition_selection_set_mut(
            document.definitions.get_mut(self.definition_idx)?,
        );
        for field_idx in &self.field_indices {
            match sel_set.items.get_mut(*field_idx)? {
                ast::Selection::Field(field) => sel_set = &mut field.selection_set,
                _ => return None,
            }
        }
        Some(sel_set)
    }
}

/// Addresses one field selection within a document.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FieldPath {
    parent: SelectionSetPath,
    selection_idx: usize,
}
impl FieldPath {
    pub fn new(parent: SelectionSetPath, selection_idx: usize) -> Self {
        Self {
            parent,
            selection_idx,
        }
    }

    pub fn parent(&self) -> &SelectionSetPath {
        &self.parent
    }

    /// The path of this field's own (nested) selection set.
    pub fn selection_set_path(&self) -> SelectionSetPath {
        let mut field_indices = self.parent.field_indices.clone();
        field_indices.push(self.selection_idx);
        SelectionSetPath {
            definition_idx: self.parent.definition_idx,
            field_indices,
        }
    }

    pub fn resolve<'d>(&self, document: &'d ast::Document) -> Option<&'d ast::Field> {
        match self.parent.resolve(document)?.items.get(self.selection_idx)? {
            ast::Selection::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn resolve_mut<'d>(
        &self,
        document: &'d mut ast::Document,
    ) -> Option<&'d mut ast::Field> {
        match self.parent.resolve_mut(document)?.items.get_mut(self.selection_idx)? {
            ast::Selection::Field(field) => Some(field),
            _ => None,
        }
    }
}

fn definition_selection_set(def: &ast::Definition) -> &ast::SelectionSet {
    match def {
        ast::Definition::Operation(op) => ast::operation_selection_set(op),
        ast::Definition::Fragment(frag) => &frag.selection_set,
    }
}

fn definition_selection_set_mut(def: &mut ast::Definition) -> &mut ast::SelectionSet {
    match def {
        ast::Definition::Operation(op) => ast::operation_selection_set_mut(op),
        ast::Definition::Fragment(frag) => &mut frag.selection_set,
    }
}
