use crate::ast;
use crate::selection::SelectionNavigator;

/// Make sure `path` is selected beneath the top-level field
/// `operation_field_name`, creating every missing field along the way.
///
/// Lookup stops at the first segment that is not already selected; that
/// segment and every segment after it are created as new, argument-free
/// fields nested in one another and appended to the last selection set that
/// was found.
///
/// Returns the prefix of `path` up to and including the first created
/// segment, or an empty `Vec` if nothing was created (because the whole path
/// already exists, or because `operation_field_name` itself isn't selected).
pub fn add_selection_field(
    document: &mut ast::Document,
    operation_field_name: &str,
    path: &[&str],
) -> Vec<String> {
    let (insert_into, first_missing_idx) = {
        let navigator = SelectionNavigator::new(document);
        let Some(mut field_path) = navigator.find_operation_field(operation_field_name) else {
            return vec![];
        };

        let mut first_missing_idx = None;
        for (idx, field_name) in path.iter().enumerate() {
            match navigator.find_field(&field_path.selection_set_path(), field_name) {
                Some(found) => field_path = found,
                None => {
                    first_missing_idx = Some(idx);
                    break;
                },
            }
        }

        match first_missing_idx {
            Some(idx) => (field_path.selection_set_path(), idx),
            None => return vec![],
        }
    };

    let Some(sel_set) = insert_into.resolve_mut(document) else {
        return vec![];
    };

    let new_fields = path[first_missing_idx..].iter().rev().fold(
        None,
        |child: Option<ast::Field>, field_name| {
            let mut field = ast::new_field(*field_name);
            field.selection_set.items.extend(child.map(ast::Selection::Field));
            Some(field)
        },
    );
    sel_set.items.extend(new_fields.map(ast::Selection::Field));

    let added_path: Vec<String> =
        path[..=first_missing_idx].iter()
            .map(|field_name| field_name.to_string())
            .collect();
    log::debug!(
        "Added selection `{}` beneath `{operation_field_name}`.",
        path.join("."),
    );
    added_path
}
