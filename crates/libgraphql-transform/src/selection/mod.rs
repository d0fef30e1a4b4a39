mod add_selection_field;
mod selection_navigator;
mod selection_set_path;

pub use add_selection_field::add_selection_field;
pub use selection_navigator::SelectionNavigator;
pub use selection_set_path::FieldPath;
pub use selection_set_path::SelectionSetPath;

#[cfg(test)]
mod tests;
