mod path_resolver_tests;

pub(crate) const REQUEST_WITH_VARIABLES: &str = include_str!("fixtures/request_with_variables.json");
pub(crate) const REQUEST_WITH_FRAGMENTS: &str = include_str!("fixtures/request_with_fragments.json");
