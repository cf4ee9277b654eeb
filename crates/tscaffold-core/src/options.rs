//! Post-processing of the options picked for a project.

use crate::template::{OptionCatalog, ProjectTemplate};

pub const HUSKY: &str = "husky";
pub const GITHOOKS: &str = "githooks";
pub const VITEST: &str = "vitest";
pub const REACT_TESTING_LIBRARY: &str = "reactTestingLibrary";
pub const GITHUB_ACTIONS: &str = "githubActions";

fn has(options: &[String], name: &str) -> bool {
    options.iter().any(|o| o == name)
}

/// Both git-hook managers are selected; only one may stay.
pub fn has_hook_conflict(options: &[String]) -> bool {
    has(options, HUSKY) && has(options, GITHOOKS)
}

/// React Testing Library is selected without Vitest.
pub fn missing_vitest(options: &[String]) -> bool {
    has(options, REACT_TESTING_LIBRARY) && !has(options, VITEST)
}

/// Remove `name` from the selection.
pub fn deselect(options: &mut Vec<String>, name: &str) {
    options.retain(|o| o != name);
}

/// Add `name` to the selection unless it is already there.
pub fn select(options: &mut Vec<String>, name: &str) {
    if !has(options, name) {
        options.push(name.to_string());
    }
}

/// Sort `options` into catalogue order and drop duplicates. Names missing
/// from the catalogue keep their relative order at the end.
pub fn sort_options(options: &[String], catalog: &OptionCatalog) -> Vec<String> {
    let rank = |name: &str| {
        catalog
            .options
            .iter()
            .position(|o| o.name == name)
            .unwrap_or(catalog.options.len())
    };
    let mut sorted: Vec<String> = Vec::with_capacity(options.len());
    for option in options {
        if !sorted.contains(option) {
            sorted.push(option.clone());
        }
    }
    sorted.sort_by_key(|o| rank(o));
    sorted
}

/// The option list a project is generated with: the user's selection in
/// catalogue order, followed by the template's project options.
pub fn finalize_options(
    selected: &[String],
    template: &ProjectTemplate,
    catalog: &OptionCatalog,
) -> Vec<String> {
    let mut options = sort_options(selected, catalog);
    for project_option in &template.project_options {
        select(&mut options, project_option);
    }
    options
}

/// Option names that are neither offered by `template` nor project options.
pub fn unknown_options<'a>(options: &'a [String], template: &ProjectTemplate) -> Vec<&'a str> {
    options
        .iter()
        .filter(|o| !template.options.contains(o) && !template.project_options.contains(o))
        .map(String::as_str)
        .collect()
}
