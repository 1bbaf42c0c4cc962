mod format;
mod project;
mod store;

pub(crate) use project::{output_prefixes_json, output_project_json, print_prefixes, print_project};
pub(crate) use store::{output_store_json, print_store_table};
