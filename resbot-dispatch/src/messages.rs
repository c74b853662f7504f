//! User-visible reply texts.

/// Header of the selectable resource list.
pub const RESOURCES_HEADER: &str = "Resources:";

/// Reply to a selection whose key is not in the catalog.
pub const RESOURCE_NOT_FOUND: &str =
    "Resource not found. Please click on a valid resource button.";

/// Reply to `/resources` when the catalog has no entries.
pub const NO_RESOURCES: &str = "No resources are available right now.";

/// Reply to `/help`.
pub const HELP: &str = "Available commands:\n\
/start - say hello\n\
/help - show this message\n\
/resources - list available resources";

/// Reply to the selection of a `Link` resource.
pub fn link_reply(key: &str, url: &str) -> String {
    format!("Here is the file for resource '{}': {}", key, url)
}

/// Reply when a `File` resource cannot be read.
pub fn resource_unavailable(key: &str) -> String {
    format!("Resource '{}' is currently unavailable.", key)
}
