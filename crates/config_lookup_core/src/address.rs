pub const DEFAULT_NAMESPACE: &str = "default";

/// Path handed to the prefix query for one namespace of a category.
///
/// The trailing `/` keeps `default` from matching keys stored under a
/// sibling namespace such as `default-2`.
pub fn path_for_list(prefix: &str, namespace: &str) -> String {
    format!("{prefix}/{namespace}/")
}

pub fn path_for_item(prefix: &str, namespace: &str, name: &str) -> String {
    format!("{prefix}/{namespace}/{name}")
}
