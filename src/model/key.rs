//! Cache key construction.

/// Separator between the identity parts of a file id.
pub const FILE_ID_SEPARATOR: &str = "+";

/// Builds the map key for a (namespace, group, file_name) identity.
///
/// The parts are joined with [`FILE_ID_SEPARATOR`] without escaping, so an
/// identity part containing the separator can collide with another key.
/// Callers own identity validation; the cache does not guard against it.
pub fn file_id(namespace: &str, group: &str, file_name: &str) -> String {
    let mut id = String::with_capacity(
        namespace.len() + group.len() + file_name.len() + 2 * FILE_ID_SEPARATOR.len(),
    );
    id.push_str(namespace);
    id.push_str(FILE_ID_SEPARATOR);
    id.push_str(group);
    id.push_str(FILE_ID_SEPARATOR);
    id.push_str(file_name);
    id
}
