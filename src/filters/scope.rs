/// Whether `host` falls inside the target scope
///
/// Plain case-sensitive substring match; an empty scope admits every host.
pub fn in_scope(host: &str, target_scope: &str) -> bool {
    target_scope.is_empty() || host.contains(target_scope)
}
