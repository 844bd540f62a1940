use std::path::{Component, Path, PathBuf};

/// Resolves a client-supplied path against the session's working directory
/// and checks that the result stays inside the server root.
///
/// A leading `/` anchors the path at the server root, anything else is
/// relative to `cwd`. The result is normalized purely lexically, so paths
/// that do not exist yet (MKD, STOR) resolve the same way as existing ones.
/// Returns `None` for any path that would escape the root.
pub fn resolve(root: &Path, cwd: &Path, input: &str) -> Option<PathBuf> {
    let input = input.replace('\\', "/");
    let joined = if let Some(rooted) = input.strip_prefix('/') {
        root.join(rooted)
    } else {
        cwd.join(&input)
    };
    let resolved = normalize(&joined);
    if resolved.starts_with(root) {
        Some(resolved)
    } else {
        None
    }
}

/// Collapses `.` and `..` components without touching the filesystem.
/// `..` at the filesystem root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::RootDir => result.push(component),
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            Component::Normal(part) => result.push(part),
        }
    }
    result
}

/// The session's view of `path`: the server root is `/` and everything below
/// it keeps its relative location.
pub fn virtual_path(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => "/".to_string(),
        Ok(rel) => format!("/{}", rel.to_string_lossy().replace('\\', "/")),
        Err(_) => "/".to_string(),
    }
}
