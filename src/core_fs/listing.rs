use std::fs::Metadata;

/// Synthetic `.` and `..` entries prepended for the verbose LIST flags.
pub const LIST_VERBOSE: &str = "drwxr-xr-x 0b .\r\ndrwxr-xr-x 0b ..\r\n";

/// One directory listing line: `<perm-string> <size>b <name>` plus CRLF.
pub fn entry_line(name: &str, metadata: &Metadata) -> String {
    format!("{} {}b {}\r\n", perm_string(metadata), metadata.len(), name)
}

/// Ten-character permission string the linux way: type character followed by
/// three rwx triples for owner, group and other.
#[cfg(unix)]
pub fn perm_string(metadata: &Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;
    render(metadata.is_dir(), metadata.permissions().mode())
}

/// Fallback for targets without unix permission bits: everything is readable,
/// writability follows the read-only flag.
#[cfg(not(unix))]
pub fn perm_string(metadata: &Metadata) -> String {
    let write = if metadata.permissions().readonly() { 0 } else { 0o222 };
    render(metadata.is_dir(), 0o444 | write)
}

fn render(is_dir: bool, mode: u32) -> String {
    let mut perms = String::with_capacity(10);
    perms.push(if is_dir { 'd' } else { '-' });
    for shift in [6u32, 3, 0] {
        let triple = (mode >> shift) & 0o7;
        perms.push(if triple & 0o4 != 0 { 'r' } else { '-' });
        perms.push(if triple & 0o2 != 0 { 'w' } else { '-' });
        perms.push(if triple & 0o1 != 0 { 'x' } else { '-' });
    }
    perms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_full_permissions() {
        assert_eq!(render(false, 0o777), "-rwxrwxrwx");
        assert_eq!(render(true, 0o777), "drwxrwxrwx");
    }

    #[test]
    fn renders_typical_file_modes() {
        assert_eq!(render(false, 0o644), "-rw-r--r--");
        assert_eq!(render(false, 0o600), "-rw-------");
        assert_eq!(render(true, 0o755), "drwxr-xr-x");
    }

    #[test]
    fn missing_bits_render_as_dashes() {
        assert_eq!(render(false, 0), "----------");
        assert_eq!(render(false, 0o001), "---------x");
        assert_eq!(render(false, 0o040), "----r-----");
    }

    #[test]
    fn ignores_bits_above_the_permission_mask() {
        // Regular files carry the file type in the upper mode bits.
        assert_eq!(render(false, 0o100644), "-rw-r--r--");
    }
}
