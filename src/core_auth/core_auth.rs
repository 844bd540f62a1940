use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::info;

/// A single `username:password` line from the users file.
#[derive(Debug, Clone)]
pub struct UserEntry {
    username: String,
    password: String,
}

impl UserEntry {
    /// Parses one line of the users file. The password is everything after
    /// the first colon, so passwords may themselves contain colons. Lines
    /// without a colon or without a username are skipped.
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim();
        let (username, password) = line.split_once(':')?;
        if username.is_empty() {
            return None;
        }
        Some(UserEntry {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Immutable name to password mapping shared read-only by all sessions.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: HashMap<String, String>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, username: &str, password: &str) {
        self.users.insert(username.to_string(), password.to_string());
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn lookup(&self, username: &str) -> Option<&str> {
        self.users.get(username).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Loads the users file. A missing or unreadable file leaves the
    /// directory empty, which means no user can log in.
    pub fn load(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => {
                eprintln!(
                    "WARNING! no user file \"{}\" with the list of valid users and passwords.",
                    path.display()
                );
                eprintln!("Put this file in the same folder as the executable.");
                eprintln!("The format is username:password.");
                return Self::new();
            }
        };

        let mut directory = Self::new();
        for line in contents.lines() {
            if let Some(entry) = UserEntry::from_line(line) {
                directory.insert(entry.username(), entry.password());
            }
        }
        info!("Loaded {} users from {}", directory.len(), path.display());
        directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_line() {
        let entry = UserEntry::from_line("alice:secret").unwrap();
        assert_eq!(entry.username(), "alice");
        assert_eq!(entry.password(), "secret");
    }

    #[test]
    fn password_may_contain_colons() {
        let entry = UserEntry::from_line("bob:pa:ss:wd").unwrap();
        assert_eq!(entry.username(), "bob");
        assert_eq!(entry.password(), "pa:ss:wd");
    }

    #[test]
    fn empty_password_is_kept() {
        let entry = UserEntry::from_line("carol:").unwrap();
        assert_eq!(entry.password(), "");
    }

    #[test]
    fn rejects_lines_without_colon() {
        assert!(UserEntry::from_line("no-separator").is_none());
        assert!(UserEntry::from_line("").is_none());
    }

    #[test]
    fn rejects_empty_username() {
        assert!(UserEntry::from_line(":password").is_none());
    }

    #[test]
    fn directory_lookup() {
        let mut dir = UserDirectory::new();
        dir.insert("alice", "secret");
        assert!(dir.contains("alice"));
        assert_eq!(dir.lookup("alice"), Some("secret"));
        assert_eq!(dir.lookup("mallory"), None);
    }

    #[test]
    fn missing_file_yields_empty_directory() {
        let dir = UserDirectory::load(Path::new("/definitely/not/here/users.txt"));
        assert!(dir.is_empty());
    }
}
