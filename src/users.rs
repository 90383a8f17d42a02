//! A plain in-memory user list keyed by email.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    email: String,
    role: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        User {
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn update(&mut self, name: &str, email: &str, role: &str) {
        self.name = name.to_string();
        self.email = email.to_string();
        self.role = role.to_string();
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.name, self.email, self.role)
    }
}

#[derive(Debug, Default)]
pub struct UserManager {
    users: Vec<User>,
}

impl UserManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&mut self, user: User) {
        self.users.push(user);
    }

    /// Removes every user with `email`; returns how many were removed.
    pub fn remove_user(&mut self, email: &str) -> usize {
        let before = self.users.len();
        self.users.retain(|u| u.email != email);
        let removed = before - self.users.len();
        if removed > 0 {
            log::info!("removed {removed} user(s) with email {email}");
        }
        removed
    }

    /// Updates every user with `email`; returns how many were updated.
    pub fn update_user(
        &mut self,
        email: &str,
        new_name: &str,
        new_email: &str,
        new_role: &str,
    ) -> usize {
        let mut updated = 0;
        for user in self.users.iter_mut().filter(|u| u.email == email) {
            user.update(new_name, new_email, new_role);
            updated += 1;
        }
        if updated > 0 {
            log::info!("updated {updated} user(s) with email {email}");
        }
        updated
    }

    pub fn find(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }
}

impl fmt::Display for UserManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for user in &self.users {
            writeln!(f, "{user}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> UserManager {
        let mut manager = UserManager::new();
        manager.add_user(User::new("Adilet", "a@mail.com", "Admin"));
        manager.add_user(User::new("Ali", "ali@mail.com", "User"));
        manager
    }

    #[test]
    fn test_display_lists_users() {
        assert_eq!(
            manager().to_string(),
            "Adilet | a@mail.com | Admin\nAli | ali@mail.com | User\n"
        );
    }

    #[test]
    fn test_update_user() {
        let mut manager = manager();
        let updated = manager.update_user("ali@mail.com", "Alihan", "alih@mail.com", "User");
        assert_eq!(updated, 1);
        assert!(manager.find("ali@mail.com").is_none());
        assert_eq!(manager.find("alih@mail.com").unwrap().name(), "Alihan");
    }

    #[test]
    fn test_remove_user() {
        let mut manager = manager();
        assert_eq!(manager.remove_user("a@mail.com"), 1);
        assert_eq!(manager.users().len(), 1);
        assert_eq!(manager.remove_user("a@mail.com"), 0);
    }

    #[test]
    fn test_update_unknown_email_is_noop() {
        let mut users = manager();
        assert_eq!(users.update_user("nobody@mail.com", "X", "x@mail.com", "User"), 0);
        assert_eq!(users.users(), manager().users());
    }
}
