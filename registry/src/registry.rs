use super::error::RegistryError;
use super::types::User;
use tracing::{debug, trace};

/// Reorders `users` by balance, highest first.
/// The sort is stable, so users with equal balances keep their relative order.
pub fn sort_users_by_balance(users: &mut [User]) {
    users.sort_by(|a, b| sort_key(b).total_cmp(&sort_key(a)));
}

// Adding 0.0 folds -0.0 into 0.0 so equal balances stay tied under total_cmp
#[inline(always)]
fn sort_key(user: &User) -> f64 {
    user.balance() + 0.0
}

/// Linear scan for the first user whose id equals `id`
pub fn find_user_by_id(users: &[User], id: i64) -> Result<&User, RegistryError> {
    users
        .iter()
        .find(|user| user.id() == id)
        .ok_or(RegistryError::UserNotFound(id))
}

/// Ordered collection of user records with an explicit live-user count
#[derive(Debug, Clone, Default)]
pub struct Registry {
    users: Vec<User>,
    user_count: usize,
}

impl Registry {
    /// Creates a new, empty Registry
    pub fn new() -> Self {
        Registry {
            users: Vec::new(),
            user_count: 0,
        }
    }

    /// Appends a user at the end of the current order
    pub fn insert(&mut self, user: User) {
        trace!(id = user.id(), "inserting user");
        self.users.push(user);
        self.user_count += 1;
    }

    /// Removes and returns the first user with the given id
    pub fn remove(&mut self, id: i64) -> Result<User, RegistryError> {
        let index = self.position_of(id)?;
        let user = self.users.remove(index);
        self.user_count -= 1;
        trace!(id, "removed user");
        Ok(user)
    }

    /// Get the number of users currently held
    pub fn user_count(&self) -> usize {
        self.user_count
    }

    pub fn is_empty(&self) -> bool {
        self.user_count == 0
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn iter(&self) -> std::slice::Iter<'_, User> {
        self.users.iter()
    }

    /// Sorts the registry in place, highest balance first
    pub fn sort_by_balance(&mut self) {
        debug!(users = self.user_count, "sorting users by balance");
        sort_users_by_balance(&mut self.users);
    }

    pub fn find_by_id(&self, id: i64) -> Result<&User, RegistryError> {
        let result = find_user_by_id(&self.users, id);
        debug!(id, found = result.is_ok(), "user lookup");
        result
    }

    pub fn find_by_id_mut(&mut self, id: i64) -> Result<&mut User, RegistryError> {
        let result = self.position_of(id);
        debug!(id, found = result.is_ok(), "user lookup");
        Ok(&mut self.users[result?])
    }

    /// Index of the first user with the given id in the current order
    fn position_of(&self, id: i64) -> Result<usize, RegistryError> {
        self.users
            .iter()
            .position(|user| user.id() == id)
            .ok_or(RegistryError::UserNotFound(id))
    }
}

impl FromIterator<User> for Registry {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        let mut registry = Registry::new();
        for user in iter {
            registry.insert(user);
        }
        registry
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a User;
    type IntoIter = std::slice::Iter<'a, User>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
