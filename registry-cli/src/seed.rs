use registry::User;
use serde::Deserialize;

// Sample data set shipped with the binary
const SAMPLE_USERS: &str = include_str!("../data/users.json");

#[derive(Deserialize)]
struct Seed {
    users: Vec<User>,
}

/// Parses the built-in sample users in their listed order
pub fn sample_users() -> Result<Vec<User>, serde_json::Error> {
    let seed: Seed = serde_json::from_str(SAMPLE_USERS)?;
    Ok(seed.users)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_users() {
        let users = sample_users().unwrap();

        assert_eq!(
            users,
            vec![
                User::plain(1, "Ivan", "ivan123", 100.0),
                User::premium(2, "Maria", "maria456", 300.0, 50.0),
                User::admin(0, "Admin", "admin", 1000.0, "Full"),
                User::plain(3, "Alex", "alex789", 200.0),
            ]
        );
    }
}
