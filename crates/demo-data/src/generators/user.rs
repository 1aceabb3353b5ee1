//! User generation.

use fake::{
    Fake,
    faker::{
        internet::en::{FreeEmail, Password, Username},
        name::en::{FirstName, LastName},
    },
};
use rand::Rng;
use records::models::User;

/// Generates a single user with a random plaintext password.
pub fn generate_user(rng: &mut impl Rng) -> User {
    let username: String = Username().fake_with_rng(rng);
    let password: String = Password(8..16).fake_with_rng(rng);
    let first_name: String = FirstName().fake_with_rng(rng);
    let last_name: String = LastName().fake_with_rng(rng);
    let email: String = FreeEmail().fake_with_rng(rng);

    User::new(username, password, first_name, last_name, email)
}

/// Generates multiple users.
pub fn generate_users(count: usize, rng: &mut impl Rng) -> Vec<User> {
    (0..count).map(|_| generate_user(rng)).collect()
}

/// Demo logins added whenever the user collection is seeded.
pub fn fixed_users() -> Vec<User> {
    vec![
        User::new(
            "bryan@marchforourplanet.com",
            "Password123",
            "Bryan",
            "Howell",
            "bryan@marchforourplanet.com",
        ),
        User::new(
            "carrie@marchforourplanet.com",
            "Password123",
            "Carrie",
            "Howell",
            "carrie@marchforourplanet.com",
        ),
    ]
}
