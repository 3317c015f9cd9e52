//! User generation with the fixed administrator record.

use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use serde::Serialize;

use super::draws;
use crate::ids;

/// Administrator fields, independent of the seed.
pub const ADMIN_EMAIL: &str = "admin@admin.com";
pub const ADMIN_WARD: &str = "Admin Ward";
const ADMIN_FIRST_NAME: &str = "Ad";
const ADMIN_LAST_NAME: &str = "Min";
/// Full permission mask, granted to the administrator.
pub const ADMIN_PERMISSION_FLAGS: i32 = 3;

/// Permission levels assignable to generated users.
const PERMISSION_FLAGS: [i32; 3] = [1, 2, 3];

/// Generated user record ready for either sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    /// Pre-hashed; every user in a run shares the hash.
    pub password: String,
    pub ward: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "permissionFlags")]
    pub permission_flags: i32,
}

/// Generates user records for the inspection service.
pub struct UserGenerator;

impl UserGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates the administrator plus a seeded number of regular users.
    ///
    /// Reseeds the shared rng with `seed`. The administrator is always the
    /// first record and never depends on the seed. `wards` must be non-empty;
    /// the caller's count derivation guarantees that.
    pub fn generate(
        &self,
        seed: u64,
        wards: &[String],
        hashed_password: &str,
        rng: &mut StdRng,
    ) -> Vec<GeneratedUser> {
        *rng = StdRng::seed_from_u64(seed);
        let count = draws::derived_count(rng);

        let mut users = Vec::with_capacity(count + 1);
        users.push(self.admin(hashed_password));

        for _ in 0..count {
            let first_name: String = FirstName().fake_with_rng(rng);
            let last_name: String = LastName().fake_with_rng(rng);
            let email = self.generate_email(&first_name, &last_name, rng);
            let ward = draws::pick_by_seeded_index(rng, wards).clone();
            let permission_flags = *draws::pick_by_seeded_index(rng, &PERMISSION_FLAGS);

            users.push(GeneratedUser {
                id: ids::short_id(),
                email,
                password: hashed_password.to_string(),
                ward,
                first_name,
                last_name,
                permission_flags,
            });
        }

        users
    }

    fn admin(&self, hashed_password: &str) -> GeneratedUser {
        GeneratedUser {
            id: ids::short_id(),
            email: ADMIN_EMAIL.to_string(),
            password: hashed_password.to_string(),
            ward: ADMIN_WARD.to_string(),
            first_name: ADMIN_FIRST_NAME.to_string(),
            last_name: ADMIN_LAST_NAME.to_string(),
            permission_flags: ADMIN_PERMISSION_FLAGS,
        }
    }

    /// Builds an email from the generated name.
    fn generate_email(&self, first_name: &str, last_name: &str, rng: &mut StdRng) -> String {
        let normalized: String = format!("{first_name}.{last_name}")
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '.')
            .collect();

        let suffix: u32 = rng.gen_range(1..9999);
        let domains = ["gmail.com", "outlook.com", "yahoo.com", "proton.me"];
        let domain = domains[rng.gen_range(0..domains.len())];

        format!("{normalized}{suffix}@{domain}")
    }
}

impl Default for UserGenerator {
    fn default() -> Self {
        Self::new()
    }
}
