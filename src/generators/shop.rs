//! Shop generation with certification states.

use fake::Fake;
use fake::faker::address::en::{BuildingNumber, StreetName};
use fake::faker::company::en::CompanyName;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use serde::Serialize;
use time::OffsetDateTime;

use super::draws;
use crate::ids;

/// The two shop categories the inspection service tracks.
pub const SHOP_TYPES: [&str; 2] = ["Quán bán thực phẩm", "Cơ sở chế biến thực phẩm"];

/// Lifecycle of a shop's food-safety certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificationState {
    NotIssued,
    Issued,
    Outdated,
    Canceled,
}

impl CertificationState {
    /// Maps a 5-digit draw onto the four states, uniformly via modulo.
    fn from_draw(draw: u32) -> Self {
        match draw % 4 {
            0 => Self::NotIssued,
            1 => Self::Issued,
            2 => Self::Outdated,
            _ => Self::Canceled,
        }
    }
}

/// Generated shop record ready for either sink.
///
/// A shop with no certificate carries neither `isValid` nor `validBefore`;
/// both fields are omitted from the serialized record entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedShop {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub address: String,
    pub ward: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub shop_type: String,
    #[serde(rename = "isValid", skip_serializing_if = "Option::is_none")]
    pub is_valid: Option<bool>,
    #[serde(
        rename = "validBefore",
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub valid_before: Option<OffsetDateTime>,
}

/// Generates shop records with their certification state.
pub struct ShopGenerator {
    now: OffsetDateTime,
}

impl ShopGenerator {
    /// Creates a generator that anchors certificate dates to `now`.
    pub fn new(now: OffsetDateTime) -> Self {
        Self { now }
    }

    /// Generates a seeded number of shops, reseeding the shared rng with
    /// `seed`. `wards` must be non-empty.
    pub fn generate(&self, seed: u64, wards: &[String], rng: &mut StdRng) -> Vec<GeneratedShop> {
        *rng = StdRng::seed_from_u64(seed);
        let count = draws::derived_count(rng);
        (0..count).map(|_| self.generate_single(wards, rng)).collect()
    }

    fn generate_single(&self, wards: &[String], rng: &mut StdRng) -> GeneratedShop {
        let state = CertificationState::from_draw(draws::five_digit(rng));
        let (is_valid, valid_before) = match state {
            CertificationState::NotIssued => (None, None),
            CertificationState::Issued => (Some(true), Some(draws::future(rng, self.now))),
            CertificationState::Outdated | CertificationState::Canceled => {
                (Some(false), Some(draws::past(rng, self.now)))
            }
        };

        let building: String = BuildingNumber().fake_with_rng(rng);
        let street: String = StreetName().fake_with_rng(rng);

        GeneratedShop {
            id: ids::short_id(),
            name: CompanyName().fake_with_rng(rng),
            address: format!("{building} {street}"),
            ward: draws::pick_by_seeded_index(rng, wards).clone(),
            phone: self.generate_phone(rng),
            shop_type: draws::pick_by_seeded_index(rng, &SHOP_TYPES).to_string(),
            is_valid,
            valid_before,
        }
    }

    /// Local mobile number format: leading zero plus nine digits.
    fn generate_phone(&self, rng: &mut StdRng) -> String {
        let digits: u32 = rng.gen_range(0..1_000_000_000);
        format!("0{digits:09}")
    }
}
