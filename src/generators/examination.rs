//! Examination generation.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use time::OffsetDateTime;

use super::draws;
use super::shop::GeneratedShop;
use crate::ids;

/// The four stages of the inspection workflow.
pub const EXAMINATION_STATUS: [&str; 4] = [
    "Kiểm tra tại cơ sở",
    "Lấy mẫu và kiểm định",
    "Kết luận",
    "Xử lý",
];

/// Generated examination record ready for either sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedExamination {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub from: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub to: OffsetDateTime,
    pub shop_id: String,
    pub status: String,
    /// Identifier reserved for the lab test paired with this examination.
    pub test_id: String,
}

/// Generates examination records over the shop list.
pub struct ExaminationGenerator {
    now: OffsetDateTime,
}

impl ExaminationGenerator {
    /// Creates a generator that anchors examination windows to `now`.
    pub fn new(now: OffsetDateTime) -> Self {
        Self { now }
    }

    /// Generates a seeded number of examinations, reseeding the shared rng
    /// with `seed`. `shops` must be non-empty.
    ///
    /// `from` is always in the past and `to` in the future relative to the
    /// generator's clock, so the window is never empty. Each record also
    /// reserves a fresh id for the lab test that will be attached to it.
    ///
    /// The number of seeded draws per iteration (from, to, shop, status) is a
    /// compatibility contract: the lab-test stage continues this rng stream,
    /// so reordering or adding draws here shifts every downstream value for
    /// the same master seed.
    pub fn generate(
        &self,
        seed: u64,
        shops: &[GeneratedShop],
        rng: &mut StdRng,
    ) -> Vec<GeneratedExamination> {
        *rng = StdRng::seed_from_u64(seed);
        let count = draws::derived_count(rng);

        (0..count)
            .map(|_| GeneratedExamination {
                id: ids::short_id(),
                from: draws::past(rng, self.now),
                to: draws::future(rng, self.now),
                shop_id: draws::pick_by_seeded_index(rng, shops).id.clone(),
                status: draws::pick_by_seeded_index(rng, &EXAMINATION_STATUS).to_string(),
                test_id: ids::short_id(),
            })
            .collect()
    }
}
