//! The generation pipeline: wards, users, shops, examinations, lab tests.

use rand::SeedableRng;
use rand::rngs::StdRng;
use time::OffsetDateTime;
use tracing::debug;

use crate::config::StageSeeds;
use crate::generators::{
    ExaminationGenerator, GeneratedExamination, GeneratedLabTest, GeneratedShop, GeneratedUser,
    LabTestGenerator, ShopGenerator, UserGenerator, WardGenerator, draws,
};

/// All collections produced by one generation run.
///
/// The wards are not persisted by either sink; they exist to be referenced by
/// the other collections.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub wards: Vec<String>,
    pub users: Vec<GeneratedUser>,
    pub shops: Vec<GeneratedShop>,
    pub examinations: Vec<GeneratedExamination>,
    pub tests: Vec<GeneratedLabTest>,
}

/// Runs all five generation stages in dependency order.
///
/// A single rng instance flows through the whole pipeline. The master seed
/// determines the ward count; stages 1-4 then reseed with their derived stage
/// seed, and the lab-test stage continues the stream the examination stage
/// left behind. `now` anchors every generated date, so two runs with the same
/// seed, password hash, and clock produce identical data apart from the
/// freshly drawn record ids.
pub fn generate(seed: u64, hashed_password: &str, now: OffsetDateTime) -> Dataset {
    let seeds = StageSeeds::derive(seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let ward_count = draws::derived_count(&mut rng);

    let wards = WardGenerator::new().generate(seeds.wards, ward_count, &mut rng);
    let users = UserGenerator::new().generate(seeds.users, &wards, hashed_password, &mut rng);
    let shops = ShopGenerator::new(now).generate(seeds.shops, &wards, &mut rng);
    let examinations =
        ExaminationGenerator::new(now).generate(seeds.examinations, &shops, &mut rng);
    let tests = LabTestGenerator::new().generate(&examinations, &mut rng);

    debug!(
        wards = wards.len(),
        users = users.len(),
        shops = shops.len(),
        examinations = examinations.len(),
        tests = tests.len(),
        "generated dataset"
    );

    Dataset {
        wards,
        users,
        shops,
        examinations,
        tests,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::ADMIN_WARD;
    use std::collections::HashSet;
    use time::macros::datetime;

    const NOW: OffsetDateTime = datetime!(2024-05-01 12:00 UTC);

    /// The seed-derived portion of a dataset, with the fresh opaque ids
    /// projected away. Cross-entity references are reduced to list positions
    /// so two runs can be compared even though their ids differ.
    #[derive(Debug, PartialEq)]
    struct StableView {
        wards: Vec<String>,
        users: Vec<(String, String, String, String, i32)>,
        shops: Vec<(
            String,
            String,
            String,
            String,
            String,
            Option<bool>,
            Option<OffsetDateTime>,
        )>,
        examinations: Vec<(OffsetDateTime, OffsetDateTime, usize, String)>,
        tests: Vec<(OffsetDateTime, String, String, String, OffsetDateTime)>,
    }

    fn stable_view(dataset: &Dataset) -> StableView {
        let shop_position = |id: &str| {
            dataset
                .shops
                .iter()
                .position(|s| s.id == id)
                .expect("examination references a generated shop")
        };

        StableView {
            wards: dataset.wards.clone(),
            users: dataset
                .users
                .iter()
                .map(|u| {
                    (
                        u.email.clone(),
                        u.ward.clone(),
                        u.first_name.clone(),
                        u.last_name.clone(),
                        u.permission_flags,
                    )
                })
                .collect(),
            shops: dataset
                .shops
                .iter()
                .map(|s| {
                    (
                        s.name.clone(),
                        s.address.clone(),
                        s.ward.clone(),
                        s.phone.clone(),
                        s.shop_type.clone(),
                        s.is_valid,
                        s.valid_before,
                    )
                })
                .collect(),
            examinations: dataset
                .examinations
                .iter()
                .map(|e| (e.from, e.to, shop_position(&e.shop_id), e.status.clone()))
                .collect(),
            tests: dataset
                .tests
                .iter()
                .map(|t| {
                    (
                        t.taken,
                        t.status.clone(),
                        t.result.clone(),
                        t.processing_unit.clone(),
                        t.result_date,
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn test_seed_zero_runs_are_identical_apart_from_ids() {
        let first = generate(0, "hash", NOW);
        let second = generate(0, "hash", NOW);

        assert_eq!(stable_view(&first), stable_view(&second));
    }

    #[test]
    fn test_seed_zero_counts_match_the_pinned_fixtures() {
        // Regression fixtures: each count is the first draw after its stage
        // reseed, so any change to the seeding discipline or to the draws a
        // stage consumes before its count shifts these values. Re-baseline
        // deliberately, not silently.
        let dataset = generate(0, "hash", NOW);

        assert_eq!(dataset.wards.len(), 83);
        assert_eq!(dataset.users.len(), 84);
        assert_eq!(dataset.shops.len(), 83);
        assert_eq!(dataset.examinations.len(), 83);
        assert_eq!(dataset.tests.len(), 83);
    }

    #[test]
    fn test_seed_zero_counts_do_not_depend_on_the_clock() {
        let a = generate(0, "hash", NOW);
        let b = generate(0, "hash", datetime!(2030-01-01 00:00 UTC));

        assert_eq!(a.wards, b.wards);
        assert_eq!(a.users.len(), b.users.len());
        assert_eq!(a.shops.len(), b.shops.len());
        assert_eq!(a.examinations.len(), b.examinations.len());
    }

    #[test]
    fn test_different_seeds_produce_different_data() {
        let a = generate(0, "hash", NOW);
        let b = generate(1, "hash", NOW);

        assert_ne!(stable_view(&a), stable_view(&b));
    }

    #[test]
    fn test_referential_integrity() {
        let dataset = generate(0, "hash", NOW);
        let wards: HashSet<&str> = dataset.wards.iter().map(String::as_str).collect();
        let shop_ids: HashSet<&str> = dataset.shops.iter().map(|s| s.id.as_str()).collect();

        for user in &dataset.users {
            if user.ward != ADMIN_WARD {
                assert!(wards.contains(user.ward.as_str()));
            }
        }
        for shop in &dataset.shops {
            assert!(wards.contains(shop.ward.as_str()));
        }
        for examination in &dataset.examinations {
            assert!(shop_ids.contains(examination.shop_id.as_str()));
        }
    }

    #[test]
    fn test_each_lab_test_pairs_with_exactly_one_examination() {
        let dataset = generate(0, "hash", NOW);

        assert_eq!(dataset.tests.len(), dataset.examinations.len());
        for test in &dataset.tests {
            let owners = dataset
                .examinations
                .iter()
                .filter(|e| e.test_id == test.id)
                .count();
            assert_eq!(owners, 1);
        }
    }

    #[test]
    fn test_temporal_ordering_holds_across_the_pairing() {
        let dataset = generate(0, "hash", NOW);

        for (examination, test) in dataset.examinations.iter().zip(&dataset.tests) {
            assert_eq!(examination.test_id, test.id);
            assert!(examination.from < examination.to);
            assert!(examination.from <= test.taken);
            assert!(test.taken <= test.result_date);
            assert!(test.result_date <= examination.to);
        }
    }

    #[test]
    fn test_seed_zero_admin_fixture() {
        let dataset = generate(0, "hash", NOW);
        let admin = &dataset.users[0];

        assert_eq!(admin.email, "admin@admin.com");
        assert_eq!(admin.ward, "Admin Ward");
        assert_eq!(admin.first_name, "Ad");
        assert_eq!(admin.last_name, "Min");
        assert_eq!(admin.permission_flags, 3);
    }

    #[test]
    fn test_cardinality_bounds() {
        let dataset = generate(0, "hash", NOW);

        assert!((11..=100).contains(&dataset.wards.len()));
        assert!((12..=101).contains(&dataset.users.len()));
        assert!((11..=100).contains(&dataset.shops.len()));
        assert!((11..=100).contains(&dataset.examinations.len()));
        assert_eq!(dataset.tests.len(), dataset.examinations.len());
    }

    #[test]
    fn test_every_user_shares_the_supplied_hash() {
        let dataset = generate(0, "the-one-hash", NOW);
        assert!(dataset.users.iter().all(|u| u.password == "the-one-hash"));
    }
}
