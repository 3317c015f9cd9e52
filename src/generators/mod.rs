//! Entity generators for the inspection test data.
//!
//! One generator per stage, consumed in strict dependency order:
//! - [`WardGenerator`]: ward (locality) names, no dependencies
//! - [`UserGenerator`]: users assigned to wards, admin record first
//! - [`ShopGenerator`]: shops with wards and certification states
//! - [`ExaminationGenerator`]: examinations over shops, reserving test ids
//! - [`LabTestGenerator`]: one lab test per examination
//!
//! Stages 1-4 reseed the shared rng with their stage seed; the lab-test stage
//! continues the stream the examination stage left behind.

pub mod draws;
pub mod examination;
pub mod shop;
pub mod user;
pub mod ward;

pub use examination::{EXAMINATION_STATUS, ExaminationGenerator, GeneratedExamination};
pub use lab_test::{GeneratedLabTest, LAB_TEST_RESULTS, LAB_TEST_STATUS, LabTestGenerator};
pub use shop::{CertificationState, GeneratedShop, SHOP_TYPES, ShopGenerator};
pub use user::{ADMIN_EMAIL, ADMIN_PERMISSION_FLAGS, ADMIN_WARD, GeneratedUser, UserGenerator};
pub use ward::WardGenerator;
