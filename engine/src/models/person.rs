/*
 * FORMAT BENCH - PERSON MODEL & SYNTHETIC DATASET
 * =================================================================
 * Component Name: engine/src/models/person.rs
 * Core Responsibility: توليد بيانات عشوائية قابلة للتكرار لقياس الصيغ.
 * Status: FINAL (Seeded StdRng)
 * =================================================================
 */

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::config_loader::DatasetConfig;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

// =================================================================
// الهيكل الرئيسي (The Person Record)
// =================================================================

/// One record of the benchmark dataset.
///
/// Field names double as the JSON keys and the Avro field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: i32,
    pub active: bool,
    pub hobbies: Vec<String>,
}

// =================================================================
// التوليد (Generation)
// =================================================================

fn random_letters<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
        .collect()
}

/// توليد شخص واحد ضمن حدود الإعدادات
pub fn generate_random_person<R: Rng + ?Sized>(rng: &mut R, cfg: &DatasetConfig) -> Person {
    let name = random_letters(rng, cfg.name_len);
    let age = rng.gen_range(cfg.min_age..=cfg.max_age);
    let active = rng.gen_bool(0.5);
    let hobby_count = rng.gen_range(cfg.min_hobbies..=cfg.max_hobbies);
    let hobbies = (0..hobby_count)
        .map(|_| random_letters(rng, cfg.hobby_len))
        .collect();

    Person { name, age, active, hobbies }
}

/// Builds `cfg.records` persons. A fixed `cfg.seed` yields the same dataset every time.
pub fn generate_people(cfg: &DatasetConfig) -> Vec<Person> {
    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let people: Vec<Person> = (0..cfg.records)
        .map(|_| generate_random_person(&mut rng, cfg))
        .collect();

    debug!(records = people.len(), seed = ?cfg.seed, "DATASET: generated");
    people
}
