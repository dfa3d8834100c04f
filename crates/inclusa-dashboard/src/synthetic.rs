//! Synthetic participant dataset behind the dashboard.
//!
//! Each session draws its own dataset once, from the Chinese option lists,
//! and never mutates it afterwards.

use std::ops::Range;

use inclusa_core::catalog::OptionCatalog;
use inclusa_core::error::CatalogError;
use inclusa_core::models::language::Language;
use inclusa_core::models::participant::ParticipantRecord;
use inclusa_core::option_keys;
use jiff::Span;
use jiff::civil::DateTime;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::DashboardError;

pub const DEFAULT_PARTICIPANTS: u32 = 100;

/// Ages are drawn from `18..80`, so 79 is the oldest participant.
pub const AGE_RANGE: Range<u8> = 18..80;

/// Completions fall 1 to 29 days before generation time.
pub const DAYS_AGO: Range<i64> = 1..30;

/// Category values participants are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPools {
    pub regions: Vec<String>,
    pub genders: Vec<String>,
    pub tumor_stages: Vec<String>,
}

impl CategoryPools {
    /// Pools taken from the catalog's Chinese lists, whatever the UI language.
    pub fn from_catalog(catalog: &dyn OptionCatalog) -> Result<Self, CatalogError> {
        let list = |key: &str| catalog.options(Language::Zh, key).map(<[String]>::to_vec);
        Ok(Self {
            regions: list(option_keys::REGIONS)?,
            genders: list(option_keys::GENDERS)?,
            tumor_stages: list(option_keys::TUMOR_STAGES)?,
        })
    }
}

/// A dataset RNG: reproducible when seeded, entropy-backed otherwise.
pub fn dataset_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// `count` records with ids `1..=count`.
pub fn generate_participants<R: Rng + ?Sized>(
    rng: &mut R,
    count: u32,
    pools: &CategoryPools,
    now: DateTime,
) -> Result<Vec<ParticipantRecord>, DashboardError> {
    let mut records = Vec::with_capacity(count as usize);
    for id in 1..=count {
        let region = draw(rng, &pools.regions, "region")?;
        let gender = draw(rng, &pools.genders, "gender")?;
        let age = rng.gen_range(AGE_RANGE);
        let tumor_stage = draw(rng, &pools.tumor_stages, "tumor_stage")?;
        let days_ago = rng.gen_range(DAYS_AGO);
        let completion_date = now.checked_sub(Span::new().days(days_ago))?;

        records.push(ParticipantRecord {
            id,
            region,
            gender,
            age,
            tumor_stage,
            completion_date,
        });
    }
    Ok(records)
}

fn draw<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[String],
    name: &'static str,
) -> Result<String, DashboardError> {
    pool.choose(rng)
        .cloned()
        .ok_or(DashboardError::EmptyPool(name))
}
