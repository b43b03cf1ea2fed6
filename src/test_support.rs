//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::core::navigator::{Effect, Navigator};
use crate::core::period::ObservancePeriod;
use crate::core::preferences::MemoryPreferenceStore;
use crate::core::verse::{Language, VerseCatalog, VerseLabel, VerseRecord};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A catalog of `n` verses with English text only.
pub fn sample_catalog(n: u32) -> VerseCatalog {
    let verses = (1..=n)
        .map(|i| VerseRecord {
            number: VerseLabel::Number(i),
            title: Some(format!("Verse {i}")),
            tamil: None,
            sanskrit: None,
            english: Some(format!("English text {i}")),
            audio: None,
            video: None,
        })
        .collect();
    VerseCatalog::new(verses).unwrap()
}

/// Navigator over `sample_catalog(n)` with an empty in-memory preference store.
pub fn test_navigator(n: u32, today: NaiveDate) -> (Navigator<MemoryPreferenceStore>, Effect) {
    Navigator::initialize(
        sample_catalog(n),
        ObservancePeriod::margazhi(),
        MemoryPreferenceStore::new(),
        Language::English,
        today,
    )
}

/// A unique path under the system temp dir. Nothing is created.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("thiruppavai-{}-{}", uuid::Uuid::new_v4(), name))
}
