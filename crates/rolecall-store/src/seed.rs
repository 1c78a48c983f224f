//! First-run sample records for the offline store.

use chrono::{TimeZone, Utc};

use rolecall_core::{Record, RecordId};

/// Sample records written when the store file does not exist yet, so an
/// offline first run still renders a usable table.
pub fn sample_records() -> Vec<Record> {
    let seeded_at = Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).single();
    [
        ("seed-1", "Stackline Systems", "Gurgaon", "Backend Engineer"),
        ("seed-2", "Norbury Analytics", "Noida", "Data Engineer"),
        ("seed-3", "Fernwheel Labs", "Gurgaon and Noida", "Platform Engineer"),
        ("seed-4", "Quilldesk", "Remote", "Support Engineer"),
    ]
    .into_iter()
    .map(|(id, company, location, title)| Record {
        id: RecordId::new(id),
        company: company.to_string(),
        location: location.to_string(),
        title: Some(title.to_string()),
        url: None,
        created_at: seeded_at,
        updated_at: seeded_at,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_records_are_displayable_and_unique() {
        let records = sample_records();
        assert!(!records.is_empty());
        assert!(records.iter().all(Record::is_displayable));

        let mut ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn sample_records_cover_the_default_tag_vocabulary() {
        let table = rolecall_core::TagTable::ncr();
        let records = sample_records();
        for tag in ["gurgaon", "noida", "remote"] {
            let tag = rolecall_core::Tag::new(tag);
            assert!(
                records
                    .iter()
                    .any(|r| table.canonicalize(&r.location).contains(&tag)),
                "no seed record resolves to {tag}"
            );
        }
    }
}
