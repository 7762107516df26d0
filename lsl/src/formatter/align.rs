use crate::entry::DisplayRecord;
use unicode_width::UnicodeWidthStr;

/// Column widths shared by every row of one batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlignmentProfile {
    pub links: usize,
    pub owner: usize,
    pub group: usize,
    pub size: usize,
    pub modified: usize,
}

impl AlignmentProfile {
    pub fn from_batch(records: &[DisplayRecord]) -> Self {
        records
            .iter()
            .fold(AlignmentProfile::default(), |profile, record| {
                AlignmentProfile {
                    links: profile.links.max(digit_count(record.link_count())),
                    owner: profile.owner.max(record.owner_name().width()),
                    group: profile.group.max(record.group_name().width()),
                    size: profile.size.max(digit_count(record.size_bytes())),
                    modified: profile.modified.max(record.modified_text().width()),
                }
            })
    }
}

pub fn digit_count(value: u64) -> usize {
    let mut count = 1;
    let mut rest = value / 10;
    while rest > 0 {
        count += 1;
        rest /= 10;
    }
    count
}
