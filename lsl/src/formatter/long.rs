use super::align::AlignmentProfile;
use super::permissions::encode_mode;
use crate::entry::{DisplayRecord, EntryKind};
use crate::utils::symlink::read_link_target;
use unicode_width::UnicodeWidthStr;

/// Renders records as `ls -l` rows.
pub struct LongFormatter {
    max_link_target: usize,
}

impl LongFormatter {
    pub fn new(max_link_target: usize) -> Self {
        Self { max_link_target }
    }

    /// Two passes: widths over the whole batch first, then one line per
    /// record. Every line, including the last, ends with a newline.
    pub fn format_batch(&self, records: &[DisplayRecord]) -> String {
        let profile = AlignmentProfile::from_batch(records);
        let mut output = String::new();
        for record in records {
            output.push_str(&self.format_row(record, &profile));
            output.push('\n');
        }
        output
    }

    pub fn format_row(&self, record: &DisplayRecord, profile: &AlignmentProfile) -> String {
        let mut row = format!(
            "{} {} {} {} {} {} {}",
            encode_mode(record.permission_bits()),
            pad_left(&record.link_count().to_string(), profile.links),
            pad_left(record.owner_name(), profile.owner),
            pad_left(record.group_name(), profile.group),
            pad_left(&record.size_bytes().to_string(), profile.size),
            pad_left(record.modified_text(), profile.modified),
            record.display_name(),
        );

        if record.kind() == EntryKind::Symlink {
            if let Some(target) = read_link_target(record.raw_path(), self.max_link_target) {
                row.push_str(" -> ");
                row.push_str(&target);
            }
        }

        row
    }
}

/// `total <N>` where N is the batch's block count halved.
pub fn total_line(records: &[DisplayRecord]) -> String {
    let blocks: u64 = records.iter().map(DisplayRecord::block_count).sum();
    format!("total {}", blocks / 2)
}

fn pad_left(value: &str, width: usize) -> String {
    let visible = value.width();
    if visible >= width {
        value.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::tests::{raw_file, test_builder};
    use crate::entry::{S_IFDIR, S_IFLNK, S_IFREG};
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn rows_are_right_aligned_per_batch() {
        let mut builder = test_builder();
        let mut dir = raw_file(S_IFDIR | 0o755, 4096, 8);
        dir.nlink = 12;
        let file = raw_file(S_IFREG | 0o644, 7, 8);
        let batch = vec![
            builder.build("a.txt".into(), "a.txt".into(), &file),
            builder.build("src".into(), "src".into(), &dir),
        ];

        let out = LongFormatter::new(1024).format_batch(&batch);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("-rw-r--r--  1 ann dev    7 "));
        assert!(lines[0].ends_with(" a.txt"));
        assert!(lines[1].starts_with("drwxr-xr-x 12 ann dev 4096 "));
        assert!(lines[1].ends_with(" src"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn symlink_rows_carry_their_target() {
        let tmp = tempfile::tempdir().unwrap();
        let link = tmp.path().join("link");
        std::os::unix::fs::symlink("target", &link).unwrap();

        let mut builder = test_builder();
        let record = builder.build("link".into(), link, &raw_file(S_IFLNK | 0o777, 6, 0));
        let row = LongFormatter::new(1024).format_row(&record, &AlignmentProfile::default());
        assert!(row.ends_with("link -> target"), "{}", row);
    }

    #[test]
    fn unreadable_symlink_has_no_arrow() {
        let tmp = tempfile::tempdir().unwrap();
        let not_a_link = tmp.path().join("plain");
        fs::write(&not_a_link, b"x").unwrap();

        let mut builder = test_builder();
        let record = builder.build("plain".into(), not_a_link, &raw_file(S_IFLNK | 0o777, 1, 0));
        let row = LongFormatter::new(1024).format_row(&record, &AlignmentProfile::default());
        assert!(row.ends_with(" plain"));
        assert!(!row.contains("->"));
    }

    #[test]
    fn total_halves_block_sum() {
        let mut builder = test_builder();
        let batch: Vec<_> = [2, 4, 6]
            .iter()
            .enumerate()
            .map(|(i, blocks)| {
                builder.build(
                    format!("f{}", i),
                    PathBuf::from(format!("f{}", i)),
                    &raw_file(S_IFREG | 0o644, 0, *blocks),
                )
            })
            .collect();
        assert_eq!(total_line(&batch), "total 6");
        assert_eq!(total_line(&[]), "total 0");
    }
}
