use crate::entry::{EntryKind, S_ISGID, S_ISUID, S_ISVTX};

const TRIAD_SHIFTS: [u32; 3] = [6, 3, 0];

/// Renders a raw mode as the classic ten-character `drwxr-xr-x` string.
///
/// Special bits overwrite the execute slot of their triad whether or not
/// the execute bit itself is set.
pub fn encode_mode(mode: u32) -> String {
    let mut chars = ['-'; 10];
    chars[0] = EntryKind::from_mode(mode).type_char();

    for (i, shift) in TRIAD_SHIFTS.iter().enumerate() {
        let triad = (mode >> shift) & 0o7;
        let base = 1 + i * 3;
        if triad & 0o4 != 0 {
            chars[base] = 'r';
        }
        if triad & 0o2 != 0 {
            chars[base + 1] = 'w';
        }
        if triad & 0o1 != 0 {
            chars[base + 2] = 'x';
        }
    }

    if mode & S_ISUID != 0 {
        chars[3] = 's';
    }
    if mode & S_ISGID != 0 {
        chars[6] = 's';
    }
    if mode & S_ISVTX != 0 {
        chars[9] = 't';
    }

    chars.iter().collect()
}
