use crate::entry::DisplayRecord;
use std::cmp::Ordering;
use std::ffi::CString;

/// Adopts the collation order from the environment (`LC_ALL`,
/// `LC_COLLATE`, `LANG`). Until this runs the process collates in the "C"
/// locale, which is plain byte order.
pub fn init_locale() {
    let empty = b"\0";
    // SAFETY: `empty` is a valid NUL-terminated string; called once from
    // main before any other thread exists.
    unsafe {
        libc::setlocale(libc::LC_ALL, empty.as_ptr() as *const libc::c_char);
    }
}

/// Compares two names with the process locale's collation rules.
pub fn collate(a: &str, b: &str) -> Ordering {
    match (CString::new(a), CString::new(b)) {
        (Ok(a), Ok(b)) => {
            // SAFETY: both pointers come from live CStrings.
            let result = unsafe { libc::strcoll(a.as_ptr(), b.as_ptr()) };
            result.cmp(&0)
        }
        _ => a.cmp(b),
    }
}

/// Stable sort by display name; equal names keep their input order.
pub fn sort_by_name(records: &mut [DisplayRecord]) {
    records.sort_by(|a, b| collate(a.display_name(), b.display_name()));
}
