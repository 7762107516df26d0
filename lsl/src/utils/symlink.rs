use log::{debug, warn};
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

pub const DEFAULT_MAX_LINK_TARGET: usize = 1024;

/// Reads the immediate target text of a symlink without following it.
///
/// Returns `None` when the read fails or when the target is longer than
/// `max_len` bytes; a target is never truncated.
pub fn read_link_target(path: &Path, max_len: usize) -> Option<String> {
    let target = match fs::read_link(path) {
        Ok(target) => target,
        Err(err) => {
            debug!("readlink {} failed: {}", path.display(), err);
            return None;
        }
    };

    let len = target.as_os_str().as_bytes().len();
    if len > max_len {
        warn!(
            "link target of {} is {} bytes, over the {} byte limit",
            path.display(),
            len,
            max_len
        );
        return None;
    }

    Some(target.to_string_lossy().into_owned())
}
