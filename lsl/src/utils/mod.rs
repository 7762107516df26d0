pub mod identity;
pub mod logging;
pub mod symlink;
