use log::debug;
use std::collections::HashMap;
use users::{get_group_by_gid, get_user_by_uid};

/// Source of user and group names.
pub trait IdentityDirectory {
    fn user_name(&self, uid: u32) -> Option<String>;
    fn group_name(&self, gid: u32) -> Option<String>;
}

/// The host's passwd and group databases.
pub struct SystemDirectory;

impl IdentityDirectory for SystemDirectory {
    fn user_name(&self, uid: u32) -> Option<String> {
        get_user_by_uid(uid).map(|u| u.name().to_string_lossy().into_owned())
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        get_group_by_gid(gid).map(|g| g.name().to_string_lossy().into_owned())
    }
}

/// Resolves ids to names, remembering both hits and misses so a large
/// directory owned by one user costs one lookup.
pub struct IdentityResolver {
    directory: Box<dyn IdentityDirectory>,
    users: HashMap<u32, Option<String>>,
    groups: HashMap<u32, Option<String>>,
}

impl IdentityResolver {
    pub fn new() -> Self {
        Self::with_directory(Box::new(SystemDirectory))
    }

    pub fn with_directory(directory: Box<dyn IdentityDirectory>) -> Self {
        Self {
            directory,
            users: HashMap::new(),
            groups: HashMap::new(),
        }
    }

    pub fn resolve_owner(&mut self, uid: u32) -> Option<String> {
        let directory = &self.directory;
        self.users
            .entry(uid)
            .or_insert_with(|| {
                let name = directory.user_name(uid);
                if name.is_none() {
                    debug!("no user name for uid {}", uid);
                }
                name
            })
            .clone()
    }

    pub fn resolve_group(&mut self, gid: u32) -> Option<String> {
        let directory = &self.directory;
        self.groups
            .entry(gid)
            .or_insert_with(|| {
                let name = directory.group_name(gid);
                if name.is_none() {
                    debug!("no group name for gid {}", gid);
                }
                name
            })
            .clone()
    }

    /// Owner name, or the numeric uid when it has no entry.
    pub fn owner_name(&mut self, uid: u32) -> String {
        self.resolve_owner(uid).unwrap_or_else(|| uid.to_string())
    }

    /// Group name, or the numeric gid when it has no entry.
    pub fn group_name(&mut self, gid: u32) -> String {
        self.resolve_group(gid).unwrap_or_else(|| gid.to_string())
    }
}
