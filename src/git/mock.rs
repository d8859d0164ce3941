use crate::error::{Result, TagReleaseError};
use crate::git::Repository;
use git2::Oid;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Mock repository for testing without actual git operations
///
/// Files still live on disk under `workdir`; only the version-control state
/// (tags, index, commits) is kept in memory.
pub struct MockRepository {
    workdir: PathBuf,
    tags: RefCell<BTreeMap<String, Oid>>,
    staged: RefCell<Vec<PathBuf>>,
    commits: RefCell<Vec<(Oid, String)>>,
    commit_seq: Cell<u32>,
    dirty: Cell<bool>,
    commit_leaves_dirty: Cell<bool>,
    tags_are_dropped: Cell<bool>,
}

impl MockRepository {
    /// Create a new clean mock repository rooted at `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        MockRepository {
            workdir: workdir.into(),
            tags: RefCell::new(BTreeMap::new()),
            staged: RefCell::new(Vec::new()),
            commits: RefCell::new(Vec::new()),
            commit_seq: Cell::new(0),
            dirty: Cell::new(false),
            commit_leaves_dirty: Cell::new(false),
            tags_are_dropped: Cell::new(false),
        }
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.get_mut().insert(name.into(), oid);
    }

    /// Mark the working tree as having uncommitted changes
    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty.set(dirty);
    }

    /// Make the next commits leave the working tree dirty
    pub fn fail_commits(&mut self) {
        self.commit_leaves_dirty.set(true);
    }

    /// Make tag creation succeed without recording the tag
    pub fn drop_tags(&mut self) {
        self.tags_are_dropped.set(true);
    }

    pub fn staged_paths(&self) -> Vec<PathBuf> {
        self.staged.borrow().clone()
    }

    pub fn commit_messages(&self) -> Vec<String> {
        self.commits
            .borrow()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn tag_target(&self, name: &str) -> Option<Oid> {
        self.tags.borrow().get(name).copied()
    }
}

impl Repository for MockRepository {
    fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.borrow().keys().cloned().collect())
    }

    fn is_dirty(&self) -> Result<bool> {
        Ok(self.dirty.get() || !self.staged.borrow().is_empty())
    }

    fn stage_path(&self, path: &Path) -> Result<()> {
        self.staged.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn commit_index(&self, message: &str) -> Result<Oid> {
        let mut commits = self.commits.borrow_mut();
        self.commit_seq.set(self.commit_seq.get() + 1);
        let mut bytes = [0u8; 20];
        bytes[16..].copy_from_slice(&self.commit_seq.get().to_be_bytes());
        let oid = Oid::from_bytes(&bytes)?;
        commits.push((oid, message.to_string()));

        if self.commit_leaves_dirty.get() {
            self.dirty.set(true);
        }
        self.staged.borrow_mut().clear();

        Ok(oid)
    }

    fn create_tag(&self, name: &str, oid: Oid) -> Result<()> {
        let mut tags = self.tags.borrow_mut();
        if tags.contains_key(name) {
            return Err(TagReleaseError::DuplicateTag {
                tag: name.to_string(),
            });
        }
        if !self.tags_are_dropped.get() {
            tags.insert(name.to_string(), oid);
        }
        Ok(())
    }
}
