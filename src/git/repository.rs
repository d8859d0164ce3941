use std::path::{Path, PathBuf};

use crate::error::{Result, TagReleaseError};
use git2::{Oid, Repository as Git2Repo, StatusOptions};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
    workdir: PathBuf,
}

impl Git2Repository {
    /// Open or discover a git repository
    ///
    /// Searches `path` and its parents. Bare repositories are rejected since a
    /// release needs a working tree.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        Self::from_git2(repo)
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Result<Self> {
        let workdir = repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| git2::Error::from_str("repository has no working tree"))?;

        Ok(Git2Repository { repo, workdir })
    }
}

impl super::Repository for Git2Repository {
    fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn is_dirty(&self) -> Result<bool> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(false).include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut opts))?;

        Ok(statuses
            .iter()
            .any(|entry| entry.status() != git2::Status::CURRENT))
    }

    fn stage_path(&self, path: &Path) -> Result<()> {
        let mut index = self.repo.index()?;
        // Pick up index writes made through other handles since we opened
        index.read(false)?;
        index.add_path(path)?;
        index.write()?;

        Ok(())
    }

    fn commit_index(&self, message: &str) -> Result<Oid> {
        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;
        let signature = self.repo.signature()?;

        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => None,
            Err(e) => return Err(e.into()),
        };
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        let oid = self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;

        Ok(oid)
    }

    fn create_tag(&self, name: &str, oid: Oid) -> Result<()> {
        let object = self.repo.find_object(oid, None)?;

        self.repo
            .tag_lightweight(name, &object, false)
            .map_err(|e| match e.code() {
                git2::ErrorCode::Exists => TagReleaseError::DuplicateTag {
                    tag: name.to_string(),
                },
                _ => TagReleaseError::Git(e),
            })?;

        Ok(())
    }
}
