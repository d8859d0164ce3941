#![allow(dead_code)]

use git2::{Oid, Repository};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const NOTES_DIR: &str = "doc/release_notes";

/// Temporary git repository with committed release notes
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a repository with one commit holding `unreleased.rst`, tagged
    /// with each of `tags`.
    pub fn new(unreleased: &str, tags: &[&str]) -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");

        {
            let mut config = repo.config().expect("Could not get config");
            config
                .set_str("user.name", "Test User")
                .expect("Could not set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Could not set user.email");
        }

        let test_repo = TestRepo { dir, repo };
        fs::create_dir_all(test_repo.path().join(NOTES_DIR)).expect("Could not create notes dir");
        test_repo.write_unreleased(unreleased);
        let commit = test_repo.commit_all("Initial commit");

        for tag in tags {
            let object = test_repo.repo.find_object(commit, None).unwrap();
            test_repo
                .repo
                .tag_lightweight(tag, &object, false)
                .expect("Could not create tag");
        }

        test_repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn unreleased_path(&self) -> PathBuf {
        self.path().join(NOTES_DIR).join("unreleased.rst")
    }

    pub fn versioned_path(&self, version: &str) -> PathBuf {
        self.path().join(NOTES_DIR).join(format!("{}.rst", version))
    }

    pub fn write_unreleased(&self, content: &str) {
        fs::write(self.unreleased_path(), content).expect("Could not write notes");
    }

    pub fn read_unreleased(&self) -> String {
        fs::read_to_string(self.unreleased_path()).expect("Could not read notes")
    }

    /// Stage every tracked and new file under the notes directory and commit.
    pub fn commit_all(&self, message: &str) -> Oid {
        let mut index = self.repo.index().expect("Could not get index");
        index.read(true).expect("Could not reload index");
        index
            .add_all([NOTES_DIR], git2::IndexAddOption::DEFAULT, None)
            .expect("Could not add files to index");
        index.write().expect("Could not write index");

        let tree_id = index.write_tree().expect("Could not write tree");
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");
        let sig = self.repo.signature().expect("Could not get sig");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Could not create commit")
    }

    pub fn head(&self) -> Oid {
        self.repo
            .head()
            .unwrap()
            .peel_to_commit()
            .unwrap()
            .id()
    }

    pub fn commit_count(&self) -> usize {
        let mut revwalk = self.repo.revwalk().unwrap();
        revwalk.push_head().unwrap();
        revwalk.count()
    }

    pub fn tags(&self) -> Vec<String> {
        self.repo
            .tag_names(None)
            .unwrap()
            .iter()
            .flatten()
            .map(|s| s.to_string())
            .collect()
    }

    pub fn tag_target(&self, name: &str) -> Oid {
        self.repo
            .find_reference(&format!("refs/tags/{}", name))
            .unwrap()
            .peel_to_commit()
            .unwrap()
            .id()
    }
}
