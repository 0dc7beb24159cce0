// Navigation state - browser-style history over visited directories

use std::mem;
use std::path::{Path, PathBuf};

/// Current directory plus a back/forward stack pair.
///
/// Every operation checks that its target still is a directory before
/// touching any state; a missing or non-directory target makes the whole
/// operation a no-op.
pub struct NavigationState {
    current: PathBuf,
    back: Vec<PathBuf>,
    forward: Vec<PathBuf>,
}

impl NavigationState {
    pub fn new(start: PathBuf) -> Self {
        Self {
            current: start,
            back: Vec::new(),
            forward: Vec::new(),
        }
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    /// Visit a new directory: the prior current directory goes onto the
    /// back stack and any forward history is discarded.
    pub fn navigate(&mut self, target: PathBuf) -> bool {
        if !target.is_dir() {
            tracing::warn!(target = %target.display(), "navigate refused, not a directory");
            return false;
        }

        let old = mem::replace(&mut self.current, target);
        self.back.push(old);
        self.forward.clear();
        tracing::debug!(current = %self.current.display(), "navigated");
        true
    }

    pub fn go_back(&mut self) -> bool {
        if !self.back.last().is_some_and(|p| p.is_dir()) {
            return false;
        }
        if let Some(target) = self.back.pop() {
            let old = mem::replace(&mut self.current, target);
            self.forward.push(old);
            return true;
        }
        false
    }

    pub fn go_forward(&mut self) -> bool {
        if !self.forward.last().is_some_and(|p| p.is_dir()) {
            return false;
        }
        if let Some(target) = self.forward.pop() {
            let old = mem::replace(&mut self.current, target);
            self.back.push(old);
            return true;
        }
        false
    }

    pub fn go_up(&mut self) -> bool {
        match self.current.parent() {
            Some(parent) => {
                let parent = parent.to_path_buf();
                self.navigate(parent)
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    pub fn can_go_up(&self) -> bool {
        self.current.parent().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, PathBuf, PathBuf, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a");
        let b = tmp.path().join("b");
        let c = tmp.path().join("c");
        fs::create_dir(&a).unwrap();
        fs::create_dir(&b).unwrap();
        fs::create_dir(&c).unwrap();
        (tmp, a, b, c)
    }

    #[test]
    fn test_navigate_pushes_back_history() {
        let (_tmp, a, b, _c) = fixture();
        let mut nav = NavigationState::new(a.clone());

        assert!(nav.navigate(b.clone()));
        assert_eq!(nav.current(), b.as_path());
        assert!(nav.can_go_back());
        assert!(!nav.can_go_forward());

        assert!(nav.go_back());
        assert_eq!(nav.current(), a.as_path());
        assert!(nav.can_go_forward());
    }

    #[test]
    fn test_navigate_clears_forward_history() {
        let (_tmp, a, b, c) = fixture();
        let mut nav = NavigationState::new(a.clone());

        nav.navigate(b.clone());
        nav.go_back();
        assert!(nav.can_go_forward());

        // A fresh navigation discards the forward stack entirely
        nav.navigate(c.clone());
        assert!(!nav.can_go_forward());
        assert!(!nav.go_forward());
        assert_eq!(nav.current(), c.as_path());

        assert!(nav.go_back());
        assert_eq!(nav.current(), a.as_path());
    }

    #[test]
    fn test_back_and_forward_are_symmetric() {
        let (_tmp, a, b, c) = fixture();
        let mut nav = NavigationState::new(a.clone());
        nav.navigate(b.clone());
        nav.navigate(c.clone());

        assert!(nav.go_back());
        assert_eq!(nav.current(), b.as_path());
        assert!(nav.go_back());
        assert_eq!(nav.current(), a.as_path());
        assert!(!nav.go_back());

        assert!(nav.go_forward());
        assert!(nav.go_forward());
        assert_eq!(nav.current(), c.as_path());
        assert!(!nav.go_forward());
    }

    #[test]
    fn test_renavigating_to_current_records_history() {
        let (_tmp, a, b, _c) = fixture();
        let mut nav = NavigationState::new(a.clone());
        nav.navigate(b.clone());
        nav.go_back();
        assert!(nav.can_go_forward());

        // Re-entering the current directory still counts as a visit:
        // it pushes a back entry and drops forward history
        assert!(nav.navigate(a.clone()));
        assert!(!nav.can_go_forward());
        assert!(nav.go_back());
        assert_eq!(nav.current(), a.as_path());
    }

    #[test]
    fn test_navigate_to_missing_target_is_noop() {
        let (_tmp, a, b, _c) = fixture();
        let mut nav = NavigationState::new(a.clone());
        nav.navigate(b.clone());

        let missing = a.join("does-not-exist");
        assert!(!nav.navigate(missing));
        assert_eq!(nav.current(), b.as_path());
        // No stack mutation happened
        assert!(!nav.can_go_forward());
        assert!(nav.can_go_back());
    }

    #[test]
    fn test_navigate_to_file_is_noop() {
        let (_tmp, a, _b, _c) = fixture();
        let file = a.join("notes.txt");
        fs::write(&file, "hello").unwrap();

        let mut nav = NavigationState::new(a.clone());
        assert!(!nav.navigate(file));
        assert_eq!(nav.current(), a.as_path());
    }

    #[test]
    fn test_go_back_revalidates_target() {
        let (_tmp, a, b, _c) = fixture();
        let mut nav = NavigationState::new(a.clone());
        nav.navigate(b.clone());

        fs::remove_dir(&a).unwrap();
        assert!(!nav.go_back());
        assert_eq!(nav.current(), b.as_path());
    }

    #[test]
    fn test_go_up_navigates_to_parent() {
        let (tmp, a, _b, _c) = fixture();
        let mut nav = NavigationState::new(a.clone());

        assert!(nav.go_up());
        assert_eq!(nav.current(), tmp.path());
        assert!(nav.can_go_back());
        assert!(nav.go_back());
        assert_eq!(nav.current(), a.as_path());
    }
}
