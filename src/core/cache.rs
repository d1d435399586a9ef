// src/core/cache.rs
//
// On-disk page cache: one file per URL, named by the SHA-256 of the URL.
// No expiry; `clear()` (the `--clear-cache` flag) is the only eviction.

use std::fs;
use std::io;
use std::path::PathBuf;

use sha2::{Digest, Sha256};
use tracing::debug;

#[derive(Clone, Debug)]
pub struct PageCache {
    dir: PathBuf,
}

impl PageCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, url: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        self.dir.join(format!("{}.html", hex::encode(hasher.finalize())))
    }

    pub fn get(&self, url: &str) -> Option<String> {
        let path = self.path_for(url);
        match fs::read_to_string(&path) {
            Ok(body) => {
                debug!(url, "cache hit");
                Some(body)
            }
            Err(_) => None,
        }
    }

    /// The body lands in a sibling `.part` file and is renamed over the entry;
    /// `get` never sees a half-written page.
    pub fn put(&self, url: &str, body: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(url);
        let part = path.with_extension("html.part");
        fs::write(&part, body)?;
        fs::rename(&part, &path)
    }

    /// Remove every cached page. Missing directory is fine.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_dir_all(&self.dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_get_clear() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = PageCache::new(tmp.path().join("http"));
        let url = "https://peps.python.org/pep-0008/";

        assert!(cache.get(url).is_none());
        cache.put(url, "<html>PEP 8</html>").unwrap();
        assert_eq!(cache.get(url).as_deref(), Some("<html>PEP 8</html>"));

        cache.clear().unwrap();
        assert!(cache.get(url).is_none());
        // clearing twice is harmless
        cache.clear().unwrap();
    }

    #[test]
    fn put_replaces_entry_and_leaves_no_partial_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("http");
        let cache = PageCache::new(&dir);
        let url = "https://docs.python.org/3/";

        cache.put(url, "<html>old</html>").unwrap();
        cache.put(url, "<html>new</html>").unwrap();
        assert_eq!(cache.get(url).as_deref(), Some("<html>new</html>"));

        let names: Vec<PathBuf> = fs::read_dir(&dir).unwrap().map(|e| e.unwrap().path()).collect();
        assert_eq!(names, [cache.path_for(url)]);
    }

    #[test]
    fn distinct_urls_distinct_files() {
        let cache = PageCache::new("c");
        assert_ne!(cache.path_for("https://a/"), cache.path_for("https://b/"));
        assert_eq!(cache.path_for("https://a/"), cache.path_for("https://a/"));
    }
}
