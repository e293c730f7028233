/// Lazy iterator that generates cumulative path prefixes on-demand
///
/// For path `/a/b/c`, yields: `/a` → `/a/b` → `/a/b/c`
///
/// The breadcrumb resolver walks these prefixes shallow to deep, one per
/// path token. The root path `/` yields itself exactly once.
///
/// # Performance
///
/// - **Allocations**: Zero (only borrows from the input string)
/// - **Complexity**: O(depth) where depth is path levels
///
/// # Examples
///
/// ```
/// use wegwijzer::path::PathPrefixes;
///
/// let prefixes: Vec<&str> = PathPrefixes::new("/a/b/c").collect();
/// assert_eq!(prefixes, vec!["/a", "/a/b", "/a/b/c"]);
///
/// let prefixes: Vec<&str> = PathPrefixes::new("/").collect();
/// assert_eq!(prefixes, vec!["/"]);
/// ```
#[derive(Clone)]
pub struct PathPrefixes<'a> {
    path: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> PathPrefixes<'a> {
    /// Creates a new prefix iterator over the given path
    ///
    /// Paths that do not start with `/` yield nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use wegwijzer::path::PathPrefixes;
    ///
    /// let mut iter = PathPrefixes::new("/themas/vervoer");
    /// assert_eq!(iter.next(), Some("/themas"));
    /// assert_eq!(iter.next(), Some("/themas/vervoer"));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn new(path: &'a str) -> Self {
        Self {
            path,
            pos: 0,
            done: !path.starts_with('/'),
        }
    }
}

impl<'a> Iterator for PathPrefixes<'a> {
    type Item = &'a str;

    /// Returns the next cumulative prefix, one path segment deeper
    ///
    /// # Algorithm
    ///
    /// 1. Root (`/`) yields itself, then stops
    /// 2. Find the next `/` after the current position; the slice up to it
    ///    is the next prefix (zero-copy)
    /// 3. No further `/` means the whole path is the final prefix
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.path == "/" {
            self.done = true;
            return Some("/");
        }

        match self.path[self.pos + 1..].find('/') {
            Some(offset) => {
                self.pos += 1 + offset;
                Some(&self.path[..self.pos])
            }
            None => {
                self.done = true;
                Some(self.path)
            }
        }
    }
}
