// src/progress.rs
/// Lightweight progress reporting used by long-running operations (term scrapes).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Called when one term has been fetched and extracted.
    fn item_done(&mut self, _term: &str) {}

    /// Called when fetching or extracting one term failed.
    fn item_failed(&mut self, _term: &str, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
