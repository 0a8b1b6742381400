// src/progress.rs
/// Progress reporting for a batch run. Frontends (GUI/CLI) implement this to
/// surface status; the batch never depends on who is listening.
pub trait Progress {
    /// Called at the start with the number of queries.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each query, in input order.
    fn item_done(&mut self, _index: usize, _query: &str, _success: bool) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}

    /// Checked before each query. `true` stops the batch early; the
    /// remaining queries come back as failed records.
    fn cancelled(&self) -> bool {
        false
    }
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
