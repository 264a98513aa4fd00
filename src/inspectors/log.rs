//! # Simple logging hook for debugging and demos.
//!
//! [`LogWriter`] prints registry activity to stdout in a human-readable
//! format. This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [registered] event=ReadingChanged total=2
//! [removed] event=ReadingChanged remaining=1
//! [pruned] event=ReadingChanged dead=1
//! [raised] event=ReadingChanged invoked=1 skipped=0
//! ```

use crate::inspectors::Inspect;

/// Simple stdout logging hook.
///
/// Enabled via the `logging` feature. Prints human-readable one-line records
/// for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Inspect`] for
/// structured logging or metrics collection.
pub struct LogWriter;

impl Inspect for LogWriter {
    fn handler_added(&self, event_name: &str, registered: usize) {
        println!("[registered] event={event_name} total={registered}");
    }

    fn handler_removed(&self, event_name: &str, remaining: usize) {
        println!("[removed] event={event_name} remaining={remaining}");
    }

    fn entries_pruned(&self, event_name: &str, pruned: usize) {
        println!("[pruned] event={event_name} dead={pruned}");
    }

    fn event_raised(&self, event_name: &str, invoked: usize, skipped: usize) {
        println!("[raised] event={event_name} invoked={invoked} skipped={skipped}");
    }

    fn name(&self) -> &'static str {
        "log_writer"
    }
}
