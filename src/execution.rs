//! Execution lag: converts raw signals into executable actions.
//!
//! An action computed from today's close can only be traded on the next
//! bar. Shifting the raw series forward by one bar removes same-bar
//! lookahead; the first bar has no prior signal to act on and is always
//! `Hold`.

use crate::types::Action;

/// Shift raw actions forward by exactly one bar.
///
/// `exec[0]` is `Hold`; `exec[i]` equals `raw[i - 1]` for every later bar.
pub fn shift_actions(raw: &[Action]) -> Vec<Action> {
    let mut exec = Vec::with_capacity(raw.len());
    if raw.is_empty() {
        return exec;
    }
    exec.push(Action::Hold);
    exec.extend_from_slice(&raw[..raw.len() - 1]);
    exec
}
