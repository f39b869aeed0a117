//! Reports-to cycle detection.
//!
//! Depth-first search over subordinate -> supervisor edges with the usual
//! two sets: `visited` (ever entered) and `on_path` (entered and not yet
//! finished). Reaching a node that is on the path closes a cycle.
//!
//! A traversal that closes a cycle stops right there and leaves its nodes in
//! `on_path` for the rest of the run. A later start that reaches one of them
//! reports a cycle from its last entered node to the stale one.
//! The walk uses an explicit frame stack so long chains cannot overflow the
//! call stack.

use std::collections::HashSet;

use roster_model::{Finding, FindingKind, Record};
use tracing::debug;

use super::row_index;
use crate::index::RosterIndex;

const CYCLE_SEPARATOR: &str = " → ";

/// Find reports-to cycles and emit one finding per roster row on each cycle.
pub fn check<'a>(records: &'a [Record], index: &RosterIndex<'a>) -> Vec<Finding> {
    let mut detector = CycleDetector::new(index);
    let mut findings = Vec::new();

    for record in records {
        let start = record.email.as_str();
        if start.is_empty() || detector.visited.contains(start) {
            continue;
        }
        let Some(cycle) = detector.find_from(start) else {
            continue;
        };

        debug!(length = cycle.len() - 1, start, "reporting cycle found");
        let members: HashSet<&str> = cycle.iter().copied().collect();
        let detail = format!("Part of reporting cycle: {}", cycle.join(CYCLE_SEPARATOR));
        for (position, member) in records.iter().enumerate() {
            if members.contains(member.email.as_str()) {
                findings.push(Finding::new(
                    row_index(position),
                    &member.email,
                    &member.full_name,
                    FindingKind::CycleDetected,
                    detail.clone(),
                ));
            }
        }
    }

    findings
}

/// A node being explored and the supervisor edges it has left to follow.
struct Frame<'a> {
    email: &'a str,
    supervisors: std::vec::IntoIter<&'a str>,
}

/// Traversal state for one validation run.
struct CycleDetector<'i, 'a> {
    index: &'i RosterIndex<'a>,
    visited: HashSet<&'a str>,
    on_path: HashSet<&'a str>,
}

impl<'i, 'a> CycleDetector<'i, 'a> {
    fn new(index: &'i RosterIndex<'a>) -> Self {
        Self {
            index,
            visited: HashSet::new(),
            on_path: HashSet::new(),
        }
    }

    /// Explore from `start` and return the first cycle reached, closed by
    /// repeating its first email (`a, b, a`).
    ///
    /// The search for this start node stops at the first cycle. Nodes it
    /// entered stay visited, and the unfinished ones stay on the path.
    fn find_from(&mut self, start: &'a str) -> Option<Vec<&'a str>> {
        let mut path: Vec<Frame<'a>> = Vec::new();
        self.enter(start, &mut path);

        while let Some(frame) = path.last_mut() {
            let Some(next) = frame.supervisors.next() else {
                self.on_path.remove(frame.email);
                path.pop();
                continue;
            };

            if self.on_path.contains(next) {
                // A stale node left by an earlier aborted traversal is not in
                // `path`; the cycle then runs from the current node to it.
                let first = path
                    .iter()
                    .position(|frame| frame.email == next)
                    .unwrap_or(path.len() - 1);
                let mut cycle: Vec<&'a str> = path[first..].iter().map(|frame| frame.email).collect();
                cycle.push(next);
                return Some(cycle);
            }

            // Finished nodes were fully explored; dangling references have
            // no outgoing edges.
            if self.visited.contains(next) || !self.index.contains(next) {
                continue;
            }
            self.enter(next, &mut path);
        }

        None
    }

    fn enter(&mut self, email: &'a str, path: &mut Vec<Frame<'a>>) {
        self.visited.insert(email);
        self.on_path.insert(email);
        let supervisors: Vec<&'a str> = self
            .index
            .get(email)
            .map(|record| record.supervisors().collect())
            .unwrap_or_default();
        path.push(Frame {
            email,
            supervisors: supervisors.into_iter(),
        });
    }
}
