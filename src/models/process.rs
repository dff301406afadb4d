//! Process model and the process set consumed by a scheduling run.
//!
//! A process is a unit of CPU demand: it becomes eligible at its arrival
//! time and needs `burst_time` ticks of CPU to complete.
//!
//! # Input Format
//! Processes are read as whitespace-separated integer triplets
//! `(id, arrival_time, burst_time)`. A trailing group of fewer than three
//! integers is discarded.

use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::error::InputError;

/// A process to be scheduled.
///
/// Holds only the immutable input fields. Simulation state (remaining burst,
/// last dispatch time) lives in the scheduler run that owns the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: i64,
    /// Clock value at which the process becomes eligible.
    pub arrival_time: i64,
    /// Total CPU time required to run to completion.
    pub burst_time: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(id: i64, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }
}

/// A process tagged with its insertion sequence number.
///
/// The sequence number is the final tie-breaker for every policy, so equal
/// keys are always selected first-inserted, first-selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencedProcess {
    /// Position in the input stream (0-based).
    pub seq: usize,
    /// The process record.
    pub process: Process,
}

/// Ordered collection of processes, remembering insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSet {
    processes: Vec<Process>,
}

impl ProcessSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a process.
    pub fn push(&mut self, process: Process) {
        self.processes.push(process);
    }

    /// Adds a process (builder style).
    pub fn with_process(mut self, process: Process) -> Self {
        self.push(process);
        self
    }

    /// Builds a set from a flat list of `(id, arrival, burst)` triplets.
    ///
    /// Integers that do not complete a triplet are dropped.
    pub fn from_triplets(values: &[i64]) -> Self {
        let processes = values
            .chunks_exact(3)
            .map(|t| Process::new(t[0], t[1], t[2]))
            .collect();
        Self { processes }
    }

    /// Parses whitespace-separated integers.
    ///
    /// Reading stops at the first token that is not an integer; everything
    /// before it is kept.
    pub fn parse(input: &str) -> Self {
        Self::parse_bytes(input.as_bytes())
    }

    /// Parses whitespace-separated integers from raw bytes.
    ///
    /// A token that is not valid UTF-8 ends reading like any other
    /// non-integer token.
    pub fn parse_bytes(input: &[u8]) -> Self {
        let mut values = Vec::new();
        let tokens = input
            .split(|b| b.is_ascii_whitespace())
            .filter(|t| !t.is_empty());
        for token in tokens {
            match std::str::from_utf8(token).ok().and_then(|t| t.parse::<i64>().ok()) {
                Some(v) => values.push(v),
                None => {
                    log::warn!(
                        "stopped reading processes at non-integer token {:?}",
                        String::from_utf8_lossy(token)
                    );
                    break;
                }
            }
        }

        let dangling = values.len() % 3;
        if dangling != 0 {
            log::warn!("discarding {dangling} trailing integer(s) that do not form a process");
        }

        Self::from_triplets(&values)
    }

    /// Reads and parses an entire stream until EOF.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, InputError> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(Self::parse_bytes(&buf))
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Iterates processes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }

    /// Processes sorted by arrival time, ties kept in insertion order.
    pub fn arrival_order(&self) -> Vec<SequencedProcess> {
        let mut ordered: Vec<SequencedProcess> = self
            .processes
            .iter()
            .enumerate()
            .map(|(seq, &process)| SequencedProcess { seq, process })
            .collect();
        ordered.sort_by_key(|p| (p.process.arrival_time, p.seq));
        ordered
    }
}

impl FromIterator<Process> for ProcessSet {
    fn from_iter<I: IntoIterator<Item = Process>>(iter: I) -> Self {
        Self {
            processes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_triplets_drops_incomplete() {
        let set = ProcessSet::from_triplets(&[1, 0, 5, 2, 1, 3, 9, 9]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().nth(1), Some(&Process::new(2, 1, 3)));
    }

    #[test]
    fn test_parse_whitespace() {
        let set = ProcessSet::parse("1 0 5\n2\t1 3\n\n3 2 8\n");
        let ids: Vec<i64> = set.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_stops_at_garbage() {
        let set = ProcessSet::parse("1 0 5 2 1 x 3 2 8");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_parse_empty() {
        assert!(ProcessSet::parse("").is_empty());
        assert!(ProcessSet::parse("   \n").is_empty());
    }

    #[test]
    fn test_read_from_stream() {
        let input = b"7 3 2 8 0 4" as &[u8];
        let set = ProcessSet::read_from(input).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_read_from_stops_at_invalid_utf8() {
        let input = b"1 0 5 2 1 3 \xff\xfe 4 0 1" as &[u8];
        let set = ProcessSet::read_from(input).unwrap();
        let ids: Vec<i64> = set.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_arrival_order_is_stable() {
        let set = ProcessSet::new()
            .with_process(Process::new(10, 4, 1))
            .with_process(Process::new(11, 2, 1))
            .with_process(Process::new(12, 4, 1))
            .with_process(Process::new(13, 2, 1));

        let order: Vec<i64> = set.arrival_order().iter().map(|p| p.process.id).collect();
        assert_eq!(order, vec![11, 13, 10, 12]);

        let seqs: Vec<usize> = set.arrival_order().iter().map(|p| p.seq).collect();
        assert_eq!(seqs, vec![1, 3, 0, 2]);
    }
}
