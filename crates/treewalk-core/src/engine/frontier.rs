//! Queue/stack frontier with O(1) membership checks.

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use crate::algorithm::Algorithm;
use crate::tree::NodeId;

/// Removal discipline of a [`Frontier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// First in, first out (BFS queue).
    Fifo,
    /// Last in, first out (DFS stack).
    Lifo,
}

impl From<Algorithm> for Discipline {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Bfs => Self::Fifo,
            Algorithm::Dfs => Self::Lifo,
        }
    }
}

/// Discovered-but-unprocessed nodes, kept in insertion order.
///
/// An id is held at most once; pushing an id already present is refused.
/// For a queue the oldest entry leaves first, for a stack the newest.
#[derive(Debug, Clone)]
pub struct Frontier {
    discipline: Discipline,
    items: IndexSet<NodeId, FxBuildHasher>,
}

impl Frontier {
    /// Creates an empty frontier.
    #[must_use]
    pub fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            items: IndexSet::default(),
        }
    }

    /// Returns the removal discipline.
    #[must_use]
    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    /// Inserts an id at the back (queue) or top (stack).
    ///
    /// Returns false, leaving the frontier unchanged, if the id is already
    /// present.
    pub fn push(&mut self, id: NodeId) -> bool {
        self.items.insert(id)
    }

    /// Removes the next id per discipline.
    pub fn pop(&mut self) -> Option<NodeId> {
        match self.discipline {
            // O(n) shift, frontiers here hold a handful of ids.
            Discipline::Fifo => self.items.shift_remove_index(0),
            Discipline::Lifo => self.items.pop(),
        }
    }

    /// Returns the id `pop` would remove next.
    #[must_use]
    pub fn head(&self) -> Option<NodeId> {
        match self.discipline {
            Discipline::Fifo => self.items.first().copied(),
            Discipline::Lifo => self.items.last().copied(),
        }
    }

    /// Returns true if the id is waiting in the frontier.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.items.contains(&id)
    }

    /// Number of waiting ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drops every id and switches discipline.
    pub fn reset(&mut self, discipline: Discipline) {
        self.items.clear();
        self.discipline = discipline;
    }

    /// Iterates ids in insertion order (queue front first, stack bottom first).
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.items.iter().copied()
    }

    /// Copies ids in insertion order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<NodeId> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_pops_oldest_first() {
        let mut queue = Frontier::new(Discipline::Fifo);
        for id in [2, 3, 4] {
            assert!(queue.push(id));
        }
        assert_eq!(queue.head(), Some(2));
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.to_vec(), vec![4]);
    }

    #[test]
    fn test_lifo_pops_newest_first() {
        let mut stack = Frontier::new(Discipline::Lifo);
        for id in [8, 6, 2] {
            stack.push(id);
        }
        assert_eq!(stack.head(), Some(2));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.to_vec(), vec![8, 6]);
    }

    #[test]
    fn test_push_refuses_duplicates() {
        let mut queue = Frontier::new(Discipline::Fifo);
        assert!(queue.push(5));
        assert!(!queue.push(5));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_pop_empty_is_none() {
        let mut stack = Frontier::new(Discipline::Lifo);
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.head(), None);
    }

    #[test]
    fn test_reset_switches_discipline() {
        let mut frontier = Frontier::new(Discipline::Fifo);
        frontier.push(1);
        frontier.push(2);
        frontier.reset(Discipline::Lifo);
        assert!(frontier.is_empty());
        assert_eq!(frontier.discipline(), Discipline::Lifo);
        frontier.push(1);
        frontier.push(2);
        assert_eq!(frontier.pop(), Some(2));
    }

    #[test]
    fn test_discipline_from_algorithm() {
        assert_eq!(Discipline::from(Algorithm::Bfs), Discipline::Fifo);
        assert_eq!(Discipline::from(Algorithm::Dfs), Discipline::Lifo);
    }

    #[test]
    fn test_popped_id_can_be_pushed_again() {
        let mut queue = Frontier::new(Discipline::Fifo);
        queue.push(1);
        queue.pop();
        assert!(!queue.contains(1));
        assert!(queue.push(1));
    }
}
