//! Tally - an ordered in-memory index balanced by credit weight.
//!
//! Entries are placed by a totally-ordered key, like any search tree, but
//! the tree balances itself by a per-entry numeric weight (its "credit")
//! rather than by height. Every subtree caches its total credit, so the
//! structure answers both "which entry has this key" and "which entry
//! covers this running total of credit" in O(log n). That combination is
//! what weighted random selection and quota accounting need.
//!
//! # Quick Start
//!
//! ```
//! use tally::tree::CreditTree;
//!
//! let mut tree = CreditTree::new();
//! tree.insert("user1", "alice", 10.0);
//! tree.insert("user2", "bob", 20.0);
//! tree.insert("user3", "carol", 15.0);
//!
//! assert_eq!(tree.total_credit(), 45.0);
//!
//! // In key order, user1 covers cumulative credit [0, 10), user2 covers
//! // [10, 30), and user3 covers [30, 45).
//! let node = tree.find_by_credit(25.0).unwrap();
//! assert_eq!(*node.key(), "user2");
//!
//! tree.update_credit(&"user2", 25.0);
//! assert_eq!(tree.total_credit(), 50.0);
//! ```

mod balance;
pub mod node;
pub mod tree;
