//! Rotation primitives and the credit rebalancing step.
//!
//! Balance here means credit balance, not height balance. After a
//! mutation, each node on the unwind path gets one greedy chance to
//! rotate: the four classic candidates (single left, single right, and
//! the two double variants) are priced by how the rotation would shift
//! credit relative to the subtree root, and the cheapest strictly
//! negative one is applied. Zero is the cost of doing nothing, so a
//! candidate must strictly beat it, and ties keep the earliest candidate
//! in the fixed scan order: rotate-left, right-then-left, rotate-right,
//! left-then-right.
//!
//! A candidate whose required child or grandchild is missing prices at
//! infinity, which excludes it. One local step per ancestor per mutation
//! is all that ever runs; the scheme is a heuristic and promises no
//! worst-case depth bound.

use crate::node::{Node, credit_sum_of};

/// Rotate the subtree left, promoting the right child.
///
/// The demoted node's aggregate is refreshed first, then the promoted
/// node's, since the latter depends on the former. Returns the new
/// subtree root for the caller to store.
pub(crate) fn rotate_left<K, V>(mut root: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut pivot = root.right.take().expect("rotate_left needs a right child");
    root.right = pivot.left.take();
    root.refresh_credit_sum();
    pivot.left = Some(root);
    pivot.refresh_credit_sum();
    pivot
}

/// Rotate the subtree right, promoting the left child.
pub(crate) fn rotate_right<K, V>(mut root: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut pivot = root.left.take().expect("rotate_right needs a left child");
    root.left = pivot.right.take();
    root.refresh_credit_sum();
    pivot.right = Some(root);
    pivot.refresh_credit_sum();
    pivot
}

/// Candidate rotations, in evaluation order.
#[derive(Clone, Copy)]
enum Candidate {
    RotateLeft,
    RightThenLeft,
    RotateRight,
    LeftThenRight,
}

/// Price the four candidate rotations at `node` and apply the cheapest
/// strictly-improving one, if any. Returns the (possibly new) subtree
/// root and whether a rotation fired. When one fires, the rotation
/// primitives have already refreshed the affected aggregates; when none
/// does, the node is returned untouched.
pub(crate) fn rebalance<K, V>(mut node: Box<Node<K, V>>) -> (Box<Node<K, V>>, bool) {
    let own = node.credit;
    let left_sum = credit_sum_of(&node.left);
    let right_sum = credit_sum_of(&node.right);

    let rotate_left_cost = match node.right.as_deref() {
        Some(r) => -r.credit - credit_sum_of(&r.right) + own + left_sum,
        None => f64::INFINITY,
    };
    let right_then_left_cost = match node.right.as_deref().and_then(|r| r.left.as_deref()) {
        Some(rl) => {
            -2.0 * rl.credit + own + left_sum
                - credit_sum_of(&rl.left)
                - credit_sum_of(&rl.right)
        }
        None => f64::INFINITY,
    };
    let rotate_right_cost = match node.left.as_deref() {
        Some(l) => -l.credit - credit_sum_of(&l.left) + own + right_sum,
        None => f64::INFINITY,
    };
    let left_then_right_cost = match node.left.as_deref().and_then(|l| l.right.as_deref()) {
        Some(lr) => {
            -2.0 * lr.credit_sum + own
                - credit_sum_of(&lr.left)
                - credit_sum_of(&lr.right)
                + right_sum
        }
        None => f64::INFINITY,
    };

    let mut best = 0.0;
    let mut winner = None;
    let candidates = [
        (rotate_left_cost, Candidate::RotateLeft),
        (right_then_left_cost, Candidate::RightThenLeft),
        (rotate_right_cost, Candidate::RotateRight),
        (left_then_right_cost, Candidate::LeftThenRight),
    ];
    for (cost, candidate) in candidates {
        if cost < best {
            best = cost;
            winner = Some(candidate);
        }
    }

    match winner {
        None => (node, false),
        Some(Candidate::RotateLeft) => (rotate_left(node), true),
        Some(Candidate::RightThenLeft) => {
            let right = node.right.take().expect("candidate priced a right child");
            node.right = Some(rotate_right(right));
            (rotate_left(node), true)
        }
        Some(Candidate::RotateRight) => (rotate_right(node), true),
        Some(Candidate::LeftThenRight) => {
            let left = node.left.take().expect("candidate priced a left child");
            node.left = Some(rotate_left(left));
            (rotate_right(node), true)
        }
    }
}
