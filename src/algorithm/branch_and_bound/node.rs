//! # Search tree nodes
//!
//! A node owns the subproblem it represents until that subproblem is solved. Children keep their
//! parent alive through a shared, read only, reference; the parent's subproblem is released by
//! then, such that only the fixings made along the path remain in memory.
use std::fmt;
use std::iter;
use std::sync::Arc;

use crate::data::linear_program::general_form::LinearProgram;

/// How a node relates to its parent.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Branch {
    /// The node without a parent.
    Root,
    /// Binary variable fixed at zero, or integer variable bounded from above.
    Left,
    /// Binary variable fixed at one, or integer variable bounded from below.
    Right,
}

/// A subproblem in the branch and bound tree.
#[derive(Debug)]
pub struct Node {
    /// Released once the node is solved.
    lp: Option<LinearProgram>,
    parent: Option<Arc<Node>>,
    branch: Branch,
    /// Number of branching decisions from the root, equal to the index into the branching order of
    /// the variable this node branches on.
    level: usize,
    /// Variable (index from 0) eliminated by fixing it in this node, and its value.
    fixed: Option<(usize, f64)>,
}

impl Node {
    /// Create the root of a tree.
    pub fn root(lp: LinearProgram) -> Self {
        Self { lp: Some(lp), parent: None, branch: Branch::Root, level: 0, fixed: None }
    }

    /// Create a child of a node.
    ///
    /// # Arguments
    ///
    /// * `parent`: Node that was branched on.
    /// * `branch`: Which of the two children.
    /// * `lp`: The parent's subproblem with one variable fixed or one bound added.
    /// * `fixed`: The fixed variable and its value, if this child fixes one.
    pub fn child(parent: &Arc<Node>, branch: Branch, lp: LinearProgram, fixed: Option<(usize, f64)>) -> Self {
        debug_assert_ne!(branch, Branch::Root);

        Self {
            lp: Some(lp),
            parent: Some(Arc::clone(parent)),
            branch,
            level: parent.level + 1,
            fixed,
        }
    }

    /// Take the subproblem out of the node, leaving it without one.
    pub fn take_lp(&mut self) -> Option<LinearProgram> {
        self.lp.take()
    }

    #[allow(missing_docs)]
    pub fn level(&self) -> usize {
        self.level
    }

    #[allow(missing_docs)]
    pub fn branch(&self) -> Branch {
        self.branch
    }

    /// This node followed by its ancestors, up to the root.
    fn path(&self) -> impl Iterator<Item = &Node> {
        iter::successors(Some(self), |node| node.parent.as_deref())
    }

    /// All variables fixed in this node and its ancestors.
    pub fn fixings(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.path().filter_map(|node| node.fixed)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut path = self.path().collect::<Vec<_>>();
        path.reverse();
        for (index, node) in path.into_iter().enumerate() {
            if index > 0 {
                write!(f, "-")?;
            }
            write!(f, "{}", node.level)?;
            match node.branch {
                Branch::Root => {},
                Branch::Left => write!(f, "L")?,
                Branch::Right => write!(f, "R")?,
            }
        }

        Ok(())
    }
}
