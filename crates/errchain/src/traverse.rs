//! Depth-first traversal of an error chain.
//!
//! Order for every node: aggregated errors first (in order), then the inner
//! error, then the node itself. Nodes reachable along both paths are visited
//! each time they are reached.

use crate::Error;

/// Visit every node reachable from `err`, children before their parent.
pub fn walk<'a, F>(err: &'a Error, visit: &mut F)
where
    F: FnMut(&'a Error),
{
    for child in err.errors() {
        walk(child, visit);
    }

    if let Some(inner) = err.inner_error() {
        walk(inner, visit);
    }

    visit(err);
}

/// Flatten the chain rooted at `err` in traversal order; `err` comes last.
pub fn collect<'a>(err: &'a Error) -> Vec<&'a Error> {
    let mut nodes = Vec::new();
    let mut push = |node: &'a Error| nodes.push(node);
    walk(err, &mut push);
    tracing::trace!("collected {} errors from '{}'", nodes.len(), err);
    nodes
}

impl Error {
    /// See [`walk`].
    pub fn walk<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Error),
    {
        walk(self, &mut visit);
    }

    /// See [`collect`].
    pub fn collect(&self) -> Vec<&Error> {
        collect(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(nodes: &[&Error]) -> Vec<String> {
        nodes.iter().map(|e| e.message().to_string()).collect()
    }

    #[test]
    fn test_single_node() {
        let err = Error::new("alone");
        assert_eq!(messages(&collect(&err)), ["alone"]);
    }

    #[test]
    fn test_inner_chain_is_deepest_first() {
        let err = Error::new("top").with_cause(Error::new("mid").with_cause(Error::new("root")));
        assert_eq!(messages(&collect(&err)), ["root", "mid", "top"]);
    }

    #[test]
    fn test_children_before_inner_before_self() {
        let err = Error::multi_with_message(
            "batch",
            vec![
                Error::new("a").with_cause(Error::new("a-cause")),
                Error::new("b"),
            ],
        )
        .with_cause(Error::new("upstream"));

        assert_eq!(
            messages(&collect(&err)),
            ["a-cause", "a", "b", "upstream", "batch"]
        );
    }

    #[test]
    fn test_walk_method_counts() {
        let err = Error::multi(vec![Error::new("a"), Error::new("b")]);
        let mut count = 0;
        err.walk(|_| count += 1);
        assert_eq!(count, 3);
        assert_eq!(err.collect().len(), 3);
    }
}
