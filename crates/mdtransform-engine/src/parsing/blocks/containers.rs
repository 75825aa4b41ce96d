use crate::parsing::tree::{Node, NodeKind};

use super::types::ContainerFrame;

#[derive(Debug)]
struct OpenContainer {
    frame: ContainerFrame,
    node: Node,
}

/// The root node plus the path of open containers below it.
///
/// Nodes are owned by the stack while open; closing a container moves its
/// node into the children of the container beneath it.
#[derive(Debug)]
pub struct ContainerStack {
    root: Node,
    open: Vec<OpenContainer>,
}

impl ContainerStack {
    pub fn new() -> Self {
        Self {
            root: Node::new(NodeKind::Document),
            open: Vec::new(),
        }
    }

    pub fn top(&self) -> Option<&ContainerFrame> {
        self.open.last().map(|c| &c.frame)
    }

    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn push(&mut self, frame: ContainerFrame) {
        self.open.push(OpenContainer {
            node: frame.node(),
            frame,
        });
    }

    /// Closes the innermost container.
    pub fn pop(&mut self) {
        if let Some(closed) = self.open.pop() {
            self.append(closed.node);
        }
    }

    /// Closes containers from the top while `pred` holds for them.
    pub fn pop_while(&mut self, pred: impl Fn(&ContainerFrame) -> bool) {
        while self.top().is_some_and(&pred) {
            self.pop();
        }
    }

    /// Appends a finished node to the innermost open container.
    pub fn append(&mut self, node: Node) {
        self.current_mut().children.push(node);
    }

    pub fn append_all(&mut self, nodes: Vec<Node>) {
        self.current_mut().children.extend(nodes);
    }

    /// Closes everything in LIFO order and returns the document root.
    pub fn finish(mut self) -> Node {
        while !self.open.is_empty() {
            self.pop();
        }
        self.root
    }

    fn current_mut(&mut self) -> &mut Node {
        match self.open.last_mut() {
            Some(c) => &mut c.node,
            None => &mut self.root,
        }
    }
}

impl Default for ContainerStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::tree::ListKind;

    #[test]
    fn closed_containers_nest_into_parents() {
        let mut stack = ContainerStack::new();
        stack.push(ContainerFrame::List {
            kind: ListKind::Unordered,
            indent: 0,
        });
        stack.push(ContainerFrame::ListItem { indent: 0 });
        stack.append(Node::text("a"));
        let root = stack.finish();

        assert_eq!(root.kind, NodeKind::Document);
        let list = &root.children[0];
        assert_eq!(list.kind, NodeKind::UnorderedList);
        assert_eq!(list.children[0].children, vec![Node::text("a")]);
    }

    #[test]
    fn pop_while_stops_at_first_non_match() {
        let mut stack = ContainerStack::new();
        stack.push(ContainerFrame::Quote {
            indent: 0,
            depth: 1,
        });
        stack.push(ContainerFrame::Quote {
            indent: 0,
            depth: 2,
        });
        stack.pop_while(|f| matches!(f, ContainerFrame::Quote { depth, .. } if *depth > 1));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn append_without_containers_goes_to_root() {
        let mut stack = ContainerStack::new();
        stack.append(Node::new(NodeKind::HorizontalRule));
        assert_eq!(stack.finish().children.len(), 1);
    }
}
