use crate::optable::{Assoc, OpTable, STANDARD};
use crate::parser::RPNExpr;
use crate::token::{Operator, Token};
use std::fmt;

// children are indices into the same node list
#[derive(Debug, Clone, Copy)]
enum Node {
    Leaf(f64),
    Bin(Operator, usize, usize),
}

// pieces left to write, in reverse order on the work stack
enum Step {
    Tree(usize),
    Text(&'static str),
}

impl RPNExpr {
    // None when the tokens don't form a single tree. The root is the last node.
    fn build_tree(&self) -> Option<Vec<Node>> {
        let mut nodes = Vec::with_capacity(self.0.len());
        let mut pending = Vec::new();
        for token in self.0.iter() {
            let node = match *token {
                Token::Number(n) => Node::Leaf(n),
                Token::Op(op) => {
                    let rhs = pending.pop()?;
                    let lhs = pending.pop()?;
                    Node::Bin(op, lhs, rhs)
                }
                Token::OParen | Token::CParen => return None,
            };
            pending.push(nodes.len());
            nodes.push(node);
        }
        if pending.len() == 1 {
            Some(nodes)
        } else {
            None
        }
    }

    /// Space separated postfix form, eg: `2 3 2 ^ ^`.
    pub fn postfix(&self) -> String {
        self.0
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Infix form with only the parens needed to keep the grouping,
    /// using `table` to decide when a subtree must be wrapped.
    /// None if the tokens don't form one tree or an operator is missing
    /// from `table`.
    pub fn infix(&self, table: &OpTable) -> Option<String> {
        let nodes = self.build_tree()?;
        // binding of each subtree root, leaves bind tightest
        let binding = nodes
            .iter()
            .map(|node| match *node {
                Node::Leaf(_) => Some((usize::MAX, Assoc::Left)),
                Node::Bin(op, _, _) => table.descriptor(op),
            })
            .collect::<Option<Vec<_>>>()?;

        let mut out = String::new();
        let mut work = vec![Step::Tree(nodes.len() - 1)];
        while let Some(step) = work.pop() {
            let idx = match step {
                Step::Text(text) => {
                    out.push_str(text);
                    continue;
                }
                Step::Tree(idx) => idx,
            };
            match nodes[idx] {
                Node::Leaf(x) => out.push_str(&x.to_string()),
                Node::Bin(op, lhs, rhs) => {
                    let (prec, assoc) = binding[idx];
                    let lparen = prec > binding[lhs].0
                        || (prec == binding[lhs].0 && assoc != Assoc::Left);
                    let rparen = prec > binding[rhs].0
                        || (prec == binding[rhs].0 && assoc != Assoc::Right);
                    // NOTE: '2 + ( 3 + 4 )' keeps the parens the user wrote
                    if rparen {
                        work.push(Step::Text(" )"));
                    }
                    work.push(Step::Tree(rhs));
                    if rparen {
                        work.push(Step::Text("( "));
                    }
                    work.push(Step::Text(" "));
                    work.push(Step::Text(op.symbol()));
                    work.push(Step::Text(" "));
                    if lparen {
                        work.push(Step::Text(" )"));
                    }
                    work.push(Step::Tree(lhs));
                    if lparen {
                        work.push(Step::Text("( "));
                    }
                }
            }
        }
        Some(out)
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.infix(&STANDARD) {
            Some(infix) => write!(f, "{}", infix),
            None => write!(f, "{}", self.postfix()),
        }
    }
}
