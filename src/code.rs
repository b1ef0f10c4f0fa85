//! Code table generation by depth-first tree walk.

use crate::tree::HuffNode;
use std::collections::HashMap;

/// Map every leaf's symbol to its root-to-leaf bit path: `false` per left
/// edge, `true` per right edge. The prefix property holds because codes
/// correspond to distinct leaves.
pub fn code_table(root: &HuffNode) -> HashMap<u8, Vec<bool>> {
    let mut codes = HashMap::new();
    walk(root, Vec::new(), &mut codes);
    codes
}

fn walk(node: &HuffNode, prefix: Vec<bool>, codes: &mut HashMap<u8, Vec<bool>>) {
    if let Some(sym) = node.symbol {
        // A root that is itself a leaf must not end up with a zero-length code.
        let code = if prefix.is_empty() { vec![false] } else { prefix };
        codes.insert(sym, code);
        return;
    }
    if let Some(ref left) = node.left {
        let mut p = prefix.clone();
        p.push(false);
        walk(left, p, codes);
    }
    if let Some(ref right) = node.right {
        let mut p = prefix.clone();
        p.push(true);
        walk(right, p, codes);
    }
}
