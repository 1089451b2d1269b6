use super::EntryKind;

/// A visible entry after filtering. Children are empty for files and for
/// directories whose subtree was suppressed by an exclusion rule.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeNode {
    pub name: String,
    pub kind: EntryKind,
    pub children: Vec<TreeNode>,
}
