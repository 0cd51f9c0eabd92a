/// Four-tuple change view: a hash/value pair on the left (the "from" side)
/// and one on the right (the "to" side). Used for committed, uncommitted,
/// and full diffs alike — only which two hash slots feed `left`/`right`
/// differs between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff<V> {
    pub left_hash: Option<i64>,
    pub right_hash: Option<i64>,
    pub left_value: V,
    pub right_value: V,
}
