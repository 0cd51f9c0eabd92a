/// Six-tuple view of one token: its three hash slots and the value at
/// each slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<V> {
    pub initial_hash: Option<i64>,
    pub previous_hash: Option<i64>,
    pub current_hash: Option<i64>,
    pub initial_value: V,
    pub previous_value: V,
    pub current_value: V,
}
