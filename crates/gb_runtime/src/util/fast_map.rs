use std::hash::Hash;

use ahash::RandomState;
use hashbrown::HashMap;

/// Map used for storage keys. Seeds are fixed so iteration order is the
/// same on every run.
pub type FastHashMap<K, V> = HashMap<K, V, RandomState>;

pub fn fast_map_new<K: Eq + Hash, V>() -> FastHashMap<K, V> {
    HashMap::with_hasher(RandomState::with_seeds(0x67, 0x62, 0, 0))
}
