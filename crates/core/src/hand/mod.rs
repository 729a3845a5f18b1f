mod selection;
mod types;

pub use selection::{choose_hand, choose_hand_with};
pub use types::{
    validate_key_attribute, validate_partition_key, CompositeKey, HandRecord, ATTR_PLAYER_ID,
    ATTR_VERSION, MAX_PARTITION_KEY_BYTES, MAX_SORT_KEY_BYTES,
};
