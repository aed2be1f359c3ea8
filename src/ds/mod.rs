pub mod frequency_buckets;
pub mod intrusive_list;
pub mod ordered_index;
pub mod slot_arena;

pub use frequency_buckets::{BucketChain, FrequencyBuckets, MinBucketIter};
pub use intrusive_list::{IntrusiveList, IntrusiveListIter};
pub use ordered_index::{IndexMode, MinFrequencyKeys, OrderedIndex};
pub use slot_arena::{SlotArena, SlotId};
