mod resource;
pub use self::resource::{ItemSummary, ResourceList};

mod item;
pub use self::item::{MoveSlot, NamedRef, RawItem, TypeSlot};
