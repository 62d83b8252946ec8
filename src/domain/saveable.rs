//! The saveable capability: which types may occupy a slot.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record type eligible for slot persistence.
///
/// Each implementing type owns exactly one slot, named by [`SLOT_NAME`].
/// The name is hashed into the artifact's file name, so it must stay stable
/// across releases; renaming it orphans previously saved data.
///
/// Use the type's short name (e.g. `"TimeData"`) to stay compatible with
/// artifacts written by earlier builds, which keyed slots that way.
///
/// [`SLOT_NAME`]: Saveable::SLOT_NAME
pub trait Saveable: Serialize + DeserializeOwned {
    /// Stable identifier of this type's slot.
    const SLOT_NAME: &'static str;
}
