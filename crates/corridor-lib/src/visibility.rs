//! Edge eligibility rules for normal and emergency searches.
//!
//! During an emergency a corridor is eligible when it is explicitly marked as
//! a restricted shortcut or carries no marking at all. An explicit `false`
//! marking is therefore hidden while the emergency lasts. Outside emergencies
//! every corridor that is not restricted is eligible.

use crate::network::Corridor;

/// Whether `corridor` may be traversed under the given emergency state.
pub fn is_visible(corridor: &Corridor, is_emergency: bool) -> bool {
    if is_emergency {
        matches!(corridor.is_emergency_shortcut, Some(true) | None)
    } else {
        !corridor.is_restricted()
    }
}
