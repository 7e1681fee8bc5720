//! Typed preference model.
//!
//! Every preference has a stable [`PrefId`], a static [`PrefDef`] that
//! declares its [`PrefKind`] (default value and, for choice kinds, the ordered
//! entry list), and a current [`PrefValue`] held by the preference store.

mod icons;
mod id;
mod registry;
mod strings;
mod value;

pub use icons::icon_for;
pub use id::PrefId;
pub use registry::{Label, PrefDef, PrefKind};
pub use strings::resolve;
pub use value::PrefValue;
