//! Patch reconciliation for user profiles.
//!
//! A profile PATCH distinguishes three states per clearable attribute:
//! absent (leave unchanged), explicit `null` (clear), and a value
//! (replace). Reconciliation folds such a patch over the stored profile
//! into the exact set of column changes to persist, recomputing the
//! daily goal whenever an attribute the formula depends on was touched.

use crate::UserProfile;
use crate::goal::daily_goal_ml;

use serde::{Deserialize, Deserializer};

/// Partial update of a user profile.
///
/// `name`, `email` and `password` can only be replaced, so a plain
/// `Option` carries them. `sex`, `age` and `weight_kg` are clearable:
/// `None` means the field was absent, `Some(None)` an explicit `null`,
/// `Some(Some(v))` a new value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(deserialize_with = "clearable")]
    pub sex: Option<Option<String>>,
    #[serde(deserialize_with = "clearable")]
    pub age: Option<Option<i32>>,
    #[serde(deserialize_with = "clearable")]
    pub weight_kg: Option<Option<f64>>,
}

/// Keep `Some(None)` for an explicit `null` instead of collapsing it
/// into "absent". Absent fields never reach this deserializer and fall
/// back to the struct-level default of `None`.
fn clearable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Column-level changes produced by [`reconcile`].
///
/// The outer `Option` selects which columns to write. For the clearable
/// columns the inner `Option` is the new value, `None` writing SQL NULL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub sex: Option<Option<String>>,
    pub age: Option<Option<i32>>,
    pub weight_kg: Option<Option<f64>>,
    pub daily_goal_ml: Option<i32>,
}

impl ProfileChanges {
    /// True when no column would be written.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.sex.is_none()
            && self.age.is_none()
            && self.weight_kg.is_none()
            && self.daily_goal_ml.is_none()
    }
}

/// Outcome of reconciling a patch against a stored profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub changes: ProfileChanges,
    /// Whether the daily goal was recomputed. Exactly when true,
    /// `changes.daily_goal_ml` is populated.
    pub recompute_goal: bool,
}

/// Fold `patch` over `current`, producing the changes to persist.
///
/// The daily goal is recomputed whenever `sex`, `age` or `weight_kg` is
/// present in the patch. The recomputation reads the patched weight when
/// one was supplied (an explicit `null` counts as no weight) and the
/// stored weight otherwise, so the persisted goal always matches the
/// weight that ends up stored. An empty patch yields empty changes.
pub fn reconcile(current: &UserProfile, patch: &ProfilePatch) -> Reconciled {
    let recompute_goal =
        patch.sex.is_some() || patch.age.is_some() || patch.weight_kg.is_some();

    let mut changes = ProfileChanges {
        name: patch.name.clone(),
        email: patch.email.clone(),
        password: patch.password.clone(),
        sex: patch.sex.clone(),
        age: patch.age,
        weight_kg: patch.weight_kg,
        daily_goal_ml: None,
    };

    if recompute_goal {
        let effective_weight = match patch.weight_kg {
            Some(patched) => patched,
            None => current.weight_kg,
        };
        changes.daily_goal_ml = Some(daily_goal_ml(effective_weight));
    }

    Reconciled {
        changes,
        recompute_goal,
    }
}
