pub mod auth;
pub mod classroom;
pub mod day_off;
pub mod group;
pub mod lesson;
pub mod lesson_period;
pub mod lesson_type;
pub mod schedule;
pub mod teacher;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`)
pub(crate) fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
