use crate::domain::Activity;
use serde::Serialize;

/// An activity without its signups or campers.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ActivityJson {
    pub id: i64,
    pub name: Option<String>,
    pub difficulty: Option<i64>,
}

impl From<&Activity> for ActivityJson {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id,
            name: activity.name.to_owned(),
            difficulty: activity.difficulty,
        }
    }
}
