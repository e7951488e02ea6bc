use crate::domain::{Activity, Camper};
use derive_more::derive::Display;

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq, Display)]
#[display("signup #{id} (camper {camper_id}, activity {activity_id}, time {time})")]
pub struct Signup {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSignup {
    pub camper_id: i64,
    pub activity_id: i64,
    pub time: i64,
}

/// A freshly created signup together with the two records it links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupDetail {
    pub signup: Signup,
    pub camper: Camper,
    pub activity: Activity,
}
