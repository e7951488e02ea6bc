use crate::domain::{Signup, SignupDetail};
use crate::features::activities::model::ActivityJson;
use crate::features::campers::model::CamperJson;
use serde::Serialize;

// scalar columns only, never the linked records
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SignupJson {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
}

impl From<&Signup> for SignupJson {
    fn from(signup: &Signup) -> Self {
        Self {
            id: signup.id,
            time: signup.time,
            camper_id: signup.camper_id,
            activity_id: signup.activity_id,
        }
    }
}

/// Response shape for a created signup: both linked records are expanded one
/// level, neither of them carries its own signups.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SignupDetailJson {
    #[serde(flatten)]
    pub signup: SignupJson,
    pub camper: CamperJson,
    pub activity: ActivityJson,
}

impl From<&SignupDetail> for SignupDetailJson {
    fn from(detail: &SignupDetail) -> Self {
        Self {
            signup: SignupJson::from(&detail.signup),
            camper: CamperJson::from(&detail.camper),
            activity: ActivityJson::from(&detail.activity),
        }
    }
}
