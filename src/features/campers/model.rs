use crate::domain::{Activity, Camper, Signup};
use crate::features::activities::model::ActivityJson;
use crate::features::signups::model::SignupJson;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CamperJson {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl From<&Camper> for CamperJson {
    fn from(camper: &Camper) -> Self {
        Self {
            id: camper.id,
            name: camper.name.to_owned(),
            age: camper.age,
        }
    }
}

// a signup as seen from its camper: the activity is expanded, the camper is not
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CamperSignupJson {
    #[serde(flatten)]
    pub signup: SignupJson,
    pub activity: ActivityJson,
}

impl CamperSignupJson {
    pub fn new(signup: &Signup, activity: &Activity) -> Self {
        Self {
            signup: SignupJson::from(signup),
            activity: ActivityJson::from(activity),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CamperDetailJson {
    #[serde(flatten)]
    pub camper: CamperJson,
    pub signups: Vec<CamperSignupJson>,
}
