use derive_more::derive::Display;

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq, Display)]
#[display("{name} (#{id}, age {age})")]
pub struct Camper {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCamper {
    pub name: String,
    pub age: i64,
}

// fields left as None keep their stored value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CamperChanges {
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl CamperChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }
}
