use derive_more::derive::Display;

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq, Display)]
#[display("activity #{id}")]
pub struct Activity {
    pub id: i64,
    pub name: Option<String>,
    pub difficulty: Option<i64>,
}
