use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub postgres: PgPool,
    /// Country assigned to freshly provisioned viewer accounts. When unset,
    /// the lowest country_id on record is used instead.
    pub default_country_id: Option<String>,
}
