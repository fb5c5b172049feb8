use async_graphql::{Context, Object, Result as GqlResult};
use chrono::{DateTime, Utc};

use crate::shell::graphql::access_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CheckAccessQuery;

#[Object]
impl CheckAccessQuery {
    async fn can_access(
        &self,
        context: &Context<'_>,
        operator_id: String,
        sector_id: String,
        street_id: Option<String>,
        at: Option<DateTime<Utc>>,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .resolver
            .can_access(&operator_id, &sector_id, street_id.as_deref(), at)
            .await
            .map_err(access_error)
    }
}
