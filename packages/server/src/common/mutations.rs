//! Transaction boundary for every directory write.
//!
//! begin -> run the operation -> commit on Ok / rollback on Err. The failure
//! cause is logged here once; the typed error still flows back to the caller.
//! The transaction is released on every path (dropping an uncommitted sqlx
//! transaction rolls it back).

use futures::future::BoxFuture;
use sqlx::{PgConnection, PgPool};

use crate::common::DirectoryError;

/// Run `op` inside a transaction on a connection from `pool`.
///
/// ```ignore
/// let venue = mutations::execute(&pool, move |conn| {
///     Box::pin(async move { Venue::create(draft, conn).await })
/// })
/// .await?;
/// ```
pub async fn execute<T, F>(pool: &PgPool, op: F) -> Result<T, DirectoryError>
where
    F: for<'t> FnOnce(&'t mut PgConnection) -> BoxFuture<'t, Result<T, DirectoryError>>,
{
    let mut tx = pool.begin().await?;

    match op(&mut *tx).await {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(e) => {
            tracing::error!(error = %e, kind = e.kind(), "mutation failed, rolling back");
            tx.rollback().await?;
            Err(e)
        }
    }
}
