//! Command implementations.

use uas_storage_mongo::{connect, MongoConfig, MongoUserStore};

/// Prints every tenant and the users it holds, one line per user.
///
/// # Errors
///
/// Returns an error when the database is unreachable or a query fails.
pub async fn run_dump(config: &MongoConfig) -> anyhow::Result<()> {
    let db = connect(config).await?;
    // Read-only: no indexes are created here.
    let store = MongoUserStore::new(db);

    for client_id in store.client_ids().await? {
        println!("#### client {client_id} ####");
        for user in store.users_of(client_id).await? {
            println!(
                "id: {}, name: {}, email: {}, password: {}",
                user.id, user.name, user.email, user.password_hash
            );
        }
    }

    Ok(())
}
