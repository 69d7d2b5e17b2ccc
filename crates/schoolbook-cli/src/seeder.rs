//! Fake parent records for development databases.

use std::time::Instant;

use fake::Fake;
use fake::faker::name::en::Name;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const BATCH_SIZE: usize = 500;

/// Generates parent names in parallel using Rayon
pub fn generate_parent_names(count: usize) -> Vec<String> {
    (0..count)
        .into_par_iter()
        .map(|_| Name().fake::<String>())
        .collect()
}

/// Seeds `count` parent records and returns their ids
pub async fn seed_parents(db: &PgPool, count: usize) -> Result<Vec<Uuid>, sqlx::Error> {
    let start_time = Instant::now();
    println!("👪 Seeding {} parents...", count);

    let names = generate_parent_names(count);
    let mut tx = db.begin().await?;
    let mut ids = Vec::with_capacity(names.len());

    for chunk in names.chunks(BATCH_SIZE) {
        let mut builder = QueryBuilder::<Postgres>::new("INSERT INTO stu_parents (name) ");
        builder.push_values(chunk, |mut row, name| {
            row.push_bind(name);
        });
        builder.push(" RETURNING id");

        let chunk_ids: Vec<Uuid> = builder.build_query_scalar().fetch_all(&mut *tx).await?;
        ids.extend(chunk_ids);
    }

    tx.commit().await?;

    println!(
        "   ✓ Inserted {} parents in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

/// Deletes every parent record and returns how many were removed
pub async fn clear_parents(db: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM stu_parents").execute(db).await?;
    Ok(result.rows_affected())
}
