use catalog_bench::seeder::{CatalogSeeder, DEFAULT_BOOKS};
use catalog_bench::{rest_url_from_env, rpc_addr_from_env};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut seeder = CatalogSeeder::new(rest_url_from_env(), rpc_addr_from_env());
    seeder.seed_both(DEFAULT_BOOKS).await?;

    Ok(())
}
