use env_logger::Env;
use log::info;
use server::{MockApiServer, MockAppData, SampleStore};
use std::sync::Arc;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("debug")
    ).init();

    let store = SampleStore::seed();

    info!(
        "sample data seeded: {} matches, {} teams, {} achievements",
        store.matches.len(),
        store.teams.len(),
        store.achievements.len()
    );

    let data = MockAppData {
        store: Arc::new(RwLock::new(store)),
    };

    MockApiServer::new(data).run().await;
}
