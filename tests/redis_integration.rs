//! Redis backend tests against a disposable Redis container.
//!
//! Requires Docker; run with `cargo test -- --ignored`.

use std::collections::HashSet;

use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage};

use user_store::config::RedisStorageConfig;
use user_store::domain::{NewUser, User};
use user_store::storage::{RedisUserStore, UserStore};

async fn start_redis() -> (ContainerAsync<GenericImage>, RedisStorageConfig) {
    let container = GenericImage::new("redis", "7-alpine")
        .with_exposed_port(6379.tcp())
        .with_wait_for(WaitFor::message_on_stdout("Ready to accept connections"))
        .start()
        .await
        .expect("Failed to start redis");

    let port = container
        .get_host_port_ipv4(6379)
        .await
        .expect("Failed to get redis port");

    let config = RedisStorageConfig {
        url: format!("redis://127.0.0.1:{port}"),
        ..Default::default()
    };

    (container, config)
}

fn user(name: &str) -> User {
    User::create(NewUser {
        name: Some(name.to_string()),
        phone: Some("555".to_string()),
        email: Some(format!("{name}@example.com")),
    })
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_redis_hash_operations() {
    let (_container, config) = start_redis().await;
    let store = RedisUserStore::new(&config).unwrap();
    store.health_check().await.unwrap();

    let ann = user("ann");
    let bob = user("bob");
    store.put(&ann).await.unwrap();
    store.put(&bob).await.unwrap();

    assert_eq!(store.get(&ann.id).await.unwrap(), Some(ann.clone()));
    assert_eq!(store.get("missing").await.unwrap(), None);

    let ids: HashSet<String> = store.entries().await.unwrap().into_keys().collect();
    assert_eq!(ids, HashSet::from([ann.id.clone(), bob.id.clone()]));

    assert!(store.delete(&ann.id).await.unwrap());
    assert!(!store.delete(&ann.id).await.unwrap());
    assert_eq!(store.get(&ann.id).await.unwrap(), None);
    assert_eq!(store.entries().await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_redis_namespaces_are_isolated() {
    let (_container, config) = start_redis().await;
    let users = RedisUserStore::new(&config).unwrap();
    let others = RedisUserStore::new(&RedisStorageConfig {
        hash_key: "Other".to_string(),
        ..config.clone()
    })
    .unwrap();

    let ann = user("ann");
    users.put(&ann).await.unwrap();

    assert_eq!(others.get(&ann.id).await.unwrap(), None);
    assert!(others.entries().await.unwrap().is_empty());
}
