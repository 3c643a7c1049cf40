// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session and account directory persistence through the JSON file store.

mod common;

use common::{login_reply, FakeBackend};
use pet_rescue_client::models::{AccountProfilePatch, StoredAccount};
use pet_rescue_client::storage::keys;
use pet_rescue_client::{ApiClient, ClientConfig, FileStore, KeyValueStore};

fn file_config(backend: &FakeBackend, dir: &tempfile::TempDir) -> ClientConfig {
    ClientConfig {
        store_path: Some(dir.path().join("pet-rescue-store.json")),
        ..ClientConfig::test_default(&backend.base_url)
    }
}

#[tokio::test]
async fn test_session_survives_new_client() {
    let backend = FakeBackend::start().await;
    backend.reply("POST", "/login/", login_reply(7, "asha", true));
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&backend, &dir);

    let client = ApiClient::from_config(&config).unwrap();
    let login = client.login("asha@example.org", "secret1").await.unwrap();
    client
        .accounts()
        .add_stored_account(StoredAccount::from_login(&login, None))
        .unwrap();
    client.accounts().switch_to_account("7").unwrap();

    let restarted = ApiClient::from_config(&config).unwrap();
    assert!(restarted.is_authenticated().unwrap());
    assert_eq!(
        restarted.session().access_token().unwrap().as_deref(),
        Some("access-7")
    );
    let current = restarted.accounts().current_account().unwrap().unwrap();
    assert_eq!(current.username, "asha");
}

#[tokio::test]
async fn test_logout_keeps_unrelated_keys_on_disk() {
    let backend = FakeBackend::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&backend, &dir);
    let path = config.store_path.clone().unwrap();

    let raw = FileStore::open(&path);
    raw.set("theme", "dark").unwrap();
    raw.set(keys::ACCESS_TOKEN, "acc").unwrap();

    let client = ApiClient::from_config(&config).unwrap();
    client.logout().unwrap();

    let reopened = FileStore::open(&path);
    assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(reopened.get(keys::ACCESS_TOKEN).unwrap(), None);
}

#[tokio::test]
async fn test_profile_edits_reach_the_directory_file() {
    let backend = FakeBackend::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&backend, &dir);

    let client = ApiClient::from_config(&config).unwrap();
    client
        .accounts()
        .add_stored_account(StoredAccount {
            id: "3".to_string(),
            username: "ravi".to_string(),
            email: "ravi@example.org".to_string(),
            profile_image: None,
            last_used: "2024-01-01T00:00:00.000Z".to_string(),
        })
        .unwrap();
    client.accounts().switch_to_account("3").unwrap();
    client
        .accounts()
        .update_current_account_profile(&AccountProfilePatch {
            email: Some("ravi.k@example.org".to_string()),
            ..Default::default()
        })
        .unwrap();

    let contents = std::fs::read_to_string(config.store_path.unwrap()).unwrap();
    let entries: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let stored: serde_json::Value =
        serde_json::from_str(entries["storedAccounts"].as_str().unwrap()).unwrap();
    assert_eq!(stored[0]["email"], "ravi.k@example.org");
    assert!(stored[0]["lastUsed"].is_string());
    assert_eq!(entries["currentAccountId"], "3");
}
