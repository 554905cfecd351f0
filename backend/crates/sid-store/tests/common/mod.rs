use sid_store::KeyValueStore;

use googletest::prelude::*;

/// Behaviour every store implementation must share
pub async fn assert_store_contract(store: &dyn KeyValueStore) {
    assert_that!(store.get("simulatedUser").await.unwrap(), none());

    store.set("simulatedUser", "{\"id\":\"user_1\"}").await.unwrap();
    store.set("user_b@x.sn", "b").await.unwrap();
    store.set("user_a@x.sn", "a").await.unwrap();
    store.set("userXa", "not a credential").await.unwrap();

    assert_that!(
        store.get("simulatedUser").await.unwrap(),
        some(eq("{\"id\":\"user_1\"}"))
    );
    assert_that!(store.contains("user_a@x.sn").await.unwrap(), eq(true));

    let keys = store.keys_with_prefix("user_").await.unwrap();
    assert_eq!(keys, vec!["user_a@x.sn".to_string(), "user_b@x.sn".to_string()]);

    store.set("user_a@x.sn", "a2").await.unwrap();
    assert_that!(store.get("user_a@x.sn").await.unwrap(), some(eq("a2")));

    store.remove("simulatedUser").await.unwrap();
    store.remove("simulatedUser").await.unwrap();
    assert_that!(store.get("simulatedUser").await.unwrap(), none());
}
