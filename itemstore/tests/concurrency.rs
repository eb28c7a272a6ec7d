//! Concurrent access through shared service handles.

use std::{collections::HashSet, sync::Arc};

use itemstore::{memory::InMemoryItemStore, prelude::*, uuid::Uuid};

const WRITERS: usize = 8;
const ITEMS_PER_WRITER: usize = 50;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_are_all_retrievable() {
    let service = Arc::new(ItemService::new(InMemoryItemStore::new()));

    let mut handles = Vec::with_capacity(WRITERS);
    for writer in 0..WRITERS {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            let mut ids = Vec::with_capacity(ITEMS_PER_WRITER);
            for n in 0..ITEMS_PER_WRITER {
                let request = CreateItemRequest::new(format!("item-{writer}-{n}"), "concurrent")
                    .price(n as f64);
                ids.push(*service.create_item(request).await.unwrap().id());
            }
            ids
        }));
    }

    let mut ids: Vec<Uuid> = Vec::new();
    for handle in handles {
        ids.extend(handle.await.unwrap());
    }

    let unique: HashSet<Uuid> = ids.iter().copied().collect();
    assert_eq!(unique.len(), WRITERS * ITEMS_PER_WRITER);
    assert_eq!(service.get_all_items().await.unwrap().len(), WRITERS * ITEMS_PER_WRITER);

    for id in &ids {
        assert!(service.get_item_by_id(id).await.unwrap().is_some());
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn readers_see_whole_items_while_writers_replace() {
    let service = Arc::new(ItemService::new(InMemoryItemStore::new()));

    let mut ids = Vec::new();
    for n in 0..20 {
        let item = service
            .create_item(CreateItemRequest::new(format!("v0-{n}"), "v0").category("v0"))
            .await
            .unwrap();
        ids.push(*item.id());
    }
    let ids = Arc::new(ids);

    let writer = {
        let service = Arc::clone(&service);
        let ids = Arc::clone(&ids);
        tokio::spawn(async move {
            for version in 1..=25 {
                for id in ids.iter() {
                    let tag = format!("v{version}");
                    let request = UpdateItemRequest::new(format!("{tag}-name"), tag.clone()).category(tag);
                    service.update_item(id, request).await.unwrap();
                }
            }
        })
    };

    let reader = {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            for _ in 0..200 {
                let snapshot = service.get_all_items().await.unwrap();
                assert_eq!(snapshot.len(), 20);

                // description and category are always written together
                for item in &snapshot {
                    assert_eq!(item.category(), Some(item.description()));
                }
                tokio::task::yield_now().await;
            }
        })
    };

    writer.await.unwrap();
    reader.await.unwrap();

    for item in service.get_all_items().await.unwrap() {
        assert_eq!(item.description(), "v25");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_deletes_remove_each_item_once() {
    let service = Arc::new(ItemService::new(InMemoryItemStore::new()));

    let mut ids = Vec::new();
    for n in 0..100 {
        let item = service
            .create_item(CreateItemRequest::new(format!("doomed-{n}"), "to delete"))
            .await
            .unwrap();
        ids.push(*item.id());
    }
    let ids = Arc::new(ids);

    let mut handles = Vec::new();
    for _ in 0..4 {
        let service = Arc::clone(&service);
        let ids = Arc::clone(&ids);
        handles.push(tokio::spawn(async move {
            let mut removed = 0usize;
            for id in ids.iter() {
                if service.delete_item(id).await.unwrap() {
                    removed += 1;
                }
            }
            removed
        }));
    }

    let mut total = 0;
    for handle in handles {
        total += handle.await.unwrap();
    }

    assert_eq!(total, 100);
    assert!(service.get_all_items().await.unwrap().is_empty());
}
