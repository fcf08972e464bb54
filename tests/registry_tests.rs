use anyhow::Result;
use std::sync::Arc;
use tempfile::TempDir;

use bodycomp_bot::registry::UserRegistry;

fn setup_registry() -> Result<(TempDir, UserRegistry)> {
    let dir = TempDir::new()?;
    let registry = UserRegistry::new(dir.path().join("users.json"));
    Ok((dir, registry))
}

#[tokio::test]
async fn test_registering_same_id_twice_keeps_one_entry() -> Result<()> {
    let (_dir, registry) = setup_registry()?;

    assert!(registry.register(12345, "anna").await?);
    assert!(!registry.register(12345, "anna_renamed").await?);

    let users = registry.users().await?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, 12345);
    assert_eq!(users[0].display_name, "anna");
    assert!(users[0].registered_at.is_some());

    Ok(())
}

#[tokio::test]
async fn test_registry_appends_in_order() -> Result<()> {
    let (_dir, registry) = setup_registry()?;

    registry.register(1, "first").await?;
    registry.register(2, "second").await?;
    registry.register(1, "first").await?;
    registry.register(3, "third").await?;

    let ids: Vec<u64> = registry.users().await?.iter().map(|user| user.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    Ok(())
}

#[tokio::test]
async fn test_missing_file_reads_as_empty() -> Result<()> {
    let (_dir, registry) = setup_registry()?;

    assert!(registry.users().await?.is_empty());
    assert!(!registry.path().exists());

    Ok(())
}

#[tokio::test]
async fn test_malformed_file_is_replaced() -> Result<()> {
    let (_dir, registry) = setup_registry()?;
    tokio::fs::write(registry.path(), "{ not json").await?;

    assert!(registry.users().await?.is_empty());
    assert!(registry.register(42, "ivan").await?);
    assert_eq!(registry.users().await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_file_is_pretty_printed_json() -> Result<()> {
    let (_dir, registry) = setup_registry()?;
    registry.register(7, "Мария").await?;

    let content = tokio::fs::read_to_string(registry.path()).await?;
    assert!(content.contains('\n'));
    assert!(content.contains("\"display_name\": \"Мария\""));

    let parsed: serde_json::Value = serde_json::from_str(&content)?;
    assert_eq!(parsed[0]["id"], 7);

    Ok(())
}

/// Concurrent registrations of the same id write it only once
#[tokio::test]
async fn test_concurrent_registrations() -> Result<()> {
    let (_dir, registry) = setup_registry()?;
    let registry = Arc::new(registry);

    let mut handles = Vec::new();
    for i in 0..20u64 {
        let registry = Arc::clone(&registry);
        handles.push(tokio::spawn(async move {
            registry.register(i % 5, &format!("user{}", i % 5)).await
        }));
    }

    let mut written = 0;
    for handle in handles {
        if handle.await?? {
            written += 1;
        }
    }

    assert_eq!(written, 5);
    assert_eq!(registry.users().await?.len(), 5);

    Ok(())
}
