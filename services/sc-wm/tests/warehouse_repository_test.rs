//! 仓库仓储集成测试

use chrono::{Duration, Utc};
use invena_common::{Pagination, TenantId, UserId};
use sc_wm::domain::repositories::WarehouseRepository;
use sc_wm::domain::value_objects::{TenantScope, WarehouseTitle};
use sc_wm::domain::warehouse::Warehouse;
use sc_wm::infrastructure::persistence::PostgresWarehouseRepository;
use sqlx::PgPool;

async fn setup(pool: &PgPool) {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS warehouses (
            id UUID PRIMARY KEY,
            owner_id UUID NOT NULL,
            account_id UUID NOT NULL,
            title TEXT NOT NULL,
            address TEXT NOT NULL DEFAULT '',
            is_used BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL,
            created_by UUID NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL,
            updated_by UUID NOT NULL
        )",
    )
    .execute(pool)
    .await
    .unwrap();
}

fn warehouse(scope: &TenantScope, title: &str) -> Warehouse {
    Warehouse::create(
        scope,
        WarehouseTitle::new(title).unwrap(),
        "1 Dock Rd".to_string(),
        false,
    )
}

fn scope() -> TenantScope {
    TenantScope::new(TenantId::new(), UserId::new())
}

#[sqlx::test]
async fn test_create_and_find_by_id(pool: PgPool) {
    setup(&pool).await;
    let repo = PostgresWarehouseRepository::new(pool);
    let scope = scope();

    let created = repo.create(&warehouse(&scope, "Main Depot")).await.unwrap();

    let found = repo
        .find_by_id(&scope.tenant_id, &created.id)
        .await
        .unwrap()
        .expect("warehouse should exist");
    assert_eq!(found.title, "Main Depot");
    assert_eq!(found.address, "1 Dock Rd");
    assert_eq!(found.account_id, scope.tenant_id);
    assert_eq!(found.owner_id, scope.actor);
}

#[sqlx::test]
async fn test_find_by_id_is_tenant_scoped(pool: PgPool) {
    setup(&pool).await;
    let repo = PostgresWarehouseRepository::new(pool);
    let scope = scope();

    let created = repo.create(&warehouse(&scope, "Main Depot")).await.unwrap();

    // 其它租户查不到这一行
    let other_tenant = TenantId::new();
    let found = repo.find_by_id(&other_tenant, &created.id).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test]
async fn test_find_by_title(pool: PgPool) {
    setup(&pool).await;
    let repo = PostgresWarehouseRepository::new(pool);
    let scope = scope();

    repo.create(&warehouse(&scope, "North Yard")).await.unwrap();

    let found = repo
        .find_by_title(&scope.tenant_id, "North Yard")
        .await
        .unwrap();
    assert!(found.is_some());

    // 精确匹配，大小写不同视为不存在
    let missing = repo
        .find_by_title(&scope.tenant_id, "north yard")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_list_pagination(pool: PgPool) {
    setup(&pool).await;
    let repo = PostgresWarehouseRepository::new(pool);
    let scope = scope();

    for i in 0..25 {
        let mut w = warehouse(&scope, &format!("Depot {:02}", i));
        // 错开创建时间，保证倒序稳定
        w.audit_info.created_at = Utc::now() - Duration::seconds(i);
        repo.create(&w).await.unwrap();
    }

    let (items, total) = repo
        .list(&scope.tenant_id, &Pagination::new(3, 10), None)
        .await
        .unwrap();

    assert_eq!(items.len(), 5);
    assert_eq!(total, 25);
}

#[sqlx::test]
async fn test_list_orders_by_creation_desc(pool: PgPool) {
    setup(&pool).await;
    let repo = PostgresWarehouseRepository::new(pool);
    let scope = scope();

    for (i, title) in ["Oldest", "Middle", "Newest"].iter().enumerate() {
        let mut w = warehouse(&scope, title);
        w.audit_info.created_at = Utc::now() - Duration::seconds(10 - i as i64);
        repo.create(&w).await.unwrap();
    }

    let (items, _) = repo
        .list(&scope.tenant_id, &Pagination::default(), None)
        .await
        .unwrap();

    let titles: Vec<_> = items.iter().map(|w| w.title.as_str()).collect();
    assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
}

#[sqlx::test]
async fn test_list_keyword_filters_but_total_stays_unfiltered(pool: PgPool) {
    setup(&pool).await;
    let repo = PostgresWarehouseRepository::new(pool);
    let scope = scope();

    for title in ["Main Depot", "Spare Depot", "North Yard", "South Yard", "Dockside"] {
        repo.create(&warehouse(&scope, title)).await.unwrap();
    }

    let (items, total) = repo
        .list(&scope.tenant_id, &Pagination::default(), Some("depot"))
        .await
        .unwrap();

    // 列表按关键字过滤（不区分大小写），计数不带过滤条件
    assert_eq!(items.len(), 2);
    assert_eq!(total, 5);
    assert!(items.iter().all(|w| w.title.to_lowercase().contains("depot")));
}

#[sqlx::test]
async fn test_list_is_tenant_scoped(pool: PgPool) {
    setup(&pool).await;
    let repo = PostgresWarehouseRepository::new(pool);
    let scope_a = scope();
    let scope_b = scope();

    repo.create(&warehouse(&scope_a, "Tenant A Depot")).await.unwrap();
    repo.create(&warehouse(&scope_b, "Tenant B Depot")).await.unwrap();

    let (items, total) = repo
        .list(&scope_a.tenant_id, &Pagination::default(), None)
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(total, 1);
    assert_eq!(items[0].title, "Tenant A Depot");
}

#[sqlx::test]
async fn test_update_row(pool: PgPool) {
    setup(&pool).await;
    let repo = PostgresWarehouseRepository::new(pool);
    let scope = scope();

    let mut created = repo.create(&warehouse(&scope, "Main Depot")).await.unwrap();
    let created_at = created.audit_info.created_at;

    let editor = UserId::new();
    created.rename(WarehouseTitle::new("Renamed Depot").unwrap());
    created.set_used(true);
    created.touch(&editor);

    let updated = repo.update(&created).await.unwrap();

    assert_eq!(updated.title, "Renamed Depot");
    assert!(updated.is_used);
    assert_eq!(updated.owner_id, editor);
    assert_eq!(updated.audit_info.updated_by, editor);
    // 创建侧审计字段不随更新改变
    assert_eq!(updated.audit_info.created_at, created_at);
    assert_eq!(updated.audit_info.created_by, scope.actor);
}

#[sqlx::test]
async fn test_delete_is_tenant_scoped_and_silent(pool: PgPool) {
    setup(&pool).await;
    let repo = PostgresWarehouseRepository::new(pool);
    let scope = scope();

    let created = repo.create(&warehouse(&scope, "Main Depot")).await.unwrap();

    // 其它租户删除同一 id：静默成功，行保持不动
    let other_tenant = TenantId::new();
    let deleted = repo.delete(&other_tenant, &created.id).await.unwrap();
    assert_eq!(deleted, created.id);
    assert!(
        repo.find_by_id(&scope.tenant_id, &created.id)
            .await
            .unwrap()
            .is_some()
    );

    // 本租户删除后行消失
    repo.delete(&scope.tenant_id, &created.id).await.unwrap();
    assert!(
        repo.find_by_id(&scope.tenant_id, &created.id)
            .await
            .unwrap()
            .is_none()
    );
}
