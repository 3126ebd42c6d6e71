//! 基础设施资源管理
//!
//! 统一管理服务共享的基础设施资源

use invena_adapter_postgres::{PostgresConfig, create_pool};
use invena_adapter_redis::{RedisCache, create_connection_manager};
use invena_config::AppConfig;
use invena_errors::AppResult;
use redis::aio::ConnectionManager;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;

use crate::retry::{RetryConfig, with_retry};

/// 基础设施资源容器
///
/// 由组合根统一初始化，组件通过构造函数接收各自需要的资源
pub struct Infrastructure {
    /// 应用配置
    config: AppConfig,
    /// PostgreSQL 连接池
    postgres_pool: PgPool,
    /// Redis 连接管理器
    redis_conn: ConnectionManager,
}

impl Infrastructure {
    /// 从配置创建基础设施资源（带重试）
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let retry_config = RetryConfig::default();

        // 1. 创建 PostgreSQL 连接池（必需，带重试）
        let pg_config = PostgresConfig::new(config.database.url.expose_secret())
            .with_max_connections(config.database.max_connections);
        let postgres_pool = with_retry(&retry_config, "PostgreSQL connection", || {
            let cfg = pg_config.clone();
            async move { create_pool(&cfg).await }
        })
        .await?;
        info!(
            "PostgreSQL connection pool created (max_connections: {})",
            config.database.max_connections
        );

        // 2. 创建 Redis 连接（必需，带重试）
        let redis_url = config.redis.url.clone();
        let redis_conn = with_retry(&retry_config, "Redis connection", || {
            let url = redis_url.expose_secret().clone();
            async move { create_connection_manager(&url).await }
        })
        .await?;
        info!("Redis connection created");

        Ok(Self {
            config,
            postgres_pool,
            redis_conn,
        })
    }

    /// 初始化日志：生产环境输出 JSON，其余环境输出人类可读格式
    pub fn init_telemetry(config: &AppConfig) {
        if config.is_production() {
            invena_telemetry::init_tracing_json(&config.telemetry.log_level);
        } else {
            invena_telemetry::init_tracing(&config.telemetry.log_level);
        }
    }

    /// 获取应用配置
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 获取 PostgreSQL 连接池
    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }

    /// 获取 Redis 连接管理器
    pub fn redis_connection_manager(&self) -> ConnectionManager {
        self.redis_conn.clone()
    }

    /// 获取 Redis 缓存（实现 CachePort trait）
    pub fn redis_cache(&self) -> RedisCache {
        RedisCache::new(self.redis_conn.clone())
    }

    /// 检查 PostgreSQL 连接状态
    pub async fn check_postgres_connection(&self) -> bool {
        invena_adapter_postgres::check_connection(&self.postgres_pool)
            .await
            .is_ok()
    }

    /// 检查 Redis 连接状态
    pub async fn check_redis_connection(&self) -> bool {
        let mut conn = self.redis_conn.clone();
        invena_adapter_redis::check_connection(&mut conn).await.is_ok()
    }
}
