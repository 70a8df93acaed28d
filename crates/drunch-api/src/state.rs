//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and REST
//! API. Services are generic over repository/KV traits, but AppState pins
//! them to the concrete SQLite implementations.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use uuid::Uuid;

use drunch_core::cart::CartService;
use drunch_core::chat::Assistant;
use drunch_core::order::OrderService;
use drunch_infra::config::{load_config, resolve_data_dir};
use drunch_infra::sqlite::catalog::SqliteCatalogRepository;
use drunch_infra::sqlite::contact::SqliteContactRepository;
use drunch_infra::sqlite::kv::SqliteKvStore;
use drunch_infra::sqlite::order::SqliteOrderRepository;
use drunch_infra::sqlite::pool::DatabasePool;
use drunch_infra::sqlite::reservation::SqliteReservationRepository;
use drunch_infra::sqlite::review::SqliteReviewRepository;
use drunch_types::config::Config;

/// Concrete type aliases for the service generics pinned to the SQLite
/// implementations.
pub type ConcreteCartService = CartService<SqliteKvStore>;
pub type ConcreteOrderService = OrderService<SqliteOrderRepository, SqliteKvStore>;

/// Live assistant sessions keyed by session id, with idle eviction.
///
/// Session ids are client-supplied, so the map is swept on every access:
/// entries idle longer than the TTL are dropped (transcript included),
/// which bounds growth under random-id traffic.
pub struct SessionRegistry {
    sessions: DashMap<Uuid, SessionEntry>,
    idle_ttl: Duration,
}

struct SessionEntry {
    assistant: Assistant,
    last_seen: Instant,
}

impl SessionRegistry {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            idle_ttl,
        }
    }

    /// Get the session's assistant, opening one via `open` if absent.
    /// Every access refreshes the idle clock and sweeps expired sessions.
    pub fn get_or_open(&self, session_id: Uuid, open: impl FnOnce() -> Assistant) -> Assistant {
        // Sweep before taking the entry: retain and an outstanding entry
        // guard on the same shard would deadlock.
        self.sessions
            .retain(|_, entry| entry.last_seen.elapsed() < self.idle_ttl);

        let mut entry = self
            .sessions
            .entry(session_id)
            .or_insert_with(|| SessionEntry {
                assistant: open(),
                last_seen: Instant::now(),
            });
        entry.last_seen = Instant::now();
        entry.assistant.clone()
    }
}

/// Shared application state holding all services.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub carts: Arc<ConcreteCartService>,
    pub orders: Arc<ConcreteOrderService>,
    pub catalog: Arc<SqliteCatalogRepository>,
    pub reviews: Arc<SqliteReviewRepository>,
    pub reservations: Arc<SqliteReservationRepository>,
    pub contacts: Arc<SqliteContactRepository>,
    pub assistants: Arc<SessionRegistry>,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: resolve the data dir, load config,
    /// connect to the database, wire services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await;

        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("drunch.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;

        let kv = SqliteKvStore::new(db_pool.clone());
        let carts = CartService::new(kv.clone());
        let orders = OrderService::new(
            SqliteOrderRepository::new(db_pool.clone()),
            CartService::new(kv),
        );

        let assistants = Arc::new(SessionRegistry::new(Duration::from_secs(
            config.session_idle_secs,
        )));

        Ok(Self {
            config: Arc::new(config),
            carts: Arc::new(carts),
            orders: Arc::new(orders),
            catalog: Arc::new(SqliteCatalogRepository::new(db_pool.clone())),
            reviews: Arc::new(SqliteReviewRepository::new(db_pool.clone())),
            reservations: Arc::new(SqliteReservationRepository::new(db_pool.clone())),
            contacts: Arc::new(SqliteContactRepository::new(db_pool.clone())),
            assistants,
            db_pool,
        })
    }

    /// Get or open the assistant session for a session id.
    pub fn assistant(&self, session_id: Uuid) -> Assistant {
        self.assistants.get_or_open(session_id, || {
            Assistant::new(
                &self.config.greeting,
                Duration::from_millis(self.config.reply_delay_ms),
            )
        })
    }
}
