//! Application Startup
//!
//! Storage selection, application state and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{CountryServiceImpl, PersonServiceImpl};
use crate::config::{Settings, StorageBackend};
use crate::domain::{CountryRepository, PersonRepository};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    InMemoryCountryRepository, InMemoryDatabase, InMemoryPersonRepository, PgCountryRepository,
    PgPersonRepository,
};
use crate::presentation::http::{handlers::health, routes};
use crate::presentation::middleware::{cors, logging};

/// Country service over whichever store is configured
pub type DynCountryService = CountryServiceImpl<dyn CountryRepository>;

/// Person service over whichever store is configured
pub type DynPersonService = PersonServiceImpl<dyn PersonRepository, dyn CountryRepository>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub countries: Arc<dyn CountryRepository>,
    pub persons: Arc<dyn PersonRepository>,
    /// Present only for the postgres backend
    pub db: Option<PgPool>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// State backed by a fresh in-memory store.
    pub fn in_memory(settings: Settings) -> Self {
        let store = Arc::new(InMemoryDatabase::new());
        Self {
            countries: Arc::new(InMemoryCountryRepository::new(store.clone())),
            persons: Arc::new(InMemoryPersonRepository::new(store)),
            db: None,
            settings: Arc::new(settings),
        }
    }

    /// State backed by a PostgreSQL pool.
    pub fn postgres(pool: PgPool, settings: Settings) -> Self {
        Self {
            countries: Arc::new(PgCountryRepository::new(pool.clone())),
            persons: Arc::new(PgPersonRepository::new(pool.clone())),
            db: Some(pool),
            settings: Arc::new(settings),
        }
    }

    /// Build a country service for one request.
    pub fn country_service(&self) -> DynCountryService {
        CountryServiceImpl::new(self.countries.clone())
    }

    /// Build a person service for one request.
    pub fn person_service(&self) -> DynPersonService {
        PersonServiceImpl::new(self.persons.clone(), self.countries.clone())
    }
}

/// Build the router with middleware for the given state.
pub fn build_router(state: AppState) -> Router {
    let cors_layer = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors_layer)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        let state = match settings.database.backend {
            StorageBackend::Postgres => {
                let pool = database::connect(&settings.database).await?;
                tracing::info!("Database connection pool created");
                AppState::postgres(pool, settings.clone())
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data is lost on restart");
                AppState::in_memory(settings.clone())
            }
        };

        let router = build_router(state);

        // Bind to address
        let addr: SocketAddr = settings
            .server_addr()
            .parse()
            .with_context(|| format!("Invalid server address {}", settings.server_addr()))?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}
