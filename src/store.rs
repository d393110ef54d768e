//! Document Store
//! Mission: Single MongoDB handle with one method per store operation

use crate::config::Config;
use crate::models::{CartItem, MenuItem, Review, User};
use anyhow::{Context, Result};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use mongodb::{Client, Collection, Database};
use tracing::info;

/// Shared store handle, created once at startup.
///
/// The driver manages its own connection pool; this struct is cheap to
/// clone and is shared across requests via the application state.
#[derive(Debug, Clone)]
pub struct Store {
    users: Collection<User>,
    menu: Collection<MenuItem>,
    reviews: Collection<Review>,
    carts: Collection<CartItem>,
}

impl Store {
    /// Bind the four collections on an existing database handle.
    pub fn new(db: &Database) -> Self {
        Self {
            users: db.collection("users"),
            menu: db.collection("menu"),
            reviews: db.collection("reviews"),
            carts: db.collection("carts"),
        }
    }

    /// Connect to the deployment and bind the four collections.
    pub async fn connect(config: &Config) -> Result<Self> {
        let client = Client::with_uri_str(&config.mongodb_uri)
            .await
            .context("Failed to create MongoDB client")?;

        let db = client.database(&config.db_name);

        // Fail fast on bad credentials / unreachable deployment
        db.run_command(doc! { "ping": 1 })
            .await
            .context("MongoDB ping failed")?;
        info!("🍽️  Connected to MongoDB database '{}'", config.db_name);

        Ok(Self::new(&db))
    }

    // ===== Users =====

    pub async fn list_users(&self) -> Result<Vec<User>> {
        let cursor = self.users.find(doc! {}).await?;
        cursor.try_collect().await.context("Failed to list users")
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.users
            .find_one(doc! { "email": email })
            .await
            .context("Failed to look up user")
    }

    pub async fn insert_user(&self, user: &User) -> Result<InsertOneResult> {
        self.users
            .insert_one(user)
            .await
            .context("Failed to insert user")
    }

    /// Set role=admin on the user with the given identifier.
    pub async fn promote_user(&self, id: &str) -> Result<UpdateResult> {
        let oid = ObjectId::parse_str(id).context("Invalid user id")?;
        self.users
            .update_one(doc! { "_id": oid }, doc! { "$set": { "role": "admin" } })
            .await
            .context("Failed to promote user")
    }

    // ===== Menu =====

    pub async fn list_menu(&self) -> Result<Vec<MenuItem>> {
        let cursor = self.menu.find(doc! {}).await?;
        cursor.try_collect().await.context("Failed to list menu")
    }

    pub async fn insert_menu_item(&self, item: &MenuItem) -> Result<InsertOneResult> {
        self.menu
            .insert_one(item)
            .await
            .context("Failed to insert menu item")
    }

    pub async fn delete_menu_item(&self, id: &str) -> Result<DeleteResult> {
        let oid = ObjectId::parse_str(id).context("Invalid menu item id")?;
        self.menu
            .delete_one(doc! { "_id": oid })
            .await
            .context("Failed to delete menu item")
    }

    // ===== Reviews =====

    pub async fn list_reviews(&self) -> Result<Vec<Review>> {
        let cursor = self.reviews.find(doc! {}).await?;
        cursor.try_collect().await.context("Failed to list reviews")
    }

    // ===== Carts =====

    pub async fn list_cart_items(&self, email: &str) -> Result<Vec<CartItem>> {
        let cursor = self.carts.find(doc! { "email": email }).await?;
        cursor
            .try_collect()
            .await
            .context("Failed to list cart items")
    }

    pub async fn insert_cart_item(&self, item: &CartItem) -> Result<InsertOneResult> {
        self.carts
            .insert_one(item)
            .await
            .context("Failed to insert cart item")
    }

    pub async fn delete_cart_item(&self, id: &str) -> Result<DeleteResult> {
        let oid = ObjectId::parse_str(id).context("Invalid cart item id")?;
        self.carts
            .delete_one(doc! { "_id": oid })
            .await
            .context("Failed to delete cart item")
    }
}
