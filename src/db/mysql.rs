use crate::db::models::{NewPost, Post};
use crate::db::queries::{
    DELETE_POST, INSERT_POST, SELECT_POST, SELECT_POSTS, UPDATE_POST, bind_values, row_to_post,
};
use crate::db::schema::MYSQL_INIT;
use crate::db::store::PostStore;
use crate::error::BlogError;
use async_trait::async_trait;
use sqlx::{MySql, Pool};

pub type MySqlPool = Pool<MySql>;

/// MySQL-backed store. sqlx negotiates `CLIENT_FOUND_ROWS`, so `rows_affected`
/// on UPDATE counts matched rows and a repeated identical update is not a miss.
#[derive(Clone)]
pub struct MySqlPostStore {
    pool: MySqlPool,
}

impl MySqlPostStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for MySqlPostStore {
    async fn init_schema(&self) -> Result<(), BlogError> {
        sqlx::query(MYSQL_INIT).execute(&self.pool).await?;
        Ok(())
    }

    async fn insert(&self, post: &NewPost) -> Result<i64, BlogError> {
        let (category, tags) = bind_values(post)?;
        let res = sqlx::query(INSERT_POST)
            .bind(&post.title)
            .bind(&post.content)
            .bind(category)
            .bind(tags)
            .execute(&self.pool)
            .await?;
        let id = i64::try_from(res.last_insert_id())
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        Ok(id)
    }

    async fn update(&self, id: i64, post: &NewPost) -> Result<u64, BlogError> {
        let (category, tags) = bind_values(post)?;
        let res = sqlx::query(UPDATE_POST)
            .bind(&post.title)
            .bind(&post.content)
            .bind(category)
            .bind(tags)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, BlogError> {
        let res = sqlx::query(DELETE_POST)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }

    async fn get(&self, id: i64) -> Result<Option<Post>, BlogError> {
        let row = sqlx::query(SELECT_POST)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_post).transpose()
    }

    async fn list(&self) -> Result<Vec<Post>, BlogError> {
        let rows = sqlx::query(SELECT_POSTS).fetch_all(&self.pool).await?;
        rows.iter().map(row_to_post).collect()
    }
}
