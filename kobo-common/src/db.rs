use crate::library::text_column;
use crate::{Annotation, BookMetadata, CitationStyle};
use futures::stream::BoxStream;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::debug;

const PLAIN_ANNOTATIONS_QUERY: &str = r#"
    SELECT Text, VolumeID FROM Bookmark
    WHERE Text IS NOT NULL AND LENGTH(Text) > 0
"#;

const MLA_ANNOTATIONS_QUERY: &str = r#"
    SELECT Text, VolumeID, Annotation, DateCreated FROM Bookmark
    WHERE Text IS NOT NULL AND LENGTH(Text) > 0
"#;

const BOOK_METADATA_QUERY: &str = r#"
    SELECT Title, Attribution FROM content
    WHERE ContentID = ?
    LIMIT 1
"#;

/// Read-only handle on the reader's `KoboReader.sqlite`.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn open(path: &Path) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false);

        // One connection holds the annotation cursor, the other serves
        // metadata lookups issued while that cursor is open.
        let pool = SqlitePoolOptions::new()
            .max_connections(2)
            .connect_with(options)
            .await?;

        debug!("Opened reader database {:?}", path);
        Ok(Self { pool })
    }

    /// Streams every bookmark with non-empty highlighted text, in table order.
    pub fn annotations(
        &self,
        style: CitationStyle,
    ) -> BoxStream<'_, Result<Annotation, sqlx::Error>> {
        let sql = match style {
            CitationStyle::Plain => PLAIN_ANNOTATIONS_QUERY,
            CitationStyle::Mla => MLA_ANNOTATIONS_QUERY,
        };

        sqlx::query_as::<_, Annotation>(sql).fetch(&self.pool)
    }

    /// Looks up the title and author of `volume_id`, falling back to
    /// placeholders when the content row is missing or unreadable.
    pub async fn book_metadata(&self, volume_id: &str) -> BookMetadata {
        match self.lookup_book_metadata(volume_id).await {
            Ok(Some(metadata)) => metadata,
            Ok(None) => {
                debug!("No content row for {:?}", volume_id);
                BookMetadata::default()
            }
            Err(e) => {
                debug!("Metadata lookup for {:?} failed: {}", volume_id, e);
                BookMetadata::default()
            }
        }
    }

    async fn lookup_book_metadata(
        &self,
        volume_id: &str,
    ) -> Result<Option<BookMetadata>, sqlx::Error> {
        let Some(row) = sqlx::query(BOOK_METADATA_QUERY)
            .bind(volume_id)
            .fetch_optional(&self.pool)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(BookMetadata::new(
            text_column(&row, "Title")?,
            text_column(&row, "Attribution")?,
        )))
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
