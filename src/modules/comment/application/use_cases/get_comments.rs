use async_trait::async_trait;

use crate::modules::comment::application::domain::entities::CommentView;
use crate::modules::comment::application::ports::outgoing::CommentQuery;

#[derive(Debug, Clone)]
pub enum GetCommentsError {
    QueryError(String),
}

impl std::fmt::Display for GetCommentsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetCommentsError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for GetCommentsError {}

#[async_trait]
pub trait IGetCommentsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CommentView>, GetCommentsError>;
}

pub struct GetCommentsUseCase<Q>
where
    Q: CommentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCommentsUseCase<Q>
where
    Q: CommentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetCommentsUseCase for GetCommentsUseCase<Q>
where
    Q: CommentQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CommentView>, GetCommentsError> {
        self.query
            .list_comments()
            .await
            .map_err(|e| GetCommentsError::QueryError(e.to_string()))
    }
}
