pub mod comment_query_postgres;
pub mod comment_repository_postgres;
pub mod sea_orm_entity;
