pub mod like_repository_postgres;
