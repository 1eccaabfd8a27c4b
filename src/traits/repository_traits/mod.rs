pub mod stats_repository;
