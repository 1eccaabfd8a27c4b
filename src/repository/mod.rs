pub mod stats_repository_impl;
