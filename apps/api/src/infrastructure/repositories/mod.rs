pub mod sqlx_calculation_repository;
