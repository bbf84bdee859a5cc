//! Service layer for table designer
//!
//! Provides DDL generation and identifier normalization.

mod ddl_generator;
mod naming;

pub use ddl_generator::DdlGenerator;
pub use naming::to_snake_case;
