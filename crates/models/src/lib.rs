pub mod errors;
pub mod db;
pub mod file_record;
