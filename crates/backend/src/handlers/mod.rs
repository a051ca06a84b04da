pub mod a001_log_entry;
