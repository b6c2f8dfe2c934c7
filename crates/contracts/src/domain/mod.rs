pub mod a001_support_record;
