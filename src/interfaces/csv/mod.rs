pub mod purchase_reader;
pub mod till_writer;
