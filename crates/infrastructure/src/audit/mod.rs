mod csv_sink;

pub use csv_sink::CsvAuditSink;
