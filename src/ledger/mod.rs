pub mod source;

pub use source::FileLedgerSource;
