// Repository traits (ports) and the row types they persist

pub mod document_repository;
pub mod invoice_repository;
pub mod order_repository;
pub mod user_repository;

pub use document_repository::DocumentStore;
pub use invoice_repository::InvoiceRepository;
pub use order_repository::OrderRepository;
pub use user_repository::UserRepository;
