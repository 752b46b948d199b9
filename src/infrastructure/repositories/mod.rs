// Repository implementations (data access layer)
// SQLite adapters for the domain repository traits

pub mod sqlite_document_store;
pub mod sqlite_invoice_repository;
pub mod sqlite_order_repository;
pub mod sqlite_user_repository;

pub use sqlite_document_store::SqliteDocumentStore;
pub use sqlite_invoice_repository::SqliteInvoiceRepository;
pub use sqlite_order_repository::SqliteOrderRepository;
pub use sqlite_user_repository::SqliteUserRepository;
