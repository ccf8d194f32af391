pub mod http;
pub mod loader;
pub mod payload;

pub use http::{HttpProviderFactory, HttpStateProvider};
pub use loader::{LoadSummary, StateRecordLoader, StateRecordLoaderError};
pub use payload::{RecordsPayload, convert_records};
