// Service exports
pub mod demo_data;
pub mod session;
pub mod storage;

pub use demo_data::{demo_profiles, DemoDataError, DemoDataService, LoginResult};
pub use session::{SessionError, SessionGate, SessionState};
pub use storage::{ClientStorage, StorageKey, CURRENT_USER_KEY, THEME_KEY};
