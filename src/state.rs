use std::fmt;
use std::sync::Arc;

use rollcall_config::{CorsConfig, JwtConfig, PasswordConfig};
use rollcall_db::ClassroomStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ClassroomStore>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub password_config: PasswordConfig,
}

impl AppState {
    pub fn new(
        store: Arc<dyn ClassroomStore>,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
        password_config: PasswordConfig,
    ) -> Self {
        Self {
            store,
            jwt_config,
            cors_config,
            password_config,
        }
    }

    pub fn store(&self) -> &dyn ClassroomStore {
        self.store.as_ref()
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("cors_config", &self.cors_config)
            .field("password_config", &self.password_config)
            .finish_non_exhaustive()
    }
}
