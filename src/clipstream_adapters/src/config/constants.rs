pub mod env {
    pub const ACCESS_TOKEN_SECRET_ENV_VAR: &str = "ACCESS_TOKEN_SECRET";
    pub const ACCESS_TOKEN_TTL_ENV_VAR: &str = "ACCESS_TOKEN_TTL";
    pub const REFRESH_TOKEN_SECRET_ENV_VAR: &str = "REFRESH_TOKEN_SECRET";
    pub const REFRESH_TOKEN_TTL_ENV_VAR: &str = "REFRESH_TOKEN_TTL";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "ALLOWED_ORIGINS";
    pub const HASH_MEMORY_KIB_ENV_VAR: &str = "HASH_MEMORY_KIB";
    pub const HASH_ITERATIONS_ENV_VAR: &str = "HASH_ITERATIONS";
    pub const HASH_PARALLELISM_ENV_VAR: &str = "HASH_PARALLELISM";
}

pub const ACCESS_COOKIE_NAME: &str = "accessToken";
pub const REFRESH_COOKIE_NAME: &str = "refreshToken";

pub mod defaults {
    /// 10 minutes
    pub const ACCESS_TOKEN_TTL_SECONDS: i64 = 600;
    /// 10 days
    pub const REFRESH_TOKEN_TTL_SECONDS: i64 = 864_000;
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
