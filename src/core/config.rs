use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub workflow: WorkflowConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

/// Which key-value backend holds the collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(format!(
                "STORAGE_BACKEND must be 'file' or 'memory', got '{}'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory holding one JSON file per collection (file backend only)
    pub data_dir: PathBuf,
}

/// What happens to collection records when their waste item is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    /// Leave collection records in place (they become orphans)
    #[default]
    Keep,
    /// Remove linked collection records together with the waste item
    Cascade,
    /// Refuse to remove a waste item that still has collection records
    Block,
}

impl FromStr for DeletePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep" => Ok(DeletePolicy::Keep),
            "cascade" => Ok(DeletePolicy::Cascade),
            "block" => Ok(DeletePolicy::Block),
            other => Err(format!(
                "WASTE_DELETE_POLICY must be 'keep', 'cascade' or 'block', got '{}'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    /// Hours between assignment and the scheduled pickup
    pub pickup_lead_time_hours: i64,
    pub delete_policy: DeletePolicy,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            storage: StorageConfig::from_env()?,
            workflow: WorkflowConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, String> {
        let backend = env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "file".to_string())
            .parse::<StorageBackend>()?;

        let data_dir = PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string()));

        Ok(Self { backend, data_dir })
    }
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            pickup_lead_time_hours: Self::DEFAULT_PICKUP_LEAD_TIME_HOURS,
            delete_policy: DeletePolicy::default(),
        }
    }
}

impl WorkflowConfig {
    const DEFAULT_PICKUP_LEAD_TIME_HOURS: i64 = 24;
    /// One year
    pub const MAX_PICKUP_LEAD_TIME_HOURS: i64 = 24 * 366;

    fn parse_pickup_lead_time(raw: &str) -> Result<i64, String> {
        let hours = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| "PICKUP_LEAD_TIME_HOURS must be a valid number".to_string())?;

        if !(0..=Self::MAX_PICKUP_LEAD_TIME_HOURS).contains(&hours) {
            return Err(format!(
                "PICKUP_LEAD_TIME_HOURS must be between 0 and {}",
                Self::MAX_PICKUP_LEAD_TIME_HOURS
            ));
        }

        Ok(hours)
    }

    pub fn from_env() -> Result<Self, String> {
        let pickup_lead_time_hours = Self::parse_pickup_lead_time(
            &env::var("PICKUP_LEAD_TIME_HOURS")
                .unwrap_or_else(|_| Self::DEFAULT_PICKUP_LEAD_TIME_HOURS.to_string()),
        )?;

        let delete_policy = env::var("WASTE_DELETE_POLICY")
            .unwrap_or_else(|_| "keep".to_string())
            .parse::<DeletePolicy>()?;

        Ok(Self {
            pickup_lead_time_hours,
            delete_policy,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "ECO-TECH API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Electronic waste registration and collection tracking".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}
