/// Default folder new uploads are placed in.
pub const DEFAULT_FOLDER: &str = "pottery";

/// Default base URL of the Cloudinary upload API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.cloudinary.com/v1_1";

/// Default base URL of the Cloudinary delivery CDN.
pub const DEFAULT_DELIVERY_BASE_URL: &str = "https://res.cloudinary.com";

/// Cloudinary account credentials and endpoints.
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Folder used when an upload does not name one.
    pub folder: String,
    pub api_base_url: String,
    pub delivery_base_url: String,
}

impl CloudinaryConfig {
    /// Load Cloudinary configuration from environment variables.
    ///
    /// | Env Var                      | Required | Default                           |
    /// |------------------------------|----------|-----------------------------------|
    /// | `CLOUDINARY_CLOUD_NAME`      | **yes**  | --                                |
    /// | `CLOUDINARY_API_KEY`         | **yes**  | --                                |
    /// | `CLOUDINARY_API_SECRET`      | **yes**  | --                                |
    /// | `CLOUDINARY_FOLDER`          | no       | `pottery`                         |
    /// | `CLOUDINARY_API_BASE_URL`    | no       | `https://api.cloudinary.com/v1_1` |
    ///
    /// # Panics
    ///
    /// Panics if any required variable is missing or empty.
    pub fn from_env() -> Self {
        let required = |name: &str| {
            let value = std::env::var(name).unwrap_or_else(|_| panic!("{name} must be set"));
            assert!(!value.is_empty(), "{name} must not be empty");
            value
        };

        Self {
            cloud_name: required("CLOUDINARY_CLOUD_NAME"),
            api_key: required("CLOUDINARY_API_KEY"),
            api_secret: required("CLOUDINARY_API_SECRET"),
            folder: std::env::var("CLOUDINARY_FOLDER").unwrap_or_else(|_| DEFAULT_FOLDER.into()),
            api_base_url: std::env::var("CLOUDINARY_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.into()),
            delivery_base_url: DEFAULT_DELIVERY_BASE_URL.into(),
        }
    }
}
